//! Integration tests for photo attachments: partial-success uploads,
//! listing, and removal.

mod common;

use laudo_server_lib::error::AppError;
use laudo_server_lib::models::UploadedFoto;

use common::{laudo_limpo, setup};

fn foto(nome: &str, mime: &str, bytes: &[u8]) -> UploadedFoto {
    UploadedFoto {
        nome_original: nome.to_string(),
        tipo_mime: Some(mime.to_string()),
        descricao: None,
        bytes: bytes.to_vec(),
    }
}

#[tokio::test]
async fn upload_batch_saves_files_and_metadata() {
    let ctx = setup().await;
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let outcome = ctx
        .fotos
        .adicionar_fotos(
            laudo.id,
            vec![
                foto("frente.jpg", "image/jpeg", b"jpegdata"),
                foto("lateral esquerda.png", "image/png", b"pngdata"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(outcome.salvas.len(), 2);
    assert!(outcome.falhas.is_empty());

    for salva in &outcome.salvas {
        assert!(salva.caminho_arquivo.starts_with(&format!("laudos/{}/", laudo.id)));
        let path = ctx.storage.path_for(&salva.caminho_arquivo);
        assert!(path.exists(), "stored file missing at {path:?}");
    }

    // Spaces in the original name never reach the storage key
    assert!(!outcome.salvas[1].caminho_arquivo.contains(' '));
    assert_eq!(outcome.salvas[1].nome_arquivo, "lateral esquerda.png");

    let listadas = ctx.fotos.listar_por_laudo(laudo.id).await.unwrap();
    assert_eq!(listadas.len(), 2);
}

#[tokio::test]
async fn empty_batch_is_invalid_input() {
    let ctx = setup().await;
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let err = ctx
        .fotos
        .adicionar_fotos(laudo.id, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    assert!(ctx.fotos.listar_por_laudo(laudo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_to_unknown_laudo_not_found() {
    let ctx = setup().await;

    let err = ctx
        .fotos
        .adicionar_fotos(99, vec![foto("x.jpg", "image/jpeg", b"data")])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn upload_records_size_mime_and_description() {
    let ctx = setup().await;
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let outcome = ctx
        .fotos
        .adicionar_fotos(
            laudo.id,
            vec![UploadedFoto {
                nome_original: "motor.webp".to_string(),
                tipo_mime: Some("image/webp".to_string()),
                descricao: Some("Compartimento do motor".to_string()),
                bytes: vec![0u8; 1234],
            }],
        )
        .await
        .unwrap();

    let salva = &outcome.salvas[0];
    assert_eq!(salva.tamanho_arquivo, 1234);
    assert_eq!(salva.tipo_mime.as_deref(), Some("image/webp"));
    assert_eq!(salva.descricao.as_deref(), Some("Compartimento do motor"));
    assert_eq!(salva.laudo_id, laudo.id);
}

#[tokio::test]
async fn remove_foto_deletes_metadata_and_file() {
    let ctx = setup().await;
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let outcome = ctx
        .fotos
        .adicionar_fotos(laudo.id, vec![foto("painel.jpg", "image/jpeg", b"abc")])
        .await
        .unwrap();
    let salva = &outcome.salvas[0];
    let path = ctx.storage.path_for(&salva.caminho_arquivo);
    assert!(path.exists());

    ctx.fotos.remover_foto(salva.id).await.unwrap();

    assert!(!path.exists());
    assert!(ctx.fotos.listar_por_laudo(laudo.id).await.unwrap().is_empty());

    // Removing twice is NotFound
    let err = ctx.fotos.remover_foto(salva.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
