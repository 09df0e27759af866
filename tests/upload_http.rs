//! HTTP-layer tests for the photo upload boundary: the multipart batch
//! is accepted or rejected as a whole before anything reaches storage.

mod common;

use actix_web::{App, test, web};
use serde_json::Value;

use laudo_server_lib::api;
use laudo_server_lib::config::{Config, Environment};
use laudo_server_lib::services::auth::emitir_token;

use common::{laudo_limpo, setup};

const BOUNDARY: &str = "laudo-test-boundary";

fn test_config() -> Config {
    Config {
        environment: Environment::Development,
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        uploads_dir: std::path::PathBuf::from("uploads"),
        jwt_secret: "segredo-de-teste".to_string(),
        jwt_ttl_hours: 8,
        max_foto_size: 1024,
        max_fotos_per_request: 10,
        seed_admin: false,
    }
}

struct Parte<'a> {
    nome: &'a str,
    filename: Option<&'a str>,
    content_type: Option<&'a str>,
    bytes: &'a [u8],
}

fn arquivo<'a>(filename: &'a str, content_type: &'a str, bytes: &'a [u8]) -> Parte<'a> {
    Parte {
        nome: "fotos",
        filename: Some(filename),
        content_type: Some(content_type),
        bytes,
    }
}

fn corpo_multipart(partes: &[Parte]) -> Vec<u8> {
    let mut body = Vec::new();
    for parte in partes {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match parte.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    parte.nome, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", parte.nome).as_bytes(),
            ),
        }
        if let Some(content_type) = parte.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(parte.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

#[actix_rt::test]
async fn disallowed_type_fails_whole_batch_and_persists_nothing() {
    let ctx = setup().await;
    let config = test_config();
    let token = emitir_token(&config, 1, "ana@example.com", "Ana").unwrap();
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(ctx.fotos.clone()))
            .service(web::scope("/api").configure(api::configure_foto_routes)),
    )
    .await;

    let body = corpo_multipart(&[
        arquivo("ok.jpg", "image/jpeg", b"conteudo jpeg"),
        arquivo("mal.pdf", "application/pdf", b"%PDF-1.4"),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/laudos/{}/fotos", laudo.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");

    // The allowed file in the same batch was not saved either
    let fotos = ctx.fotos.listar_por_laudo(laudo.id).await.unwrap();
    assert!(fotos.is_empty());
}

#[actix_rt::test]
async fn oversized_file_fails_whole_batch() {
    let ctx = setup().await;
    let config = test_config();
    let token = emitir_token(&config, 1, "ana@example.com", "Ana").unwrap();
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(ctx.fotos.clone()))
            .service(web::scope("/api").configure(api::configure_foto_routes)),
    )
    .await;

    let grande = vec![0u8; 2048]; // above the 1024-byte test limit
    let body = corpo_multipart(&[
        arquivo("pequena.jpg", "image/jpeg", b"ok"),
        arquivo("grande.jpg", "image/jpeg", &grande),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/laudos/{}/fotos", laudo.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let fotos = ctx.fotos.listar_por_laudo(laudo.id).await.unwrap();
    assert!(fotos.is_empty());
}

#[actix_rt::test]
async fn allowed_batch_saves_all_with_shared_description() {
    let ctx = setup().await;
    let config = test_config();
    let token = emitir_token(&config, 1, "ana@example.com", "Ana").unwrap();
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(ctx.fotos.clone()))
            .service(web::scope("/api").configure(api::configure_foto_routes)),
    )
    .await;

    // The description part arrives after the files it describes
    let body = corpo_multipart(&[
        arquivo("frente.jpg", "image/jpeg", b"frente"),
        arquivo("lateral.png", "image/png", b"lateral"),
        Parte {
            nome: "descricao",
            filename: None,
            content_type: None,
            bytes: b"Vista externa",
        },
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/laudos/{}/fotos", laudo.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let outcome: Value = test::read_body_json(resp).await;
    assert_eq!(outcome["salvas"].as_array().unwrap().len(), 2);
    // falhas is omitted entirely when no storage failure occurred
    assert!(outcome.get("falhas").is_none());
    for salva in outcome["salvas"].as_array().unwrap() {
        assert_eq!(salva["descricao"], "Vista externa");
    }
}

#[actix_rt::test]
async fn upload_without_token_is_unauthorized() {
    let ctx = setup().await;
    let config = test_config();
    let laudo = ctx.laudos.criar(&laudo_limpo()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(ctx.fotos.clone()))
            .service(web::scope("/api").configure(api::configure_foto_routes)),
    )
    .await;

    let body = corpo_multipart(&[arquivo("ok.jpg", "image/jpeg", b"conteudo")]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/laudos/{}/fotos", laudo.id))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
