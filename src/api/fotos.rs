//! Photo upload and management handlers.
//!
//! Uploads are multipart/form-data. File parts carry the photos; an
//! optional `descricao` text part applies to every photo in the batch,
//! wherever it appears among the parts. The MIME allow-list and the
//! size/count limits are enforced here, at the boundary: a batch
//! containing any disallowed or oversized file fails as a whole and
//! nothing reaches storage.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::StreamExt;

use crate::auth::BearerAuth;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{FotoResponse, UploadOutcome, UploadedFoto};
use crate::services::FotoService;
use crate::services::foto::tipo_mime_permitido;

async fn parse_batch(mut payload: Multipart, config: &Config) -> AppResult<Vec<UploadedFoto>> {
    let mut fotos: Vec<UploadedFoto> = Vec::new();
    let mut descricao: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let content_disposition = field
            .content_disposition()
            .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;

        let field_name = content_disposition.get_name();
        let filename = content_disposition.get_filename().map(|s| s.to_string());

        // Text field: shared description for the batch
        if filename.is_none() && field_name == Some("descricao") {
            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk_data =
                    chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
                data.extend_from_slice(&chunk_data);
            }
            if let Ok(value) = String::from_utf8(data) {
                let value = value.trim().to_string();
                if !value.is_empty() {
                    descricao = Some(value);
                }
            }
            continue;
        }

        let Some(nome_original) = filename else {
            // Unknown text field, drain and ignore
            while let Some(chunk) = field.next().await {
                let _ = chunk;
            }
            continue;
        };

        if fotos.len() >= config.max_fotos_per_request {
            return Err(AppError::InvalidInput(format!(
                "Máximo de {} fotos por requisição",
                config.max_fotos_per_request
            )));
        }

        let tipo_mime = field.content_type().map(|m| m.to_string());
        if !tipo_mime.as_deref().is_some_and(tipo_mime_permitido) {
            // One disallowed type fails the whole batch
            return Err(AppError::InvalidInput(format!(
                "Tipo de arquivo não permitido: '{}' ({})",
                nome_original,
                tipo_mime.as_deref().unwrap_or("desconhecido")
            )));
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
            if bytes.len() + data.len() > config.max_foto_size {
                return Err(AppError::InvalidInput(format!(
                    "Arquivo '{}' excede o limite de {} bytes",
                    nome_original, config.max_foto_size
                )));
            }
            bytes.extend_from_slice(&data);
        }

        fotos.push(UploadedFoto {
            nome_original,
            tipo_mime,
            descricao: None,
            bytes,
        });
    }

    // The descricao part may arrive after the files it describes
    for foto in &mut fotos {
        foto.descricao = descricao.clone();
    }

    Ok(fotos)
}

/// Attach photos to a laudo. The batch is validated as a whole at the
/// boundary; once accepted, each file is saved independently and
/// per-file storage failures are reported alongside the saved ones.
#[utoipa::path(
    post,
    path = "/api/laudos/{id}/fotos",
    tag = "Fotos",
    params(("id" = i32, Path, description = "Laudo id")),
    request_body(content = Object, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload outcome with saved photos and storage failures", body = UploadOutcome),
        (status = 400, description = "Empty batch, disallowed file type, oversized file or malformed multipart", body = crate::error::ErrorResponse),
        (status = 404, description = "Laudo not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn adicionar_fotos(
    _auth: BearerAuth,
    service: web::Data<FotoService>,
    config: web::Data<Config>,
    path: web::Path<i32>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let fotos = parse_batch(payload, config.get_ref()).await?;
    let outcome = service.adicionar_fotos(path.into_inner(), fotos).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// List photo metadata for a laudo, newest first.
#[utoipa::path(
    get,
    path = "/api/laudos/{id}/fotos",
    tag = "Fotos",
    params(("id" = i32, Path, description = "Laudo id")),
    responses(
        (status = 200, description = "Photos of the laudo", body = Vec<FotoResponse>),
        (status = 404, description = "Laudo not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn listar_fotos(
    _auth: BearerAuth,
    service: web::Data<FotoService>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let fotos = service.listar_por_laudo(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fotos))
}

/// Remove one photo (metadata and backing file).
#[utoipa::path(
    delete,
    path = "/api/fotos/{id}",
    tag = "Fotos",
    params(("id" = i32, Path, description = "Foto id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remover_foto(
    _auth: BearerAuth,
    service: web::Data<FotoService>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    service.remover_foto(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/laudos/{id}/fotos")
            .route(web::post().to(adicionar_fotos))
            .route(web::get().to(listar_fotos)),
    )
    .service(web::resource("/fotos/{id}").route(web::delete().to(remover_foto)));
}
