//! Laudo API handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::auth::BearerAuth;
use crate::error::AppResult;
use crate::models::{IpaResult, LaudoResponse};
use crate::services::LaudoService;

/// Query parameters for update: optional expected version for optimistic
/// concurrency. When omitted, last write wins.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizarQuery {
    pub versao: Option<i32>,
}

/// List every laudo, newest first, photos included.
#[utoipa::path(
    get,
    path = "/api/laudos",
    tag = "Laudos",
    responses(
        (status = 200, description = "All laudos", body = Vec<LaudoResponse>),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn listar_laudos(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
) -> AppResult<HttpResponse> {
    let laudos = service.listar().await?;
    Ok(HttpResponse::Ok().json(laudos))
}

/// Get one laudo by id.
#[utoipa::path(
    get,
    path = "/api/laudos/{id}",
    tag = "Laudos",
    params(("id" = i32, Path, description = "Laudo id")),
    responses(
        (status = 200, description = "The laudo", body = LaudoResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn obter_laudo(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let laudo = service.obter(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(laudo))
}

/// Find laudos by plate.
#[utoipa::path(
    get,
    path = "/api/laudos/placa/{placa}",
    tag = "Laudos",
    params(("placa" = String, Path, description = "Vehicle plate")),
    responses(
        (status = 200, description = "Matching laudos, newest first", body = Vec<LaudoResponse>),
    ),
    security(("bearer_auth" = []))
)]
pub async fn buscar_por_placa(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let laudos = service.buscar_por_placa(&path).await?;
    Ok(HttpResponse::Ok().json(laudos))
}

/// Create a laudo. The body is the raw checklist field map; it is
/// sanitized, validated and scored before anything is persisted.
#[utoipa::path(
    post,
    path = "/api/laudos",
    tag = "Laudos",
    request_body = Object,
    responses(
        (status = 201, description = "Laudo created with computed IPA", body = LaudoResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn criar_laudo(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let laudo = service.criar(&body).await?;
    Ok(HttpResponse::Created().json(laudo))
}

/// Preview the IPA result for a field map without persisting anything.
/// Runs the exact pipeline used by create and update.
#[utoipa::path(
    post,
    path = "/api/laudos/previa",
    tag = "Laudos",
    request_body = Object,
    responses(
        (status = 200, description = "Computed IPA result", body = IpaResult),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn previa_laudo(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let ipa = service.previa(&body).await?;
    Ok(HttpResponse::Ok().json(ipa))
}

/// Update a laudo with a partial field overlay; IPA is recomputed from
/// the merged record. Pass `?versao=N` to fail with 409 if another editor
/// persisted first.
#[utoipa::path(
    put,
    path = "/api/laudos/{id}",
    tag = "Laudos",
    params(
        ("id" = i32, Path, description = "Laudo id"),
        ("versao" = Option<i32>, Query, description = "Expected stored version"),
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Updated laudo", body = LaudoResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Version conflict", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn atualizar_laudo(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    path: web::Path<i32>,
    query: web::Query<AtualizarQuery>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let laudo = service
        .atualizar(path.into_inner(), &body, query.versao)
        .await?;
    Ok(HttpResponse::Ok().json(laudo))
}

/// Delete a laudo and its photos.
#[utoipa::path(
    delete,
    path = "/api/laudos/{id}",
    tag = "Laudos",
    params(("id" = i32, Path, description = "Laudo id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remover_laudo(
    _auth: BearerAuth,
    service: web::Data<LaudoService>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    service.remover(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/laudos")
            .route(web::get().to(listar_laudos))
            .route(web::post().to(criar_laudo)),
    )
    .service(web::resource("/laudos/previa").route(web::post().to(previa_laudo)))
    .service(web::resource("/laudos/placa/{placa}").route(web::get().to(buscar_por_placa)))
    .service(
        web::resource("/laudos/{id}")
            .route(web::get().to(obter_laudo))
            .route(web::put().to(atualizar_laudo))
            .route(web::delete().to(remover_laudo)),
    );
}
