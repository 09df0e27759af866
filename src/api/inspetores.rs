//! Inspector account API handlers. Password material never appears in
//! responses.

use actix_web::{HttpResponse, web};

use crate::auth::BearerAuth;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{AtualizarInspetorRequest, CriarInspetorRequest, InspetorResponse};
use crate::services::inspetor;

#[utoipa::path(
    get,
    path = "/api/inspetores",
    tag = "Inspetores",
    responses(
        (status = 200, description = "All inspectors", body = Vec<InspetorResponse>),
    ),
    security(("bearer_auth" = []))
)]
pub async fn listar_inspetores(
    _auth: BearerAuth,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let inspetores = inspetor::listar(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(inspetores))
}

#[utoipa::path(
    get,
    path = "/api/inspetores/{id}",
    tag = "Inspetores",
    params(("id" = i32, Path, description = "Inspector id")),
    responses(
        (status = 200, description = "The inspector", body = InspetorResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn obter_inspetor(
    _auth: BearerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let inspetor = inspetor::obter(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(inspetor))
}

#[utoipa::path(
    post,
    path = "/api/inspetores",
    tag = "Inspetores",
    request_body = CriarInspetorRequest,
    responses(
        (status = 201, description = "Inspector created", body = InspetorResponse),
        (status = 400, description = "Missing fields or duplicate email", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn criar_inspetor(
    _auth: BearerAuth,
    pool: web::Data<DbPool>,
    body: web::Json<CriarInspetorRequest>,
) -> AppResult<HttpResponse> {
    let inspetor = inspetor::criar(pool.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(inspetor))
}

#[utoipa::path(
    put,
    path = "/api/inspetores/{id}",
    tag = "Inspetores",
    params(("id" = i32, Path, description = "Inspector id")),
    request_body = AtualizarInspetorRequest,
    responses(
        (status = 200, description = "Updated inspector", body = InspetorResponse),
        (status = 400, description = "Duplicate email", body = crate::error::ErrorResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn atualizar_inspetor(
    _auth: BearerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<AtualizarInspetorRequest>,
) -> AppResult<HttpResponse> {
    let inspetor = inspetor::atualizar(pool.get_ref(), path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(inspetor))
}

#[utoipa::path(
    delete,
    path = "/api/inspetores/{id}",
    tag = "Inspetores",
    params(("id" = i32, Path, description = "Inspector id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remover_inspetor(
    _auth: BearerAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    inspetor::remover(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/inspetores")
            .route(web::get().to(listar_inspetores))
            .route(web::post().to(criar_inspetor)),
    )
    .service(
        web::resource("/inspetores/{id}")
            .route(web::get().to(obter_inspetor))
            .route(web::put().to(atualizar_inspetor))
            .route(web::delete().to(remover_inspetor)),
    );
}
