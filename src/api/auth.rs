//! Login endpoint.

use actix_web::{HttpResponse, web};

use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::auth;

/// Authenticate an inspector and issue a session token.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
    )
)]
pub async fn login(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let response = auth::login(pool.get_ref(), config.get_ref(), &body).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
