//! Health check endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbPool;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    status: &'static str,
    timestamp: String,
}

/// Readiness check response.
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: &'static str,
    database: &'static str,
}

/// Service status endpoint.
///
/// Returns 200 if the service is running.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse),
    )
)]
#[get("/status")]
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness endpoint: verifies database connectivity.
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Status",
    responses(
        (status = 200, description = "Service and database are ready", body = ReadyResponse),
        (status = 503, description = "Database unreachable", body = ReadyResponse),
    )
)]
#[get("/ready")]
pub async fn ready(pool: web::Data<DbPool>) -> HttpResponse {
    let db_ok = pool
        .connection()
        .execute_unprepared("SELECT 1")
        .await
        .is_ok();

    if db_ok {
        HttpResponse::Ok().json(ReadyResponse {
            status: "ok",
            database: "connected",
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadyResponse {
            status: "degraded",
            database: "unreachable",
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(status).service(ready);
}
