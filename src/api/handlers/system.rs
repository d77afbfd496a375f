// src/api/handlers/system.rs

use actix_web::{HttpResponse, Responder};

use crate::api::types::HealthResponse;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "ok".to_string(),
    })
}
