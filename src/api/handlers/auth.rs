// src/api/handlers/auth.rs

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};

use crate::api::types::{
    LoginRequest, RegisterRequest, StatusResponse, SuccessResponse, TokenResponse,
};
use crate::api::utils::authorize;
use crate::core::auth::AuthContext;
use crate::core::gate::Gate;
use crate::error::AppError;

/// Register a new user
///
/// Fails when a field is empty, the confirmation differs, or the username is taken.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = SuccessResponse),
        (status = 400, description = "Validation failed", body = crate::api::types::ErrorResponse),
        (status = 500, description = "User store unavailable", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn register(
    gate: web::Data<Arc<Gate>>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    info!("Registration attempt for '{}'", req.username);

    gate.register(&req.username, &req.password, &req.confirm_password)?;

    Ok(HttpResponse::Created().json(SuccessResponse {
        success: true,
        message: "Registration successful. You can now log in.".to_string(),
    }))
}

/// Log in with username and password
///
/// Returns a bearer token for subsequent authenticated requests.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = crate::api::types::ErrorResponse),
        (status = 500, description = "User store unavailable", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn login(
    gate: web::Data<Arc<Gate>>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = gate.login(&req.username, &req.password).map_err(|e| {
        warn!("Login failed for '{}': {}", req.username, e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        success: true,
        token,
        username: req.username.clone(),
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Authentication",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Logged out", body = SuccessResponse),
        (status = 401, description = "No live session", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn logout(ctx: AuthContext, gate: web::Data<Arc<Gate>>) -> HttpResponse {
    gate.logout(&ctx);

    HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: "You have been logged out".to_string(),
    })
}

/// Report whether the caller holds a live session
#[utoipa::path(
    get,
    path = "/auth/status",
    tag = "Authentication",
    responses(
        (status = 200, description = "Authentication status", body = StatusResponse)
    )
)]
pub async fn check_status(req: HttpRequest, gate: web::Data<Arc<Gate>>) -> HttpResponse {
    let response = match authorize(req.headers(), Some(&gate)) {
        Ok(ctx) => StatusResponse {
            success: true,
            authenticated: true,
            username: Some(ctx.username),
        },
        Err(_) => StatusResponse {
            success: true,
            authenticated: false,
            username: None,
        },
    };

    HttpResponse::Ok().json(response)
}
