// src/api/utils.rs

use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use log::{debug, error, warn};

use crate::core::auth::AuthContext;
use crate::core::gate::Gate;
use crate::error::AppError;

/// Pull the bearer token out of the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers.get(AUTHORIZATION).ok_or_else(|| {
        debug!("Missing authorization header");
        AppError::Unauthorized("Authorization required".to_string())
    })?;

    let header_str = header.to_str().map_err(|_| {
        warn!("Could not convert authorization header to string");
        AppError::Unauthorized("Invalid authorization header".to_string())
    })?;

    header_str.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Invalid authorization header format");
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })
}

/// Validate the request's bearer token against the live sessions.
pub fn authorize(headers: &HeaderMap, gate: Option<&web::Data<Arc<Gate>>>) -> Result<AuthContext, AppError> {
    let token = bearer_token(headers)?;

    let gate = gate.ok_or_else(|| {
        error!("Gate is not registered as app data");
        AppError::Unauthorized("Authorization unavailable".to_string())
    })?;

    gate.auth_manager.validate_token(token).map_err(|e| {
        warn!("Token validation failed: {}", e);
        AppError::from(e)
    })
}

/// Resolve the caller, preferring the context the middleware already
/// stored in the request extensions.
pub fn extract_auth_context(req: &HttpRequest) -> Result<AuthContext, AppError> {
    if let Some(ctx) = req.extensions().get::<AuthContext>() {
        return Ok(ctx.clone());
    }

    authorize(req.headers(), req.app_data::<web::Data<Arc<Gate>>>())
}

impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_auth_context(req))
    }
}

/// Interpret a JSON `length` field. Integers and numeric strings are
/// accepted; absent or null falls back to `default`.
pub fn parse_length(value: Option<&serde_json::Value>, default: usize) -> Result<i64, AppError> {
    let invalid = || AppError::Validation("Invalid password length format".to_string());

    match value {
        None | Some(serde_json::Value::Null) => Ok(default as i64),
        Some(serde_json::Value::Number(n)) => n.as_i64().ok_or_else(invalid),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
