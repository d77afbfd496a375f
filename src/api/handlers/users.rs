// src/api/handlers/users.rs

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::api::types::UserListResponse;
use crate::core::auth::AuthContext;
use crate::core::gate::Gate;

/// List registered usernames
///
/// An unreadable or missing store yields a single placeholder entry.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Usernames in registration order", body = UserListResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn list_users(_ctx: AuthContext, gate: web::Data<Arc<Gate>>) -> HttpResponse {
    HttpResponse::Ok().json(UserListResponse {
        success: true,
        users: gate.list_usernames(),
    })
}
