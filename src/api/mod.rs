// src/api/mod.rs
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::core::gate::Gate;
use crate::error::AppError;

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;
pub mod utils;

// Registers the bearer scheme referenced by protected endpoints
#[derive(Default)]
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::auth::register,
        crate::api::handlers::auth::login,
        crate::api::handlers::auth::logout,
        crate::api::handlers::auth::check_status,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_advanced,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::users::list_users,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::RegisterRequest,
            crate::api::types::LoginRequest,
            crate::api::types::TokenResponse,
            crate::api::types::StatusResponse,
            crate::api::types::SuccessResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::AdvancedGenerateResponse,
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalysisResponse,
            crate::api::types::UserListResponse,
            crate::api::types::HealthResponse,
            crate::models::StrengthLabel,
            crate::models::StrengthAssessment
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and session endpoints"),
        (name = "Generator", description = "Password generation and strength scoring"),
        (name = "Users", description = "Registered user listing"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "passgate API",
        version = "0.1.0",
        description = "User login and random password generation",
        license(name = "MIT")
    )
)]
struct ApiDoc;

async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Malformed JSON bodies get the same structured failure as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into())
}

pub async fn start_server(gate: Arc<Gate>, config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting passgate API server on {}:{}", address, port);

    let gate_data = web::Data::new(gate);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                "Authorization",
                "Content-Type",
                "Accept",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(gate_data.clone())
            .app_data(config_data.clone())
            .app_data(json_config())
            .route("/api-docs/openapi.json", web::get().to(openapi_json))
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
