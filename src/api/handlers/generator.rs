// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::info;

use crate::api::types::{
    AdvancedGenerateResponse, AnalysisResponse, AnalyzeRequest, GenerateRequest, GenerateResponse,
};
use crate::api::utils::parse_length;
use crate::core::auth::AuthContext;
use crate::core::config::Config;
use crate::error::Result;
use crate::generators;
use crate::models::GenerationRequest;

fn to_generation_request(body: &GenerateRequest, config: &Config) -> Result<GenerationRequest> {
    let length = parse_length(body.length.as_ref(), config.default_password_length)?;

    GenerationRequest::new(
        length,
        body.uppercase.unwrap_or(true),
        body.numbers.unwrap_or(true),
        body.special.unwrap_or(true),
    )
}

/// Generate a random password
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    security(
        ("bearer_auth" = [])
    ),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Invalid length", body = crate::api::types::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_password(
    ctx: AuthContext,
    config: web::Data<Config>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse> {
    let request = to_generation_request(&body, &config)?;
    let password = generators::generate_password(&request);

    info!("Generated a {}-character password for '{}'", request.length, ctx.username);

    Ok(HttpResponse::Ok().json(GenerateResponse {
        success: true,
        password,
    }))
}

/// Generate a random password and score it
#[utoipa::path(
    post,
    path = "/generator/advanced",
    tag = "Generator",
    security(
        ("bearer_auth" = [])
    ),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password with strength assessment", body = AdvancedGenerateResponse),
        (status = 400, description = "Invalid length", body = crate::api::types::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_advanced(
    ctx: AuthContext,
    config: web::Data<Config>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse> {
    let request = to_generation_request(&body, &config)?;
    let password = generators::generate_password(&request);
    let assessment = generators::score_strength(&password);

    info!(
        "Generated a {}-character password for '{}' ({})",
        request.length, ctx.username, assessment.label
    );

    Ok(HttpResponse::Ok().json(AdvancedGenerateResponse {
        success: true,
        password,
        strength: assessment.label,
        score: assessment.score,
        hints: assessment.hints,
    }))
}

/// Score the strength of an arbitrary password
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    security(
        ("bearer_auth" = [])
    ),
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Strength assessment", body = AnalysisResponse),
        (status = 401, description = "Unauthorized", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn analyze_password(_ctx: AuthContext, body: web::Json<AnalyzeRequest>) -> HttpResponse {
    let assessment = generators::score_strength(&body.password);

    HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        strength: assessment.label,
        score: assessment.score,
        hints: assessment.hints,
    })
}
