// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::StrengthLabel;

// Authentication requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Desired username
    pub username: String,
    /// Password for the new account
    pub password: String,
    /// Must repeat `password` exactly
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Bearer token for authenticated requests
    pub token: String,
    /// The user the token was issued to
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    /// Whether the caller presented a live session
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Body of every failed request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct GenerateRequest {
    /// Password length, 4 to 50. Numeric strings are accepted. Defaults to
    /// the configured length.
    #[schema(value_type = Option<i64>)]
    pub length: Option<serde_json::Value>,
    /// Include uppercase letters (default: true)
    pub uppercase: Option<bool>,
    /// Include digits (default: true)
    pub numbers: Option<bool>,
    /// Include punctuation (default: true)
    pub special: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub success: bool,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdvancedGenerateResponse {
    pub success: bool,
    pub password: String,
    pub strength: StrengthLabel,
    /// 0 to 6
    pub score: u8,
    /// Remediation hints, in check order
    pub hints: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub success: bool,
    pub strength: StrengthLabel,
    pub score: u8,
    pub hints: Vec<String>,
}

// User listing
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub success: bool,
    /// Usernames in registration order, or a single placeholder entry when
    /// the store cannot be read
    pub users: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
}
