// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: i64 = 4;
pub const MAX_PASSWORD_LENGTH: i64 = 50;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationRequest {
    /// Build a request, rejecting lengths outside `4..=50`.
    pub fn new(
        length: i64,
        include_uppercase: bool,
        include_digits: bool,
        include_special: bool,
    ) -> Result<Self, AppError> {
        if length < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password length must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password length must not exceed {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            length: length as usize,
            include_uppercase,
            include_digits,
            include_special,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "weak")]
    Weak,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "very strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 5 => StrengthLabel::VeryStrong,
            4 => StrengthLabel::Strong,
            3 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "weak"),
            StrengthLabel::Medium => write!(f, "medium"),
            StrengthLabel::Strong => write!(f, "strong"),
            StrengthLabel::VeryStrong => write!(f, "very strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthAssessment {
    pub score: u8,
    pub label: StrengthLabel,
    pub hints: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(GenerationRequest::new(3, true, true, true).is_err());
        assert!(GenerationRequest::new(51, true, true, true).is_err());
        assert_eq!(GenerationRequest::new(4, true, true, true).unwrap().length, 4);
        assert_eq!(GenerationRequest::new(50, false, false, false).unwrap().length, 50);
    }

    #[test]
    fn negative_length_is_a_validation_error() {
        let err = GenerationRequest::new(-12, true, true, true).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn labels_follow_fixed_thresholds() {
        assert_eq!(StrengthLabel::from_score(6), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
    }

    #[test]
    fn label_serializes_with_spaces() {
        let json = serde_json::to_string(&StrengthLabel::VeryStrong).unwrap();
        assert_eq!(json, "\"very strong\"");
    }
}
