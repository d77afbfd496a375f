// src/generators/strength.rs
use crate::models::{StrengthAssessment, StrengthLabel};

pub const HINT_TOO_SHORT: &str = "Password is too short";
pub const HINT_USE_TWELVE: &str = "Use at least 12 characters";
pub const HINT_UPPERCASE: &str = "Add uppercase letters";
pub const HINT_LOWERCASE: &str = "Add lowercase letters";
pub const HINT_DIGITS: &str = "Add digits";
pub const HINT_SPECIAL: &str = "Add special characters";

/// Score a password from 0 to 6.
///
/// Length gives up to 2 points (12+ chars: 2, 8..12: 1) and each present
/// character class gives 1. Hints come out in check order: length,
/// uppercase, lowercase, digit, symbol.
pub fn score_strength(password: &str) -> StrengthAssessment {
    let mut score = 0u8;
    let mut hints = Vec::new();

    let length = password.chars().count();
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
        hints.push(HINT_USE_TWELVE.to_string());
    } else {
        hints.push(HINT_TOO_SHORT.to_string());
    }

    let class_checks: [(fn(char) -> bool, &str); 4] = [
        (|c: char| c.is_uppercase(), HINT_UPPERCASE),
        (|c: char| c.is_lowercase(), HINT_LOWERCASE),
        (|c: char| c.is_numeric(), HINT_DIGITS),
        (|c: char| c.is_ascii_punctuation(), HINT_SPECIAL),
    ];

    for (present, hint) in class_checks {
        if password.chars().any(present) {
            score += 1;
        } else {
            hints.push(hint.to_string());
        }
    }

    StrengthAssessment {
        score,
        label: StrengthLabel::from_score(score),
        hints,
    }
}
