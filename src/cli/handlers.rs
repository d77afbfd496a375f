// src/cli/handlers.rs
use inquire::{Password, PasswordDisplayMode};

use crate::core::config::Config;
use crate::core::gate::Gate;
use crate::generators;
use crate::models::{GenerationRequest, StrengthAssessment};
use crate::utils;

// Handlers for CLI commands
pub fn handle_generate(
    config: &Config,
    length: Option<i64>,
    include_uppercase: bool,
    include_digits: bool,
    include_special: bool,
    analyze: bool,
) -> anyhow::Result<()> {
    let length = length.unwrap_or(config.default_password_length as i64);
    let request = GenerationRequest::new(length, include_uppercase, include_digits, include_special)?;
    let password = generators::generate_password(&request);

    println!("{}", password);
    if analyze {
        print_assessment(&generators::score_strength(&password));
    }

    Ok(())
}

pub fn handle_analyze(password: &str) {
    print_assessment(&generators::score_strength(password));
}

pub fn handle_register(gate: &Gate, username: &str) -> anyhow::Result<()> {
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    let confirmation = Password::new("Confirm password:")
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    gate.register(username, &password, &confirmation)?;
    println!("✅ Registered '{}' (password {})", username, utils::mask(&password));

    Ok(())
}

pub fn handle_list_users(gate: &Gate) {
    for username in gate.list_usernames() {
        println!("{}", username);
    }
}

fn print_assessment(assessment: &StrengthAssessment) {
    println!("Strength: {} ({}/6)", assessment.label, assessment.score);
    for hint in &assessment.hints {
        println!("  • {}", hint);
    }
}
