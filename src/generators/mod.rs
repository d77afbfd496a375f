// src/generators/mod.rs
mod password;
mod strength;

pub use password::generate_password;
pub use strength::score_strength;
