// src/core/mod.rs
pub mod auth;
pub mod config;
pub mod gate;
pub mod store;
