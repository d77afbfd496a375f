// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::cli::Args;
use crate::models::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Longest session a token may be issued for (30 days).
pub const MAX_SESSION_MINUTES: u64 = 30 * 24 * 60;

// Configuration for the service
#[derive(Debug, Clone)]
pub struct Config {
    // Credential store
    pub users_file: PathBuf,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Session
    pub session_duration: Duration,
    pub jwt_secret: Option<String>,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("users.txt"),

            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            session_duration: Duration::from_secs(60 * 60), // 1 hour
            jwt_secret: None, // generated per process when unset

            default_password_length: DEFAULT_PASSWORD_LENGTH,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Unparseable values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("USERS_FILE") {
            config.users_file = PathBuf::from(path);
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(port) = lookup("WEB_PORT").and_then(|v| v.parse().ok()) {
            config.web_port = port;
        }

        if let Some(minutes) = lookup("SESSION_DURATION_MINUTES").and_then(|v| v.parse::<u64>().ok()) {
            let minutes = minutes.clamp(1, MAX_SESSION_MINUTES);
            config.session_duration = Duration::from_secs(minutes * 60);
        }

        if let Some(secret) = lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            config.jwt_secret = Some(secret);
        }

        if let Some(length) = lookup("DEFAULT_PASSWORD_LENGTH").and_then(|v| v.parse::<usize>().ok()) {
            config.default_password_length =
                length.clamp(MIN_PASSWORD_LENGTH as usize, MAX_PASSWORD_LENGTH as usize);
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE").filter(|s| !s.is_empty()) {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// Command-line flags win over the environment.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(path) = &args.users_file {
            self.users_file = path.clone();
        }
        if let Some(address) = &args.address {
            self.web_address = address.clone();
        }
        if let Some(port) = args.port {
            self.web_port = port;
        }
        if let Some(level) = args.log_level.as_deref().and_then(|l| l.parse().ok()) {
            self.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);

        assert_eq!(config.users_file, PathBuf::from("users.txt"));
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.jwt_secret.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("USERS_FILE", "/var/lib/passgate/users.txt"),
            ("WEB_PORT", "8080"),
            ("SESSION_DURATION_MINUTES", "15"),
            ("JWT_SECRET", "s3cret"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.users_file, PathBuf::from("/var/lib/passgate/users.txt"));
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.session_duration, Duration::from_secs(15 * 60));
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_keep_defaults_and_length_is_clamped() {
        let config = config_from(&[
            ("WEB_PORT", "not-a-port"),
            ("LOG_LEVEL", "chatty"),
            ("DEFAULT_PASSWORD_LENGTH", "500"),
        ]);

        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.default_password_length, 50);
    }

    #[test]
    fn session_duration_is_bounded() {
        let max = u64::MAX.to_string();
        let huge = config_from(&[("SESSION_DURATION_MINUTES", max.as_str())]);
        assert_eq!(huge.session_duration, Duration::from_secs(MAX_SESSION_MINUTES * 60));

        let zero = config_from(&[("SESSION_DURATION_MINUTES", "0")]);
        assert_eq!(zero.session_duration, Duration::from_secs(60));
    }
}
