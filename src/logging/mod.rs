// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger.
///
/// The configured level is the baseline and `RUST_LOG` can refine it. Output
/// goes to stderr unless a log file is configured, in which case it is
/// appended to that file.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_file_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let log_file = dir.path().join("logs").join("passgate.log");
        let config = Config {
            log_file: Some(log_file.clone()),
            ..Config::default()
        };

        // Another test may already own the global logger; the file is
        // opened before installation either way.
        let _ = init(&config);

        assert!(log_file.exists());
    }
}
