// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Credential store file (overrides USERS_FILE)
    #[arg(long, global = true)]
    pub users_file: Option<PathBuf>,

    /// Address to bind the API server to (overrides WEB_ADDRESS)
    #[arg(long, global = true)]
    pub address: Option<String>,

    /// API server port (overrides WEB_PORT)
    #[arg(long, short, global = true)]
    pub port: Option<u16>,

    /// Log level: error, warn, info, debug or trace (overrides LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
