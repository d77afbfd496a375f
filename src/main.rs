use std::sync::Arc;

use clap::Parser;

mod api;
mod cli;
mod core;
mod error;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::gate::Gate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::load();
    config.apply_args(&args);

    logging::init(&config)?;
    log::debug!(
        "Using user store {} (session duration {:?})",
        config.users_file.display(),
        config.session_duration
    );

    let gate = Arc::new(Gate::from_config(&config));

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            log::warn!(
                "Passwords in {} are stored in plaintext; do not use this store for real accounts",
                config.users_file.display()
            );
            api::start_server(gate, config).await?;
        }
        CliCommand::Generate {
            length,
            no_uppercase,
            no_numbers,
            no_special,
            analyze,
        } => {
            cli::handlers::handle_generate(
                &config,
                length,
                !no_uppercase,
                !no_numbers,
                !no_special,
                analyze,
            )?;
        }
        CliCommand::Analyze { password } => cli::handlers::handle_analyze(&password),
        CliCommand::Register { username } => cli::handlers::handle_register(&gate, &username)?,
        CliCommand::Users => cli::handlers::handle_list_users(&gate),
    }

    Ok(())
}
