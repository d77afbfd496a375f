// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve,

    /// Generate a random password
    Generate {
        /// Password length (4 to 50)
        #[arg(long, short)]
        length: Option<i64>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out punctuation
        #[arg(long)]
        no_special: bool,

        /// Also print the strength assessment
        #[arg(long)]
        analyze: bool,
    },

    /// Score the strength of a password
    Analyze {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Register a new user (prompts for the password)
    Register {
        /// Username to register
        #[arg(required = true)]
        username: String,
    },

    /// List registered usernames
    Users,
}
