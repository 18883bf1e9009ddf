//! Command implementations for the irrigation simulator CLI.
//!
//! Provides subcommands to inspect the form catalogue, run a calculation
//! against the remote service, and manage the file-backed session flag.

use clap::Subcommand;
use riego_core::field::FormVariant;
use std::io;
use std::path::PathBuf;

pub mod calculate;
pub mod fields;
pub mod session;
pub mod store;

pub use calculate::CalculateArgs;

/// Default location of the session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".riego-session.json";

#[derive(Subcommand)]
pub enum Command {
    /// Print the form fields, their sections and accepted codes
    Fields {
        /// Form layout to describe (numeric or categorical)
        #[arg(long, default_value_t = FormVariant::Numeric)]
        variant: FormVariant,
    },

    /// Validate the form, submit it once and print the recommendations
    Calculate(CalculateArgs),

    /// Check an identifier and secret against the accepted pair
    Login {
        #[arg(short, long)]
        user: String,

        #[arg(short, long)]
        password: String,

        /// Also store the session flag in the session file
        #[arg(long)]
        persist: bool,

        /// Path of the JSON session file
        #[arg(long, env = "RIEGO_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
        session_file: PathBuf,
    },

    /// Clear the session flag after confirmation
    Logout {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Path of the JSON session file
        #[arg(long, env = "RIEGO_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
        session_file: PathBuf,
    },

    /// Report whether a session flag is present
    Status {
        /// Path of the JSON session file
        #[arg(long, env = "RIEGO_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
        session_file: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Fields { variant } => fields::run_fields(variant, &mut out),
        Command::Calculate(args) => calculate::run_calculate(&args, &mut out).await,
        Command::Login {
            user,
            password,
            persist,
            session_file,
        } => session::run_login(&user, &password, persist, &session_file, &mut out),
        Command::Logout { yes, session_file } => {
            let stdin = io::stdin();
            session::run_logout(yes, &session_file, stdin.lock(), &mut out)
        }
        Command::Status { session_file } => session::run_status(&session_file, &mut out),
    }
}
