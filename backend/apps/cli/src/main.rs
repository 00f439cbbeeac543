//! strext Entry Point
//!
//! Command-line shell over the `parsing` and `platform` crates.
//! Uses `anyhow` for startup errors; command failures are reported
//! through `kernel::error::kind::ErrorKind` and its exit codes.

mod command;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use kernel::error::kind::ErrorKind;
use platform::DEFAULT_ITERATIONS;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::{Command, Output};
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "strext", version, about = "Lenient numeric parsing and PBKDF2 password hashing")]
struct Cli {
    /// Decimal separator both ',' and '.' are read as
    #[arg(long, env = "STREXT_DECIMAL_SEPARATOR", default_value_t = '.')]
    decimal_separator: char,
    /// PBKDF2 round count (must match between hash and verify)
    #[arg(long, env = "STREXT_HASH_ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,
    /// PBKDF2 pseudorandom function: sha1 or sha256
    #[arg(long, env = "STREXT_HASH_PRF", default_value = "sha1")]
    prf: String,
    /// Print results and errors as JSON
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Report<'a> {
    Ok { value: &'a Output },
    Error { kind: ErrorKind, message: String },
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strext=info,parsing=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_settings(cli.decimal_separator, cli.iterations, &cli.prf)?;

    tracing::debug!(
        command = cli.command.name(),
        decimal_separator = %config.parser.decimal_separator(),
        iterations = config.hash.iterations,
        prf = %config.hash.prf,
        "Running command"
    );

    match cli.command.execute(&config) {
        Ok(output) => {
            if cli.json {
                println!("{}", serde_json::to_string(&Report::Ok { value: &output })?);
            } else {
                println!("{}", output.render());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            e.log();
            let kind = e.kind();
            if cli.json {
                let report = Report::Error {
                    kind,
                    message: e.to_string(),
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                eprintln!("error: {e}");
            }
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
