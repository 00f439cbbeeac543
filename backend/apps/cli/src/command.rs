//! Subcommands
//!
//! Each command is a thin call into `parsing` or `platform`.

use clap::Subcommand;
use parsing::NumericParser;
use platform::PasswordHasher;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::CommandResult;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse lenient integer text
    ParseInt {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Returned instead of failing when the value is not an integer
        #[arg(long, allow_hyphen_values = true)]
        default: Option<i32>,
        /// Treat blank input as "no value" instead of a format error
        #[arg(long)]
        nullable: bool,
    },
    /// Parse lenient decimal text
    ParseDouble {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Returned instead of failing when the value is not a number
        #[arg(long, allow_hyphen_values = true)]
        default: Option<f64>,
        /// Treat blank input as "no value" instead of a format error
        #[arg(long)]
        nullable: bool,
    },
    /// Hash a password with a fresh random salt
    Hash { password: String },
    /// Verify a password against a stored hash
    Verify { hash: String, password: String },
}

/// Successful command output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Int(Option<i32>),
    Double(Option<f64>),
    Hash(String),
    Verified(bool),
}

impl Output {
    /// Plain-text rendering; absent values print as `null`
    pub fn render(&self) -> String {
        match self {
            Output::Int(Some(v)) => v.to_string(),
            Output::Double(Some(v)) => v.to_string(),
            Output::Int(None) | Output::Double(None) => "null".to_string(),
            Output::Hash(hash) => hash.clone(),
            Output::Verified(ok) => ok.to_string(),
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ParseInt { .. } => "parse-int",
            Command::ParseDouble { .. } => "parse-double",
            Command::Hash { .. } => "hash",
            Command::Verify { .. } => "verify",
        }
    }

    pub fn execute(&self, config: &AppConfig) -> CommandResult<Output> {
        let parser = NumericParser::new(config.parser);
        let hasher = PasswordHasher::new(config.hash);

        let output = match self {
            Command::ParseInt {
                value,
                default,
                nullable: true,
            } => Output::Int(parser.parse_nullable_int(value.as_str(), *default)?),
            Command::ParseInt {
                value,
                default,
                nullable: false,
            } => Output::Int(Some(parser.parse_int(value.as_str(), *default)?)),
            Command::ParseDouble {
                value,
                default,
                nullable: true,
            } => Output::Double(parser.parse_nullable_double(value.as_str(), *default)?),
            Command::ParseDouble {
                value,
                default,
                nullable: false,
            } => Output::Double(Some(parser.parse_double(value.as_str(), *default)?)),
            Command::Hash { password } => Output::Hash(hasher.hash(password)?.to_base64()),
            Command::Verify { hash, password } => Output::Verified(hasher.verify(hash, password)?),
        };

        Ok(output)
    }
}
