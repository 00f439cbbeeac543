//! Application Configuration
//!
//! Resolved from command-line flags, which fall back to environment
//! variables (optionally loaded from `.env`), then to library defaults.

use anyhow::{Context, anyhow};
use parsing::ParserConfig;
use platform::{PasswordHashConfig, Prf};

/// Fully resolved configuration handed to the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub parser: ParserConfig,
    pub hash: PasswordHashConfig,
}

impl AppConfig {
    /// Validate raw settings
    ///
    /// ## Arguments
    /// * `decimal_separator` - `STREXT_DECIMAL_SEPARATOR`
    /// * `iterations` - `STREXT_HASH_ITERATIONS`
    /// * `prf` - `STREXT_HASH_PRF` (`sha1` or `sha256`)
    pub fn from_settings(decimal_separator: char, iterations: u32, prf: &str) -> anyhow::Result<Self> {
        let parser = ParserConfig::new(decimal_separator).context("Invalid decimal separator")?;

        let prf = Prf::from_name(prf)
            .ok_or_else(|| anyhow!("Unknown PRF '{prf}', expected 'sha1' or 'sha256'"))?;

        if iterations == 0 {
            return Err(anyhow!("Iteration count must be at least 1"));
        }

        Ok(Self {
            parser,
            hash: PasswordHashConfig::new(iterations, prf),
        })
    }
}
