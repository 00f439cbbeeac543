//! Password Hashing Configuration
//!
//! Parameters bound at hash-creation time. The stored blob records neither of
//! them, so verification must be run with the same values.

use std::fmt;

use crate::password::DEFAULT_ITERATIONS;

/// Pseudorandom function driving PBKDF2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prf {
    /// HMAC-SHA1, the scheme existing credential records were created with
    #[default]
    HmacSha1,
    /// HMAC-SHA256
    HmacSha256,
}

impl Prf {
    /// Parse a configuration name (`sha1`, `sha256`, case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha1" | "hmac-sha1" => Some(Prf::HmacSha1),
            "sha256" | "hmac-sha256" => Some(Prf::HmacSha256),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Prf::HmacSha1 => "hmac-sha1",
            Prf::HmacSha256 => "hmac-sha256",
        }
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHashConfig {
    /// PBKDF2 rounds
    pub iterations: u32,
    /// PBKDF2 pseudorandom function
    pub prf: Prf,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            prf: Prf::default(),
        }
    }
}

impl PasswordHashConfig {
    pub fn new(iterations: u32, prf: Prf) -> Self {
        Self { iterations, prf }
    }

    /// Default PRF with a custom round count
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }
}
