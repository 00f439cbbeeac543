//! Password Hashing and Verification
//!
//! Salted, iterated PBKDF2 password hashing with:
//! - 16 bytes of OS-random salt per hash
//! - 20-byte derived key (HMAC-SHA1 by default)
//! - Zeroization of derived key material
//! - Constant-time comparison
//!
//! ## Stored Format
//! Base64 (standard alphabet, padded) of exactly 36 bytes:
//!
//! | bytes  | content     |
//! |--------|-------------|
//! | 0..16  | salt        |
//! | 16..36 | derived key |
//!
//! The layout is a persisted-state contract: stored credential records depend
//! on it. Neither the iteration count nor the PRF is recorded, so a mismatch at
//! verification time looks exactly like a wrong password.

use std::fmt;

use kernel::error::kind::ErrorKind;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::{PasswordHashConfig, Prf};
use crate::crypto::{
    constant_time_eq, fill_random, from_base64, pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, to_base64,
};

// ============================================================================
// Constants
// ============================================================================

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes
pub const DERIVED_KEY_LEN: usize = 20;

/// Decoded blob length (salt + derived key)
pub const HASH_LEN: usize = SALT_LEN + DERIVED_KEY_LEN;

/// Default PBKDF2 round count
pub const DEFAULT_ITERATIONS: u32 = 10_000;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// Stored hash is not base64 or does not decode to 36 bytes
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Iteration count must be at least 1
    #[error("Iteration count must be at least 1 (got {0})")]
    InvalidIterations(u32),

    /// Key derivation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl PasswordHashError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PasswordHashError::InvalidHashFormat | PasswordHashError::InvalidIterations(_) => {
                ErrorKind::Format
            }
            PasswordHashError::HashingFailed(_) => ErrorKind::Internal,
        }
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Salt and derived key of one hashed password
///
/// Created once per password-set event and never mutated; a new password
/// produces a new value.
///
/// ## Examples
/// ```rust
/// use platform::password::{HashedPassword, PasswordHasher};
///
/// let hasher = PasswordHasher::default();
/// let hashed = hasher.hash("correct horse")?;
///
/// let stored = hashed.to_base64();
/// let restored = HashedPassword::from_base64(&stored)?;
/// assert!(hasher.verify_hashed(&restored, "correct horse")?);
/// # Ok::<(), platform::password::PasswordHashError>(())
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HashedPassword {
    bytes: [u8; HASH_LEN],
}

impl HashedPassword {
    fn from_parts(salt: &[u8; SALT_LEN], key: &[u8; DERIVED_KEY_LEN]) -> Self {
        let mut bytes = [0u8; HASH_LEN];
        bytes[..SALT_LEN].copy_from_slice(salt);
        bytes[SALT_LEN..].copy_from_slice(key);
        Self { bytes }
    }

    /// Parse the stored base64 form
    pub fn from_base64(encoded: &str) -> Result<Self, PasswordHashError> {
        let decoded =
            Zeroizing::new(from_base64(encoded).map_err(|_| PasswordHashError::InvalidHashFormat)?);

        let bytes: [u8; HASH_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { bytes })
    }

    /// Base64 form for storage
    pub fn to_base64(&self) -> String {
        to_base64(&self.bytes)
    }

    pub fn salt(&self) -> &[u8] {
        &self.bytes[..SALT_LEN]
    }

    pub fn derived_key(&self) -> &[u8] {
        &self.bytes[SALT_LEN..]
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Password hasher bound to one configuration
///
/// Stateless apart from its configuration; share it freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    config: PasswordHashConfig,
}

impl PasswordHasher {
    pub fn new(config: PasswordHashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PasswordHashConfig {
        &self.config
    }

    /// Hash a password with a fresh random salt
    ///
    /// Two calls with the same password return different values.
    pub fn hash(&self, password: &str) -> Result<HashedPassword, PasswordHashError> {
        self.check_iterations()?;

        let mut salt = [0u8; SALT_LEN];
        fill_random(&mut salt);

        let key = self.derive(password, &salt)?;

        tracing::debug!(
            iterations = self.config.iterations,
            prf = %self.config.prf,
            "Password hash created"
        );

        Ok(HashedPassword::from_parts(&salt, &key))
    }

    /// Verify a password against a stored base64 hash
    ///
    /// ## Returns
    /// - `Ok(true)` if the password matches
    /// - `Ok(false)` on a wrong password, iteration count or PRF
    /// - `Err(InvalidHashFormat)` if the stored value is malformed
    pub fn verify(&self, encoded: &str, candidate: &str) -> Result<bool, PasswordHashError> {
        let hashed = HashedPassword::from_base64(encoded).inspect_err(|_| {
            tracing::warn!("Stored password hash is malformed");
        })?;
        self.verify_hashed(&hashed, candidate)
    }

    /// Verify a password against an already parsed hash
    pub fn verify_hashed(
        &self,
        hashed: &HashedPassword,
        candidate: &str,
    ) -> Result<bool, PasswordHashError> {
        self.check_iterations()?;

        let salt: &[u8; SALT_LEN] = hashed
            .salt()
            .try_into()
            .map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let key = self.derive(candidate, salt)?;

        Ok(constant_time_eq(key.as_slice(), hashed.derived_key()))
    }

    fn check_iterations(&self) -> Result<(), PasswordHashError> {
        if self.config.iterations == 0 {
            return Err(PasswordHashError::InvalidIterations(0));
        }
        Ok(())
    }

    fn derive(
        &self,
        password: &str,
        salt: &[u8; SALT_LEN],
    ) -> Result<Zeroizing<[u8; DERIVED_KEY_LEN]>, PasswordHashError> {
        let mut key = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
        let rounds = self.config.iterations;

        match self.config.prf {
            Prf::HmacSha1 => pbkdf2_hmac_sha1(password.as_bytes(), salt, rounds, &mut key[..]),
            Prf::HmacSha256 => pbkdf2_hmac_sha256(password.as_bytes(), salt, rounds, &mut key[..]),
        }
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(key)
    }
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Hash a password with the default PRF and return the stored base64 form
///
/// ## Examples
/// ```rust
/// use platform::password::{DEFAULT_ITERATIONS, hash_password, verify_password_hash};
///
/// let stored = hash_password("password", DEFAULT_ITERATIONS)?;
/// assert!(verify_password_hash(&stored, "password", DEFAULT_ITERATIONS)?);
/// assert!(!verify_password_hash(&stored, "password2", DEFAULT_ITERATIONS)?);
/// # Ok::<(), platform::password::PasswordHashError>(())
/// ```
pub fn hash_password(password: &str, iterations: u32) -> Result<String, PasswordHashError> {
    PasswordHasher::new(PasswordHashConfig::with_iterations(iterations))
        .hash(password)
        .map(|hashed| hashed.to_base64())
}

/// Verify a password against a base64 hash created by [`hash_password`]
pub fn verify_password_hash(
    encoded: &str,
    candidate: &str,
    iterations: u32,
) -> Result<bool, PasswordHashError> {
    PasswordHasher::new(PasswordHashConfig::with_iterations(iterations)).verify(encoded, candidate)
}

// ============================================================================
// Tests
// ============================================================================
