//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure random, Base64, PBKDF2, constant-time compare)
//! - Salted, iterated password hashing and verification
//! - Password hashing configuration

pub mod config;
pub mod crypto;
pub mod password;

pub use config::{PasswordHashConfig, Prf};
pub use password::{
    DEFAULT_ITERATIONS, HashedPassword, PasswordHashError, PasswordHasher, hash_password,
    verify_password_hash,
};
