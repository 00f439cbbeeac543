//! Shared Kernel - Crate-crossing minimal core
//!
//! This crate contains the "smallest core" of shared vocabulary:
//! - The error taxonomy every crate maps its own errors onto
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod kind;
}
