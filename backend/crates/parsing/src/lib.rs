//! Parsing Crate - Lenient numeric text parsing
//!
//! Turns human-entered numeric text into strict `i32` / `f64` values:
//! - `replace` - Literal substring replacement and noise cleanup primitives
//! - `normalize` - Noise stripping (spaces, NBSP, `&nbsp;`, `+`) and trimming
//! - `numeric` - Integer/decimal parsing with optional defaults
//! - `config` - Decimal separator configuration
//!
//! ## Examples
//! ```rust
//! use parsing::{NumericParser, ParserConfig};
//!
//! let parser = NumericParser::default();
//! assert_eq!(parser.parse_int("1&nbsp;234", None)?, 1234);
//! assert_eq!(parser.parse_double("1 234,5", None)?, 1234.5);
//! assert_eq!(parser.parse_nullable_int("", None)?, None);
//! assert_eq!(parser.parse_int("n/a", Some(-1))?, -1);
//!
//! let comma = NumericParser::new(ParserConfig::new(',')?);
//! assert_eq!(comma.parse_double("1.5", None)?, 1.5);
//! # Ok::<(), parsing::TextError>(())
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod numeric;
pub mod replace;

// Re-exports for convenience
pub use config::ParserConfig;
pub use error::{NumericKind, TextError, TextResult};
pub use normalize::{NormalizedText, STANDARD_NOISE_PATTERNS, normalize};
pub use numeric::{
    NumericParser, is_double, is_int, parse_double, parse_int, parse_nullable_double,
    parse_nullable_int,
};
pub use replace::{cleanup, replace_all};

#[cfg(test)]
mod tests;
