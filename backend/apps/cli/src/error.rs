//! Command Error Types
//!
//! Wraps the library errors so commands can report a single `ErrorKind`.

use kernel::error::kind::ErrorKind;
use parsing::TextError;
use platform::PasswordHashError;
use thiserror::Error;

/// Command result type alias
pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Password(#[from] PasswordHashError),
}

impl CommandError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Text(e) => e.kind(),
            CommandError::Password(e) => e.kind(),
        }
    }

    /// Process exit status for this error
    ///
    /// Input errors get distinct codes; anything else is EX_SOFTWARE (70).
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::NullInput => 2,
            ErrorKind::Format => 3,
            ErrorKind::NullArgument => 4,
            _ => 70,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        let kind = self.kind();
        if kind.is_input_error() {
            tracing::debug!(error = %self, kind = %kind, "Command rejected input");
        } else {
            tracing::error!(error = %self, "Command failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsing::NumericKind;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CommandError::from(TextError::NullInput).exit_code(), 2);
        let format = TextError::Format {
            value: "x".to_string(),
            kind: NumericKind::Int,
        };
        assert_eq!(CommandError::from(format).exit_code(), 3);
        assert_eq!(
            CommandError::from(TextError::NullArgument { name: "target" }).exit_code(),
            4
        );
        assert_eq!(
            CommandError::from(PasswordHashError::HashingFailed("boom".into())).exit_code(),
            70
        );
        assert_eq!(
            CommandError::from(PasswordHashError::InvalidHashFormat).exit_code(),
            3
        );
    }

    #[test]
    fn test_input_errors_are_not_internal() {
        assert!(CommandError::from(TextError::NullInput).kind().is_input_error());
        assert!(
            !CommandError::from(PasswordHashError::HashingFailed("boom".into()))
                .kind()
                .is_input_error()
        );
    }
}
