//! CLI-specific error types.
//!
//! CLI errors terminate the process with a non-zero exit code; domain
//! validation failures are rendered per field before the error is returned.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// The entity argument names no known kind
    UnknownEntity,
    /// I/O error (file or stdin)
    IoError,
    /// The input is not well-formed JSON
    ParseError,
    /// The document failed insert validation
    InvalidDocument,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownEntity => "UPLIFT_CLI_UNKNOWN_ENTITY",
            Self::IoError => "UPLIFT_CLI_IO_ERROR",
            Self::ParseError => "UPLIFT_CLI_PARSE_ERROR",
            Self::InvalidDocument => "UPLIFT_CLI_INVALID_DOCUMENT",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown entity kind
    pub fn unknown_entity(name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownEntity,
            format!("unknown entity kind '{}'", name),
        )
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// JSON parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ParseError, msg)
    }

    /// Document failed validation
    pub fn invalid_document(failures: usize) -> Self {
        Self::new(
            CliErrorCode::InvalidDocument,
            format!(
                "document failed validation with {} failure{}",
                failures,
                if failures == 1 { "" } else { "s" }
            ),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entity_display() {
        let err = CliError::unknown_entity("payment");
        let display = format!("{}", err);
        assert!(display.contains("UPLIFT_CLI_UNKNOWN_ENTITY"));
        assert!(display.contains("payment"));
    }

    #[test]
    fn test_invalid_document_counts_failures() {
        let err = CliError::invalid_document(3);
        assert!(format!("{}", err).contains("3 failures"));
        assert_eq!(err.code().code(), "UPLIFT_CLI_INVALID_DOCUMENT");
    }
}
