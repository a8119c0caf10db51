//! Error types for que

use thiserror::Error;

/// Result type alias for que operations
pub type QueResult<T> = Result<T, QueError>;

/// Errors raised while building statements.
///
/// Rendering itself never fails: every check happens when a value is
/// constructed, so a statement that exists can always be turned into SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueError {
    /// A structural rule was broken (missing field name, empty SET, ...)
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Input data has the wrong shape or is empty
    #[error("Value error: {0}")]
    Value(String),

    /// Process-wide configuration could not be applied
    #[error("Config error: {0}")]
    Config(String),
}

impl QueError {
    /// Create a syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    /// Create a value error
    pub fn value(message: impl Into<String>) -> Self {
        Self::Value(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a syntax error
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Check if this is a value error
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
