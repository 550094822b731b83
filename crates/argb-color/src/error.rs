//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when building, parsing or looking up colors
#[derive(Error, Debug, Clone)]
pub enum ColorError {
    /// Malformed constructor input (e.g. a non-positive radix)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Hex text whose digit count is not 3, 6 or 8
    #[error("Unsupported hex format '{input}': found {digits} hex digits, expected 3, 6 or 8")]
    UnsupportedHexFormat { input: String, digits: usize },

    /// A name is already bound in the registry
    #[error("Color name already registered: {0}")]
    DuplicateName(String),

    /// Name lookup miss with no fallback
    #[error("Color not found: {0}")]
    NotFound(String),

    /// Operand cannot be converted to an RGBA value
    #[error("Cannot coerce to RGBA: {0}")]
    CoercionError(String),

    /// Extraction requested with no candidate keys
    #[error("No registered colors to match against")]
    EmptyRegistry,

    /// The combined key matcher could not be compiled
    #[error("Invalid color matcher: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ColorError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ColorError::InvalidArgument(message.into())
    }

    /// Create an unsupported hex format error for the given input
    pub fn unsupported_hex(input: impl Into<String>, digits: usize) -> Self {
        ColorError::UnsupportedHexFormat {
            input: input.into(),
            digits,
        }
    }

    /// Create a not found error from a color name
    pub fn not_found(name: impl Into<String>) -> Self {
        ColorError::NotFound(name.into())
    }

    /// Create a coercion error
    pub fn coercion(message: impl Into<String>) -> Self {
        ColorError::CoercionError(message.into())
    }
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
