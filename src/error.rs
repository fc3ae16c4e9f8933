use thiserror::Error;

/// Error type for array construction, indexing and arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdArrayError {
    /// Rank or axis sizes are incompatible
    #[error("Arrays do not have matching dimensions: {expected} vs. {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },

    /// A point coordinate is negative or past the end of its axis
    #[error("Index out of range at position {axis}")]
    CoordinateOutOfRange {
        axis: usize,
    },

    /// Shape with no axes or a zero-sized axis
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),
}

impl NdArrayError {
    /// Create a dimension mismatch between what an operation requires and what it got
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        NdArrayError::DimensionMismatch { expected, actual }
    }

    pub fn coordinate_out_of_range(axis: usize) -> Self {
        NdArrayError::CoordinateOutOfRange { axis }
    }

    /// Create a configuration error with the failing step as context
    pub fn configuration(step: &str, message: impl std::fmt::Display) -> Self {
        NdArrayError::Configuration(format!("{}: {}", step, message))
    }
}

impl From<std::io::Error> for NdArrayError {
    fn from(err: std::io::Error) -> Self {
        NdArrayError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NdArrayError {
    fn from(err: serde_json::Error) -> Self {
        NdArrayError::Configuration(err.to_string())
    }
}

/// Result type for ndint operations
pub type NdResult<T> = Result<T, NdArrayError>;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DimensionMismatch,
    CoordinateOutOfRange,
    InvalidShape,
    ConfigInvalid,
    Io,
}

impl NdArrayError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            NdArrayError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            NdArrayError::CoordinateOutOfRange { .. } => ErrorCode::CoordinateOutOfRange,
            NdArrayError::InvalidShape(_) => ErrorCode::InvalidShape,
            NdArrayError::Configuration(_) => ErrorCode::ConfigInvalid,
            NdArrayError::Io(_) => ErrorCode::Io,
        }
    }

    /// Whether the error was raised by an array operation rather than by setup
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::DimensionMismatch | ErrorCode::CoordinateOutOfRange
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            NdArrayError::DimensionMismatch { expected, actual } => {
                format!("Dimension mismatch: expected {}, got {}\n\nCheck that the point rank matches the array rank, or that both operands of add/dot have compatible shapes.", expected, actual)
            }
            NdArrayError::CoordinateOutOfRange { axis } => {
                format!("Coordinate out of range on axis {}\n\nEvery coordinate must satisfy 0 <= c < dim(axis).", axis)
            }
            _ => self.to_string(),
        }
    }
}
