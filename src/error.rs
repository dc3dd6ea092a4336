use std::fmt;

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Error type for the activation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    /// Batches passed to one call disagree on shape
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Activation name that does not match any variant
    UnknownActivation(String),

    /// Class label outside the target vector
    InvalidLabel {
        label: usize,
        width: usize,
    },
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ActivationError::UnknownActivation(name) => {
                write!(f, "Unknown activation function '{}'", name)
            }
            ActivationError::InvalidLabel { label, width } => {
                write!(f, "Invalid label {}: must be less than {}", label, width)
            }
        }
    }
}

impl std::error::Error for ActivationError {}

// Helper functions for common error patterns
impl ActivationError {
    /// Shape mismatch between two batches, reported as `(rows, cols)`.
    pub fn shape_mismatch(what: &str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        ActivationError::DimensionMismatch {
            expected: format!("{} of shape {:?}", what, expected),
            actual: format!("{:?}", actual),
        }
    }

    pub fn unknown_activation<S: Into<String>>(name: S) -> Self {
        ActivationError::UnknownActivation(name.into())
    }
}
