use thiserror::Error;

/// Error types for the fitbroom-rs library.
#[derive(Error, Debug)]
pub enum BroomError {
    /// The input object is not a recognized fit result nor a collection of them.
    #[error("Unsupported result type: {type_name}")]
    UnsupportedType { type_name: String },

    /// The recognized result does not expose the data an operation needs.
    #[error("{operation}: {reason} for {type_name}")]
    MissingCapability {
        operation: &'static str,
        type_name: String,
        reason: &'static str,
    },

    /// More than one row shares the same parameter name.
    #[error("Duplicate parameter name: {0}")]
    NameConflict(String),

    /// Arrays that must be aligned have different lengths.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A column with this name already exists in the table.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A requested column does not exist.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns cannot be combined, or a column has the wrong type.
    #[error("Column type mismatch for '{name}': {detail}")]
    ColumnTypeMismatch { name: String, detail: String },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error for parameter-related problems.
    #[error("Parameter error: {0}")]
    ParameterError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BroomError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        BroomError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    pub(crate) fn missing(
        operation: &'static str,
        type_name: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        BroomError::MissingCapability {
            operation,
            type_name: type_name.into(),
            reason,
        }
    }
}

impl From<crate::parameters::parameter::ParameterError> for BroomError {
    fn from(err: crate::parameters::parameter::ParameterError) -> Self {
        BroomError::ParameterError(format!("{}", err))
    }
}

/// Result type alias for fitbroom-rs operations.
pub type Result<T> = std::result::Result<T, BroomError>;
