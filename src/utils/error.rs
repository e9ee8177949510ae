use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelerError {
    #[error("Missing pull request context: {message}")]
    MissingContextError { message: String },

    #[error("Unexpected resource shape: {message}")]
    ShapeError { message: String },

    #[error("{message}")]
    SchemaError { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Malformed input: {message}")]
    MalformedInputError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Document decode error: {0}")]
    DocumentError(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse classification of a [`LabelerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingContext,
    Shape,
    Schema,
    Validation,
    Configuration,
    Collaborator,
}

impl LabelerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelerError::MissingContextError { .. } => ErrorKind::MissingContext,
            LabelerError::ShapeError { .. } => ErrorKind::Shape,
            LabelerError::SchemaError { .. } => ErrorKind::Schema,
            LabelerError::ValidationError { .. } => ErrorKind::Validation,
            LabelerError::MalformedInputError { .. }
            | LabelerError::MissingConfigError { .. }
            | LabelerError::InvalidConfigValueError { .. } => ErrorKind::Configuration,
            LabelerError::ApiError(_)
            | LabelerError::ApiStatusError { .. }
            | LabelerError::DocumentError(_)
            | LabelerError::SerializationError(_)
            | LabelerError::IoError(_) => ErrorKind::Collaborator,
        }
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        LabelerError::ShapeError {
            message: message.into(),
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        LabelerError::SchemaError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelerError>;
