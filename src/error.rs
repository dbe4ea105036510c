use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Generation error: {0}")]
    GenerationError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Malformed title: {0}")]
    MalformedTitle(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Image error: {0}")]
    ImageError(String),
    #[error("Workflow error: {0}")]
    WorkflowError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoverError {
    /// The bare message, without the variant prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            CoverError::ConfigError(msg)
            | CoverError::GenerationError(msg)
            | CoverError::StorageError(msg)
            | CoverError::MalformedTitle(msg)
            | CoverError::ValidationError(msg)
            | CoverError::ImageError(msg)
            | CoverError::WorkflowError(msg)
            | CoverError::SerializationError(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches an API Gateway facade.
    pub fn status_code(&self) -> u16 {
        match self {
            CoverError::ValidationError(_) => 400,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for CoverError {
    fn from(e: serde_json::Error) -> Self {
        CoverError::SerializationError(e.to_string())
    }
}

impl From<image::ImageError> for CoverError {
    fn from(e: image::ImageError) -> Self {
        CoverError::ImageError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoverError>;
