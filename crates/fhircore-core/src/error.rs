use thiserror::Error;

/// Core error types for FHIRCore operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid questionnaire item type: {0}")]
    InvalidItemType(String),

    #[error("Invalid FHIR DateTime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid resource data: {message}")]
    InvalidResource { message: String },

    #[error("Unexpected resource type: expected {expected}, found {found}")]
    UnexpectedResourceType { expected: String, found: String },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Time formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),
}

impl CoreError {
    /// Create a new InvalidItemType error
    pub fn invalid_item_type(item_type: impl Into<String>) -> Self {
        Self::InvalidItemType(item_type.into())
    }

    /// Create a new InvalidDateTime error
    pub fn invalid_date_time(datetime: impl Into<String>) -> Self {
        Self::InvalidDateTime(datetime.into())
    }

    /// Create a new InvalidResource error
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    /// Create a new UnexpectedResourceType error
    pub fn unexpected_resource_type(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedResourceType {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
