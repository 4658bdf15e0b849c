use fhircore_config::ConfigError;
use fhircore_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl EngineError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: EngineError = ConfigError::unsupported_app("quest").into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Application not supported: quest"
        );

        let err = EngineError::invalid_state("no application id");
        assert_eq!(err.to_string(), "Invalid state: no application id");
    }
}
