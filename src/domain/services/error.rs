use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The client could not be built; no request was sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote completion call failed (transport, auth, or API level).
    #[error("Invocation error: {0}")]
    Invocation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invocation(msg: impl Into<String>) -> Self {
        Self::Invocation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The underlying message, without the kind label.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(msg)
            | Self::Invocation(msg)
            | Self::InvalidInput(msg)
            | Self::Internal(msg) => msg,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_message_is_stable() {
        let err = DomainError::configuration("GROQ_API_KEY is not set in environment.");
        assert_eq!(
            err.to_string(),
            "Configuration error: GROQ_API_KEY is not set in environment."
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn invocation_error_carries_underlying_message() {
        let err = DomainError::invocation("connection refused");
        assert_eq!(err.to_string(), "Invocation error: connection refused");
        assert!(!err.is_configuration());
    }

    #[test]
    fn message_drops_the_kind_label() {
        let err = DomainError::configuration("GROQ_API_KEY is not set in environment.");
        assert_eq!(err.message(), "GROQ_API_KEY is not set in environment.");
    }
}
