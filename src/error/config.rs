use thiserror::Error;

/// Configuration resolved at start-up was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no Gemini API key found: set GEMINI_API_KEY (or API_KEY) before starting")]
    MissingApiKey,

    #[error("invalid connect timeout {value:?}: expected a whole number of seconds")]
    InvalidTimeout { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_the_variables() {
        let msg = ConfigError::MissingApiKey.to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
        assert!(msg.contains("API_KEY"));
    }

    #[test]
    fn test_invalid_timeout_message() {
        let err = ConfigError::InvalidTimeout {
            value: "soon".to_string(),
        };
        assert!(err.to_string().contains("\"soon\""));
    }
}
