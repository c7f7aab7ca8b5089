use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PantryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PantryError::IoError(e) => format!("Could not read a file: {}", e),
            PantryError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            PantryError::SerializationError(_) => "Failed to format the ingredient list".to_string(),
            PantryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PantryError::IoError(_) => "Check that the config path exists and is readable",
            PantryError::TomlError(_) => "Fix the syntax in the configuration file",
            PantryError::SerializationError(_) => "Try --format text",
            PantryError::InvalidConfigValueError { .. } => {
                "Review the [pantry] section of the config or the command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = PantryError::InvalidConfigValueError {
            field: "default_kind".to_string(),
            value: " ".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value ' ' for 'default_kind': Value cannot be empty or whitespace-only"
        );
        assert!(err.user_friendly_message().contains("default_kind"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PantryError = io.into();
        assert!(matches!(err, PantryError::IoError(_)));
        assert!(err.recovery_suggestion().contains("config path"));
    }
}
