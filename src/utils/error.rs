use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Unknown base beverage: {name}")]
    UnknownBase { name: String },

    #[error("Unknown decorator: {name}")]
    UnknownDecorator { name: String },

    #[error("Position {index} is out of range for a chain of {len} layer(s)")]
    InvalidPosition { index: usize, len: usize },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DemoError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::UnknownBase { .. } => {
                "Use one of the known bases: coffee, tea".to_string()
            }
            DemoError::UnknownDecorator { .. } => {
                "Use one of the known decorators: milk, sugar, caramel, whipped_cream, large"
                    .to_string()
            }
            DemoError::InvalidPosition { len, .. } => {
                if *len == 0 {
                    "The chain is empty; add a decorator first".to_string()
                } else {
                    format!("Use a position between 0 and {}", len - 1)
                }
            }
            DemoError::InvalidCommand { .. } => "Type 'help' to list commands".to_string(),
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                "Check the menu file for typos and out-of-range values".to_string()
            }
            DemoError::IoError(_) => "Check that the file exists and is readable".to_string(),
            DemoError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::UnknownBase { name } => format!("'{}' is not a base beverage", name),
            DemoError::UnknownDecorator { name } => format!("'{}' is not an add-on", name),
            DemoError::InvalidPosition { index, .. } => {
                format!("There is no layer at position {}", index)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_suggestion() {
        let err = DemoError::InvalidPosition { index: 4, len: 3 };
        assert_eq!(err.recovery_suggestion(), "Use a position between 0 and 2");

        let empty = DemoError::InvalidPosition { index: 0, len: 0 };
        assert!(empty.recovery_suggestion().contains("empty"));
    }

    #[test]
    fn test_config_error_classification() {
        let err = DemoError::InvalidConfigValueError {
            field: "prices.milk".to_string(),
            value: "99999".to_string(),
            reason: "too large".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!DemoError::UnknownBase {
            name: "soda".to_string()
        }
        .is_config_error());
    }
}
