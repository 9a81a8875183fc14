use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unknown category \"{name}\"")]
    UnknownCategory { name: String },

    #[error("Conversion function \"{name}\" not found")]
    UnknownConversion { name: String },

    #[error("Failed to evaluate \"{expression}\": {message}")]
    Evaluation { expression: String, message: String },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Invalid memory operation \"{operation}\"")]
    InvalidMemoryOperation { operation: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid session id: {reason}")]
    InvalidSession { reason: String },

    #[error("Session limit of {limit} reached")]
    SessionLimit { limit: usize },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value \"{value}\" for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Evaluation,
    Input,
    Session,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::UnknownCategory { .. } | CalcError::UnknownConversion { .. } => {
                ErrorCategory::Lookup
            }
            CalcError::Evaluation { .. } => ErrorCategory::Evaluation,
            CalcError::InvalidInput { .. }
            | CalcError::InvalidMemoryOperation { .. }
            | CalcError::MissingField { .. } => ErrorCategory::Input,
            CalcError::InvalidSession { .. } | CalcError::SessionLimit { .. } => {
                ErrorCategory::Session
            }
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Evaluation | ErrorCategory::Input => {
                ErrorSeverity::Low
            }
            ErrorCategory::Session => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the caller can report the error and keep going.
    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::UnknownConversion { name } => format!(
                "Conversion function \"{}\" not found. Use \"conv\" to see available conversions.",
                name
            ),
            CalcError::Evaluation { message, .. } => message.clone(),
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::UnknownCategory { .. } => {
                "Use one of: temperature, length, weight, volume, speed, area, time, data"
            }
            CalcError::UnknownConversion { .. } => "List the available conversions first",
            CalcError::Evaluation { .. } => "Check the expression syntax and function names",
            CalcError::InvalidInput { .. } | CalcError::MissingField { .. } => {
                "Check the command format with \"help\""
            }
            CalcError::InvalidMemoryOperation { .. } => "Use add, subtract, clear or set",
            CalcError::InvalidSession { .. } => {
                "Send 1-64 characters of letters, digits, '-' or '_' in X-Session-Id"
            }
            CalcError::SessionLimit { .. } => "Reuse an existing session id or retry later",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
            CalcError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        CalcError::MissingField {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_recoverable() {
        let err = CalcError::UnknownConversion {
            name: "doesNotExist".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert!(err.is_recoverable());
        assert!(err.user_friendly_message().contains("Use \"conv\""));
    }

    #[test]
    fn test_config_errors_are_not_recoverable() {
        let err = CalcError::InvalidConfigValueError {
            field: "server.port".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(!err.is_recoverable());
    }
}
