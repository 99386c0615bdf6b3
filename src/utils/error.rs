use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid cycle: {}", .errors.join("; "))]
    InvalidCycle { errors: Vec<String> },

    #[error("Form rejected at field '{field}': {reason}")]
    FormRejected { field: String, reason: String },

    #[error("Persistence failed: {message}")]
    PersistenceError { message: String },
}

impl CoopError {
    /// Short message meant for the person filling in the form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CoopError::IoError(e) => format!("Could not read the input file: {}", e),
            CoopError::SerializationError(e) => format!("The input is not valid JSON: {}", e),
            CoopError::ConfigValidationError { field, message } => {
                format!("Rules file problem at '{}': {}", field, message)
            }
            CoopError::InvalidConfigValueError { field, reason, .. } => {
                format!("Rules file value '{}' is not accepted: {}", field, reason)
            }
            CoopError::MissingFieldError { field } => format!("Please fill in '{}'", field),
            CoopError::InvalidFieldValueError { field, reason, .. } => {
                format!("Please check '{}': {}", field, reason)
            }
            CoopError::InvalidCycle { errors } => errors.join("\n"),
            CoopError::FormRejected { field, reason } => {
                format!("The form cannot be submitted ('{}': {})", field, reason)
            }
            CoopError::PersistenceError { message } => {
                format!("The record could not be saved: {}", message)
            }
        }
    }

    /// Whether the error came from user input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoopError::MissingFieldError { .. }
                | CoopError::InvalidFieldValueError { .. }
                | CoopError::InvalidCycle { .. }
                | CoopError::FormRejected { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoopError>;
