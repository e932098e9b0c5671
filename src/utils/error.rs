use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizerError {
    #[error("Feedback request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid measurement '{field}' = {value}: {reason}")]
    InvalidMeasurementError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Feedback endpoint rejected submission: {message}")]
    FeedbackError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
    Input,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SizerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SizerError::HttpError(_) | SizerError::FeedbackError { .. } => ErrorCategory::Network,
            SizerError::IoError(_) => ErrorCategory::Io,
            SizerError::SerializationError(_) => ErrorCategory::Data,
            SizerError::ConfigError { .. }
            | SizerError::ConfigValidationError { .. }
            | SizerError::MissingConfigError { .. }
            | SizerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SizerError::InvalidMeasurementError { .. } => ErrorCategory::Input,
            SizerError::StorageError { .. } => ErrorCategory::Storage,
        }
    }

    /// 反饋失敗不影響尺寸建議，因此屬於低嚴重度
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the feedback endpoint and try submitting again",
            ErrorCategory::Io => "Check that the file exists and is readable/writable",
            ErrorCategory::Data => "The stored data looks corrupted; remove or fix the file",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Input => "Height must be 120-220 cm and weight 30-200 kg",
            ErrorCategory::Storage => "Inspect the user store file for malformed records",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SizerError::HttpError(_) | SizerError::FeedbackError { .. } => {
                "Your feedback could not be sent. Your size recommendation is unaffected.".to_string()
            }
            SizerError::InvalidMeasurementError { field, value, .. } => {
                format!("The {} you entered ({}) is outside the supported range", field, value)
            }
            SizerError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SizerError>;
