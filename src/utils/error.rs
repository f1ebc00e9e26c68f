use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error in {source_name}: {message}")]
    TomlParseError { source_name: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::IoError(_) => ErrorCategory::System,
            SiteError::SerializationError(_) | SiteError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            SiteError::TomlParseError { .. }
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::ValidationError { .. } => ErrorSeverity::Low,
            SiteError::HttpError(_) => ErrorSeverity::Medium,
            SiteError::SerializationError(_)
            | SiteError::TomlParseError { .. }
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::HttpError(_) => {
                "Check network connectivity and the email provider base_url".to_string()
            }
            SiteError::IoError(_) => {
                "Check that the file exists and the process can read it".to_string()
            }
            SiteError::SerializationError(_) => "Check the JSON payload format".to_string(),
            SiteError::TomlParseError { source_name, .. } => {
                format!("Fix the TOML syntax in {}", source_name)
            }
            SiteError::ConfigError { .. } => "Review the site configuration file".to_string(),
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            SiteError::ValidationError { .. } => "Correct the input and retry".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Data => format!("Data problem: {}", self),
            ErrorCategory::System => format!("System problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
