use thiserror::Error;

/// Message shown when the search input is empty or whitespace-only.
pub const VALIDATION_MESSAGE: &str = "Veuillez entrer un mot-clé.";

/// Message shown for every provider or response failure. Detail goes to the logs only.
pub const FETCH_FAILURE_MESSAGE: &str =
    "Une erreur est survenue lors de la récupération des données. Veuillez réessayer.";

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Provider error: {message}")]
    ProviderError { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Provider,
    MalformedResponse,
    Configuration,
    Output,
}

impl KeywordError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ProviderError { .. } | Self::HttpError(_) => ErrorCategory::Provider,
            Self::MalformedResponse { .. } => ErrorCategory::MalformedResponse,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// True for failures of the outbound model call, whatever their cause.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Provider | ErrorCategory::MalformedResponse
        )
    }

    /// Text safe to show to the user. Provider and response failures collapse
    /// into one generic message.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { .. } => VALIDATION_MESSAGE.to_string(),
            _ if self.is_fetch_failure() => FETCH_FAILURE_MESSAGE.to_string(),
            Self::MissingConfigError { field } => {
                format!("Configuration manquante : {}", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Valeur invalide pour {} : {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Enter a non-empty keyword",
            ErrorCategory::Provider => "Check network access and the API_KEY credential, then retry",
            ErrorCategory::MalformedResponse => "Retry the search; the model output did not match the schema",
            ErrorCategory::Configuration => "Set API_KEY and check the configuration file",
            ErrorCategory::Output => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, KeywordError>;
