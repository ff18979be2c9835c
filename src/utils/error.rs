use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API call '{method}' returned status {status}: {body}")]
    ApiStatusError {
        method: String,
        status: u16,
        body: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Order hierarchy contains a cycle through order node {node}")]
    OrderCycle { node: usize },

    #[error("Order node {node} is not part of the hierarchy")]
    UnknownNode { node: usize },

    #[error("Line {line} of order node {node} points at a parent line outside the hierarchy")]
    DanglingParentLine { node: usize, line: usize },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Hierarchy,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BillingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BillingError::ApiError(_) | BillingError::ApiStatusError { .. } => {
                ErrorCategory::Network
            }
            BillingError::CsvError(_)
            | BillingError::SerializationError(_)
            | BillingError::ProcessingError { .. }
            | BillingError::ValidationError { .. } => ErrorCategory::Data,
            BillingError::ConfigValidationError { .. }
            | BillingError::InvalidConfigValueError { .. }
            | BillingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BillingError::OrderCycle { .. }
            | BillingError::UnknownNode { .. }
            | BillingError::DanglingParentLine { .. } => ErrorCategory::Hierarchy,
            BillingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Hierarchy => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the billing server is reachable and the API token is valid, then retry"
            }
            ErrorCategory::Data => "Inspect the request payload or response for malformed fields",
            ErrorCategory::Configuration => {
                "Fix the configuration file (see configs/billing-api.toml for a template)"
            }
            ErrorCategory::Hierarchy => {
                "Rebuild the order hierarchy; parent/child links must form a tree"
            }
            ErrorCategory::System => "Check file paths and filesystem permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BillingError::ApiError(e) => format!("Could not reach the billing API: {}", e),
            BillingError::ApiStatusError { method, status, .. } => {
                format!("The billing API rejected '{}' with HTTP {}", method, status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_error_is_network_medium() {
        let err = BillingError::ApiStatusError {
            method: "createOrder".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("createOrder"));
    }

    #[test]
    fn test_hierarchy_errors_are_high_severity() {
        let err = BillingError::OrderCycle { node: 2 };
        assert_eq!(err.category(), ErrorCategory::Hierarchy);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = BillingError::MissingConfigError {
            field: "api.endpoint".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
