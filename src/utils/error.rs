use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Broad grouping used in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    DataSource,
    Processing,
    Storage,
}

/// Drives the process exit code in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::CsvError(_) => ErrorCategory::DataSource,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::SerializationError(_) => ErrorCategory::Processing,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::CsvError(_) => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            EtlError::SerializationError(_) => ErrorSeverity::High,
            EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::CsvError(_) => {
                "Check that the input file is valid UTF-8 CSV with properly quoted fields"
                    .to_string()
            }
            EtlError::IoError(_) => {
                "Check that the input file exists and the output location is writable".to_string()
            }
            EtlError::SerializationError(_) => {
                "Re-run with --verbose to see which record failed to serialize".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value passed for {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::CsvError(e) => format!("The input file could not be parsed as CSV: {}", e),
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::SerializationError(e) => {
                format!("The output document could not be written: {}", e)
            }
            EtlError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {}: '{}' ({})", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
