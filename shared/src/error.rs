use thiserror::Error;
use chrono::{DateTime, Utc};
use validator::ValidationErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Invalid timestamp for {field}: {value:?}")]
    InvalidTimestamp {
        field: String,
        value: String,
    },

    #[error("Date range error: start date {start} must be before end date {end}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
