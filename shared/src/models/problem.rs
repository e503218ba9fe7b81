use crate::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref STATEMENT_URL_REGEX: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

/// Accepts an empty string or an absolute http(s) link
pub fn validate_statement_url(val: &str) -> std::result::Result<(), ValidationError> {
    if val.is_empty() || STATEMENT_URL_REGEX.is_match(val) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_statement_url"))
    }
}

/// A translated problem belonging to a contest
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct Problem {
    pub id: i64,

    /// ID of the owning contest
    pub contest: i64,

    /// Problem letter within the contest ("A", "B", "C1", ...)
    #[validate(length(min = 1, max = 10, message = "Index must be between 1 and 10 characters"))]
    pub index: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub points: f64,

    #[serde(default)]
    pub rating: i32,

    /// Link to the original statement, may be empty
    #[serde(default)]
    #[validate(custom = "validate_statement_url")]
    pub url: String,

    /// Korean translation of the statement
    #[serde(default)]
    pub description_kr: String,
}

impl Problem {
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    /// Heading shown above the statement, e.g. "A. Minimizing Rectangle"
    pub fn title(&self) -> String {
        if self.name.is_empty() {
            self.index.clone()
        } else {
            format!("{}. {}", self.index, self.name)
        }
    }
}
