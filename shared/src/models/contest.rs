use crate::{Result, SharedError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a contest as published by the contest API
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct Contest {
    /// Contest ID (mirrors the Codeforces round number)
    pub id: i64,

    /// Name of the contest
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Contest start time (UTC)
    pub start_time: DateTime<Utc>,

    /// Contest end time (UTC)
    pub end_time: DateTime<Utc>,
}

impl Contest {
    /// Creates a new contest with validation.
    ///
    /// Only the name is validated here. A contest whose start is not before its
    /// end is still accepted since the clock gives it a defined phase.
    pub fn new(
        id: i64,
        name: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self> {
        let contest = Self {
            id,
            name,
            start_time,
            end_time,
        };
        contest.validate_fields()?;
        Ok(contest)
    }

    /// Validates the contest data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    /// Checks the time range, failing on a zero or negative length contest
    pub fn validate_range(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(SharedError::InvalidDateRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// True when `start_time >= end_time`
    pub fn is_degenerate(&self) -> bool {
        self.start_time >= self.end_time
    }

    /// Scheduled length of the contest, zero when degenerate
    pub fn length(&self) -> std::time::Duration {
        (self.end_time - self.start_time)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}
