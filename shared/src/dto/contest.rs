use crate::models::contest::Contest;
use crate::{Result, SharedError};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Naive layouts the API has been seen to emit; all are read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Contest record as it travels over the wire.
///
/// The backend allows null names and timestamps, so everything past `id` is
/// optional here and checked when converting into a [`Contest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContestDto {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// One page of the paginated contest listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContestListResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ContestDto>,
}

/// Parses an absolute instant from the wire.
///
/// RFC 3339 with `Z` or a numeric offset is preferred. Offset-less timestamps
/// are accepted and taken as UTC.
pub fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(SharedError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn required_instant(field: &str, value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(raw) => parse_instant(field, raw),
        None => Err(SharedError::MissingField(field.to_string())),
    }
}

impl ContestDto {
    /// Display name, falling back to the ID when the backend has none
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Contest #{}", self.id),
        }
    }
}

impl TryFrom<ContestDto> for Contest {
    type Error = SharedError;

    fn try_from(dto: ContestDto) -> Result<Self> {
        let start_time = required_instant("start_time", dto.start_time.as_deref())?;
        let end_time = required_instant("end_time", dto.end_time.as_deref())?;
        Ok(Contest {
            id: dto.id,
            name: dto.display_name(),
            start_time,
            end_time,
        })
    }
}

impl From<&Contest> for ContestDto {
    fn from(contest: &Contest) -> Self {
        Self {
            id: contest.id,
            name: Some(contest.name.clone()),
            start_time: Some(contest.start_time.to_rfc3339()),
            end_time: Some(contest.end_time.to_rfc3339()),
        }
    }
}

/// Converts wire records into contests, dropping any that cannot be classified.
///
/// A record with a missing or unparseable timestamp is logged and skipped so it
/// never takes part in featured-contest selection.
pub fn contests_from_wire(records: Vec<ContestDto>) -> Vec<Contest> {
    let total = records.len();
    let contests: Vec<Contest> = records
        .into_iter()
        .filter_map(|dto| {
            let id = dto.id;
            match Contest::try_from(dto) {
                Ok(contest) => Some(contest),
                Err(e) => {
                    warn!("Skipping contest {}: {}", id, e);
                    None
                }
            }
        })
        .collect();
    debug!("Accepted {} of {} contest records", contests.len(), total);
    contests
}
