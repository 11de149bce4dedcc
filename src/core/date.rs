// ─── File Dates ───
// The catalog moved to RFC 3339 timestamps, but metadata cached before the
// switch still carries the old zone-less pattern. Both must keep parsing.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::core::error::{CatalogError, CatalogResult};

/// Legacy `YYYY-MM-DDThh:mm:ss[.fff]` pattern without a zone, read as UTC.
const LEGACY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

type ParseAttempt = fn(&str) -> Option<DateTime<Utc>>;

/// Tried in order, first success wins.
const ATTEMPTS: &[ParseAttempt] = &[parse_rfc3339, parse_legacy];

fn parse_rfc3339(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_legacy(input: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, LEGACY_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse a catalog file timestamp in any of the accepted formats.
pub fn parse_file_date(input: &str) -> CatalogResult<DateTime<Utc>> {
    let trimmed = input.trim();
    ATTEMPTS
        .iter()
        .find_map(|attempt| attempt(trimmed))
        .ok_or_else(|| CatalogError::MalformedTimestamp {
            input: input.to_string(),
        })
}

/// `deserialize_with` adapter for timestamp fields.
pub(crate) fn deserialize_file_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_file_date(&raw).map_err(serde::de::Error::custom)
}
