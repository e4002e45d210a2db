use chrono::{DateTime, Utc};
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not an RFC 3339 timestamp
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("'{value}' is not an RFC 3339 timestamp: {e}"))
}

/// # Errors
///
/// Will return `Err` if an id is required but missing or blank
pub fn require_id(value: Option<&String>, flag: &str) -> Result<String, String> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(format!("--{flag} is required for this mode")),
    }
}
