use chrono::{DateTime, Local, NaiveDate, Utc};
use validator::ValidationErrors;

use super::errors::ServiceError;

/// Treat blank strings as absent
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Fail with one validation error listing every missing field.
///
/// `fields` pairs each wire name with whether a value was supplied.
pub fn require_fields(fields: &[(&str, bool)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::ValidationError(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Convert validator errors to a single message, one clause per field
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut clauses: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            messages.join(", ")
        })
        .collect();
    clauses.sort();
    clauses.join("; ")
}

/// Parse an ISO 8601 timestamp supplied by a caller
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, ServiceError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ServiceError::ValidationError(format!(
                "Invalid {} format. Use ISO 8601 (e.g. 2030-03-15T08:30:00Z)",
                field
            ))
        })
}

/// Parse a day filter: either a plain `YYYY-MM-DD` local calendar day, or a
/// timestamp whose server-local calendar day is used
pub fn parse_filter_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .map_err(|_| {
            ServiceError::ValidationError(format!(
                "Invalid date filter '{}'. Use YYYY-MM-DD or an ISO 8601 timestamp",
                raw
            ))
        })
}
