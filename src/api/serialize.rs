//! Serialization helpers for the formats the Todoist API expects.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serializes a UTC timestamp the way Todoist writes them: RFC 3339 with microseconds and a
/// trailing `Z`.
pub fn todoist_rfc3339<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Serializes a list of IDs as a single comma separated value, as used in query strings.
pub fn comma_separated<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}
