//! Timestamp value generators.

use crate::GeneratorError;
use chrono::{DateTime, NaiveDate, Utc};
use fill_core::{FieldDescriptor, FillContext, Generator, Value};
use rand::Rng;

fn is_temporal(field: &FieldDescriptor) -> bool {
    field.ty.is::<DateTime<Utc>>() || field.ty.is::<NaiveDate>()
}

/// Random timestamps in an inclusive range, at second precision.
///
/// Matches `DateTime<Utc>` and `NaiveDate` fields.
#[derive(Debug, Clone)]
pub struct TimestampRangeGenerator {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimestampRangeGenerator {
    /// Create a generator between two timestamps.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, GeneratorError> {
        if start > end {
            return Err(GeneratorError::invalid_range(
                start.to_rfc3339(),
                end.to_rfc3339(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Create a generator from RFC 3339 or `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, GeneratorError> {
        let start = parse_timestamp(start)
            .ok_or_else(|| GeneratorError::InvalidTimestamp(start.to_string()))?;
        let end = parse_timestamp(end)
            .ok_or_else(|| GeneratorError::InvalidTimestamp(end.to_string()))?;
        Self::new(start, end)
    }
}

impl Generator for TimestampRangeGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        is_temporal(field)
    }

    fn next(&self, _context: &FillContext) -> Value {
        let random_ts = rand::rng().random_range(self.start.timestamp()..=self.end.timestamp());
        let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(self.start);
        Value::DateTime(dt)
    }
}

/// The current time.
///
/// Matches `DateTime<Utc>` and `NaiveDate` fields.
#[derive(Debug, Clone, Default)]
pub struct TimestampNowGenerator;

impl Generator for TimestampNowGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        is_temporal(field)
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::DateTime(Utc::now())
    }
}

/// Parse a timestamp string in various formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Date only
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
