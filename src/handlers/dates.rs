use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Completed, Query, ResponseSink};

pub const BOTH_REQUIRED: &str = "Both date1 and date2 must be provided";
pub const INVALID_FORMAT: &str = "Invalid date format";

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Parses `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp taken as UTC.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, HandlerError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| HandlerError::Validation(INVALID_FORMAT.to_string()))
}

/// Whole days between two instants, order-insensitive, partial days rounded up.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let millis = (b - a).num_milliseconds().abs();
    (millis + DAY_MILLIS - 1) / DAY_MILLIS
}

pub async fn handle(_config: Arc<Config>, query: Query, sink: ResponseSink) -> Completed {
    let (Some(date1), Some(date2)) = (query.value("date1"), query.value("date2")) else {
        return sink.end(BOTH_REQUIRED);
    };

    match (parse_date(date1), parse_date(date2)) {
        (Ok(d1), Ok(d2)) => sink.end(format!(
            "The number of days between {} and {} is {}",
            date1,
            date2,
            days_between(d1, d2)
        )),
        _ => sink.end(INVALID_FORMAT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_days_round_up() {
        let a = parse_date("2022-01-01T00:00:00Z").unwrap();
        let b = parse_date("2022-01-02T01:00:00Z").unwrap();
        assert_eq!(days_between(a, b), 2);
    }

    #[test]
    fn order_does_not_matter() {
        let a = parse_date("2022-03-01").unwrap();
        let b = parse_date("2022-02-01").unwrap();
        assert_eq!(days_between(a, b), 28);
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        assert!(parse_date("2022-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
