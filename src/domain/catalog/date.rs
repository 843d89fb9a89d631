// SPDX-License-Identifier: MPL-2.0
//! Date parsing for sorting.
//!
//! Item dates are free text. Anything that does not parse as an RFC 3339
//! timestamp, an ISO date-time or an ISO calendar date sorts as the Unix epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Returns the sort key of an optional date text, in milliseconds since the epoch.
#[must_use]
pub fn sort_timestamp(date: Option<&str>) -> i64 {
    date.map(str::trim)
        .and_then(parse_millis)
        .unwrap_or(0)
}

fn parse_millis(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_date_is_epoch() {
        assert_eq!(sort_timestamp(None), 0);
    }

    #[test]
    fn garbage_is_epoch() {
        assert_eq!(sort_timestamp(Some("someday")), 0);
        assert_eq!(sort_timestamp(Some("")), 0);
        assert_eq!(sort_timestamp(Some("2024-13-45")), 0);
    }

    #[test]
    fn calendar_dates_are_ordered() {
        let jan = sort_timestamp(Some("2024-01-01"));
        let feb = sort_timestamp(Some("2024-02-01"));
        assert!(jan > 0);
        assert!(feb > jan);
    }

    #[test]
    fn date_times_and_rfc3339_parse() {
        let midnight = sort_timestamp(Some("2024-01-01"));
        assert_eq!(sort_timestamp(Some("2024-01-01T00:00:00")), midnight);
        assert_eq!(sort_timestamp(Some("2024-01-01T00:00:00Z")), midnight);
        assert_eq!(sort_timestamp(Some("2024-01-01 00:00:00")), midnight);
        assert!(sort_timestamp(Some("2024-01-01T12:30:00+02:00")) > midnight);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            sort_timestamp(Some(" 2024-01-01 ")),
            sort_timestamp(Some("2024-01-01"))
        );
    }

    #[test]
    fn pre_epoch_dates_sort_before_missing_ones() {
        assert!(sort_timestamp(Some("1960-05-01")) < sort_timestamp(None));
    }
}
