// SPDX-FileCopyrightText: 2023 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};

pub use chrono::Duration;

/// Format used for timestamps inside message payloads (always UTC).
///
/// Fractional seconds are only written when they are not zero.
pub const PAYLOAD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    time: DateTime<Utc>,
}

impl From<DateTime<Utc>> for TimeStamp {
    fn from(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl From<TimeStamp> for DateTime<Utc> {
    fn from(time_stamp: TimeStamp) -> Self {
        time_stamp.time
    }
}

impl TimeStamp {
    pub fn now() -> Self {
        let time = Utc::now();
        Self { time }
    }

    /// A time stamp `days_in_the_future` days from now, truncated to whole
    /// seconds so it survives a round trip through the payload format.
    pub fn in_days(days_in_the_future: i64) -> Self {
        let time = (Utc::now() + Duration::days(days_in_the_future)).trunc_subsecs(0);
        Self { time }
    }

    /// Checks if this time stamp lies at or before `now`.
    pub fn has_passed_at(&self, now: DateTime<Utc>) -> bool {
        self.time <= now
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Parses a payload timestamp.
    ///
    /// Accepts `yyyy-MM-ddTHH:mm:ss` with optional fractional seconds, a space
    /// instead of the `T`, RFC 3339 offsets and bare dates. Values without an
    /// offset are read as UTC. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(time) = DateTime::parse_from_rfc3339(value) {
            return Some(time.with_timezone(&Utc).into());
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Some(naive.and_utc().into());
            }
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc().into())
    }

    /// Formats this time stamp the way payloads carry it.
    pub fn to_payload_string(&self) -> String {
        self.time.format(PAYLOAD_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_payload_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parse_payload_formats() {
        let expected: TimeStamp = Utc.with_ymd_and_hms(2026, 11, 18, 10, 30, 0).unwrap().into();
        assert_eq!(TimeStamp::parse("2026-11-18T10:30:00"), Some(expected));
        assert_eq!(TimeStamp::parse("2026-11-18 10:30:00"), Some(expected));
        assert_eq!(TimeStamp::parse("2026-11-18T10:30:00Z"), Some(expected));
        assert_eq!(TimeStamp::parse("2026-11-18T11:30:00+01:00"), Some(expected));
        assert_eq!(TimeStamp::parse("2026-11-18T10:30"), Some(expected));

        let midnight: TimeStamp = Utc.with_ymd_and_hms(2026, 11, 18, 0, 0, 0).unwrap().into();
        assert_eq!(TimeStamp::parse("2026-11-18"), Some(midnight));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(TimeStamp::parse(""), None);
        assert_eq!(TimeStamp::parse("tomorrow"), None);
        assert_eq!(TimeStamp::parse("2026-13-40T10:30:00"), None);
    }

    #[test]
    fn payload_string_round_trip() {
        let time_stamp = TimeStamp::in_days(30);
        let formatted = time_stamp.to_payload_string();
        assert_eq!(TimeStamp::parse(&formatted), Some(time_stamp));
    }

    #[test]
    fn fractional_seconds_survive_the_payload_format() {
        let time_stamp = TimeStamp::parse("2030-01-01T12:00:00.500").unwrap();
        assert_eq!(time_stamp.time().timestamp_subsec_millis(), 500);

        let formatted = time_stamp.to_payload_string();
        assert_eq!(formatted, "2030-01-01T12:00:00.500");
        assert_eq!(TimeStamp::parse(&formatted), Some(time_stamp));

        let whole: TimeStamp = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap().into();
        assert_eq!(whole.to_payload_string(), "2030-01-01T12:00:00");
    }

    #[test]
    fn in_days_is_in_the_future() {
        let now = Utc::now();
        let time_stamp = TimeStamp::in_days(30);
        assert!(!time_stamp.has_passed_at(now));
        assert!(time_stamp.has_passed_at(now + Duration::days(31)));
    }
}
