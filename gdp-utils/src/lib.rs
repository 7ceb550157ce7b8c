//! Shared date and number helpers for the GDP crates.

/// Timestamp parsing and calendar-year extraction.
pub mod dates {
    use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// Formats tried, in order, for timestamps that carry no UTC offset.
    const WALL_CLOCK_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Format for date-only timestamps: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// How timestamps without an explicit offset are placed on the timeline,
    /// and in which zone the calendar year is read.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ZonePolicy {
        /// Offset-less timestamps are UTC; years are read in UTC.
        #[default]
        Utc,
        /// Browser semantics: date-only strings are UTC midnight, offset-less
        /// date-times are local wall-clock time, and years are read locally.
        Local,
    }

    impl ZonePolicy {
        fn resolve_wall_clock(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
            match self {
                ZonePolicy::Utc => Some(naive.and_utc()),
                ZonePolicy::Local => Local
                    .from_local_datetime(&naive)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc)),
            }
        }
    }

    impl fmt::Display for ZonePolicy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ZonePolicy::Utc => write!(f, "utc"),
                ZonePolicy::Local => write!(f, "local"),
            }
        }
    }

    impl FromStr for ZonePolicy {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "utc" => Ok(ZonePolicy::Utc),
                "local" => Ok(ZonePolicy::Local),
                other => Err(format!("unknown zone policy '{}' (expected utc or local)", other)),
            }
        }
    }

    /// Parse an API timestamp into an instant.
    ///
    /// Accepts RFC 3339 (with `Z` or a numeric offset), offset-less
    /// date-times with `T` or a space separator, and bare `YYYY-MM-DD` dates.
    /// Returns `None` for anything else; callers treat that as an invalid date.
    pub fn parse_timestamp(raw: &str, zone: ZonePolicy) -> Option<DateTime<Utc>> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in WALL_CLOCK_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return zone.resolve_wall_clock(naive);
            }
        }
        // Date-only strings are UTC midnight under both policies.
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Calendar year of an instant, read in the zone the policy selects.
    pub fn year_of(instant: &DateTime<Utc>, zone: ZonePolicy) -> i32 {
        match zone {
            ZonePolicy::Utc => instant.year(),
            ZonePolicy::Local => instant.with_timezone(&Local).year(),
        }
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Timelike;

        #[test]
        fn test_parse_date_only_is_utc_midnight() {
            for zone in [ZonePolicy::Utc, ZonePolicy::Local] {
                let instant = parse_timestamp("1960-01-01", zone).unwrap();
                assert_eq!(instant.year(), 1960);
                assert_eq!(instant.hour(), 0);
            }
        }

        #[test]
        fn test_parse_trading_economics_format() {
            let instant = parse_timestamp("2023-12-31T00:00:00", ZonePolicy::Utc).unwrap();
            assert_eq!(year_of(&instant, ZonePolicy::Utc), 2023);
            assert_eq!(instant.month(), 12);
            assert_eq!(instant.day(), 31);
        }

        #[test]
        fn test_parse_with_fraction_and_space() {
            let instant = parse_timestamp("1999-06-30 12:00:00.500", ZonePolicy::Utc).unwrap();
            assert_eq!(instant.year(), 1999);
            assert_eq!(instant.hour(), 12);
        }

        #[test]
        fn test_parse_rfc3339_offset_is_honoured() {
            let instant = parse_timestamp("2001-01-01T01:00:00+02:00", ZonePolicy::Utc).unwrap();
            // 01:00 at +02:00 is 23:00 on the previous day in UTC
            assert_eq!(year_of(&instant, ZonePolicy::Utc), 2000);
        }

        #[test]
        fn test_local_policy_keeps_wall_clock_year() {
            // Mid-year, mid-day so no zone offset can move it across a year boundary
            let instant = parse_timestamp("1975-06-15T12:00:00", ZonePolicy::Local).unwrap();
            assert_eq!(year_of(&instant, ZonePolicy::Local), 1975);
        }

        #[test]
        fn test_unparseable_timestamps() {
            assert_eq!(parse_timestamp("", ZonePolicy::Utc), None);
            assert_eq!(parse_timestamp("not a date", ZonePolicy::Utc), None);
            assert_eq!(parse_timestamp("1960-13-01", ZonePolicy::Utc), None);
        }

        #[test]
        fn test_zone_policy_from_str() {
            assert_eq!("UTC".parse::<ZonePolicy>(), Ok(ZonePolicy::Utc));
            assert_eq!(" local ".parse::<ZonePolicy>(), Ok(ZonePolicy::Local));
            assert!("mars".parse::<ZonePolicy>().is_err());
            assert_eq!(ZonePolicy::default().to_string(), "utc");
        }

        #[test]
        fn test_format_date() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            assert_eq!(format_date(&date), "2023-06-15");
        }
    }
}

/// Number formatting for the table and chart labels.
pub mod numbers {
    /// Fixed-point formatting that spells non-finite values as words.
    ///
    /// `NaN` renders as "NaN", infinities as "Infinity" / "-Infinity".
    /// An exact negative zero prints without a sign; small negatives that
    /// round to zero keep it ("-0.00").
    pub fn to_fixed(value: f64, digits: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            };
        }
        // -0.0 == 0.0, so this drops the sign of an exact negative zero only
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{:.*}", digits, value)
    }

}
