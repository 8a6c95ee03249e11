use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Numeric dates are day-first unless they start with the year.
const DATE_TIME_FORMATS: [&str; 14] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// Parse a timestamp in any of the supported formats, preferring day-first for numeric dates.
///
/// Date-only values mean midnight. Timestamps with an offset keep their wall-clock time.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value).ok().map(|timestamp| timestamp.naive_local())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, 0)
    }

    #[test]
    fn test_day_first() {
        assert_eq!(parse_timestamp("31/01/2024 08:00"), expected(2024, 1, 31, 8, 0));
        assert_eq!(parse_timestamp("31.01.2025 08:00"), expected(2025, 1, 31, 8, 0));
        assert_eq!(parse_timestamp("31-01-2025 08:15:00"), expected(2025, 1, 31, 8, 15));
    }

    #[test]
    fn test_ambiguous_is_day_first() {
        assert_eq!(parse_timestamp("01/02/2025 00:00"), expected(2025, 2, 1, 0, 0));
    }

    #[test]
    fn test_iso() {
        assert_eq!(parse_timestamp("2024-01-31T08:00"), expected(2024, 1, 31, 8, 0));
        assert_eq!(parse_timestamp("2024-01-31 08:00:00"), expected(2024, 1, 31, 8, 0));
        assert_eq!(parse_timestamp("2024-01-31T08:00:00.000"), expected(2024, 1, 31, 8, 0));
    }

    #[test]
    fn test_rfc3339_keeps_wall_clock() {
        assert_eq!(parse_timestamp("2025-06-01T13:00:00+02:00"), expected(2025, 6, 1, 13, 0));
    }

    #[test]
    fn test_date_only() {
        assert_eq!(parse_timestamp("2025-04-01"), expected(2025, 4, 1, 0, 0));
        assert_eq!(parse_timestamp("01.04.2025"), expected(2025, 4, 1, 0, 0));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("32/01/2025 08:00"), None);
    }
}
