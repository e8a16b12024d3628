#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tally::libs::formatter::{format_day, format_done, format_optional_timestamp, format_timestamp, parse_datetime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_timestamps_drop_fractional_seconds() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_milli_opt(9, 5, 7, 250).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-15 09:05:07");
    }

    #[test]
    fn test_missing_completion_is_blank() {
        assert_eq!(format_optional_timestamp(None), "");
        assert_eq!(format_optional_timestamp(Some(&at(18, 0, 0))), "2025-01-15 18:00:00");
    }

    #[test]
    fn test_day_and_done_mark() {
        assert_eq!(format_day(&NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), "1970-01-01");
        assert_eq!(format_done(true), "✓");
        assert_eq!(format_done(false), "");
    }

    #[test]
    fn test_parse_datetime_accepts_common_forms() {
        assert_eq!(parse_datetime("2025-01-15 09:30:15"), Some(at(9, 30, 15)));
        assert_eq!(parse_datetime("2025-01-15 09:30"), Some(at(9, 30, 0)));
        assert_eq!(parse_datetime("2025-01-15T09:30:15"), Some(at(9, 30, 15)));
        assert_eq!(parse_datetime("2025-01-15T09:30"), Some(at(9, 30, 0)));
        assert_eq!(parse_datetime(" 2025-01-15 "), Some(at(0, 0, 0)));
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert_eq!(parse_datetime("yesterday"), None);
        assert_eq!(parse_datetime("2025-13-01"), None);
        assert_eq!(parse_datetime(""), None);
    }
}
