//! The textual format of the seminar dates.
//!
//! The same format is used to read the dates from the input forms and to display them.

use chrono::NaiveDateTime;

/// The date format, as shown to the users.
pub const DATE_FORMAT: &str = "dd/MM/yyyy HH:mm";

const CHRONO_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Parses the provided text as a date and time in the [`DATE_FORMAT`] format.
///
/// The text must match the format exactly: two digits for the day, the month, the hours and
/// the minutes, four for the year, no surrounding spaces. The date must exist in the
/// calendar.
pub fn parse_date_and_time(s: &str) -> Option<NaiveDateTime> {
    let date = NaiveDateTime::parse_from_str(s, CHRONO_DATE_FORMAT).ok()?;
    // chrono accepts non-padded numbers
    (format_date_and_time(&date) == s).then_some(date)
}

/// Formats the provided date and time with the [`DATE_FORMAT`] format.
pub fn format_date_and_time(date: &NaiveDateTime) -> String {
    date.format(CHRONO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parse_valid() {
        let expected = NaiveDate::from_ymd_opt(2025, 2, 28)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        assert_eq!(parse_date_and_time("28/02/2025 10:00"), Some(expected));

        let expected = NaiveDate::from_ymd_opt(2025, 9, 15)
            .and_then(|d| d.and_hms_opt(18, 30, 0))
            .unwrap();
        assert_eq!(parse_date_and_time("15/09/2025 18:30"), Some(expected));
    }

    #[test]
    fn parse_invalid_calendar_date() {
        assert_eq!(parse_date_and_time("31/02/2025 10:00"), None);
        assert_eq!(parse_date_and_time("29/02/2025 10:00"), None);
        assert_eq!(parse_date_and_time("28/02/2025 24:00"), None);
    }

    #[test]
    fn parse_wrong_format() {
        assert_eq!(parse_date_and_time("2025-02-28 10:00"), None);
        assert_eq!(parse_date_and_time("28/02/2025"), None);
        assert_eq!(parse_date_and_time("28/02/2025 10:00:00"), None);
        assert_eq!(parse_date_and_time("8/02/2025 10:00"), None);
        assert_eq!(parse_date_and_time("28/2/2025 10:00"), None);
        assert_eq!(parse_date_and_time("28/02/2025 9:00"), None);
        assert_eq!(parse_date_and_time(" 28/02/2025 10:00"), None);
        assert_eq!(parse_date_and_time(""), None);
    }

    #[test]
    fn format_round_trip() {
        let date = parse_date_and_time("01/01/2026 09:00").unwrap();
        assert_eq!(format_date_and_time(&date), "01/01/2026 09:00");
    }
}
