//! Date source for metadata defaults.
//!
//! Posts carry a display date such as `March 05, 2023`. Anything that
//! needs "today" goes through a [`Clock`] so it can be pinned in tests.

use chrono::{Local, NaiveDate};

/// Display format of post dates (`March 05, 2023`).
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Format accepted for user-supplied dates (`2023-03-05`).
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today in the display format.
    fn display_date(&self) -> String {
        format_display_date(self.today())
    }
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a display date. Month names are matched case-insensitively and
/// must be spelled out in full: `Mar 05, 2023` is not a display date.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT).ok()?;
    // chrono's %B also accepts abbreviations
    let month = value.split_whitespace().next()?;
    month.eq_ignore_ascii_case(&date.format("%B").to_string()).then_some(date)
}

/// Convert a `YYYY-MM-DD` input to the display format.
///
/// Anything else is returned trimmed but otherwise untouched, so dates that
/// are already in display form (or free-form) pass through.
pub fn normalize_input_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT) {
        Ok(date) => format_display_date(date),
        Err(_) => value.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_date_is_zero_padded() {
        assert_eq!(format_display_date(ymd(2023, 3, 5)), "March 05, 2023");
        assert_eq!(FixedClock(ymd(2024, 12, 25)).display_date(), "December 25, 2024");
    }

    #[test]
    fn parses_display_dates() {
        assert_eq!(parse_display_date("January 01, 2023"), Some(ymd(2023, 1, 1)));
        assert_eq!(parse_display_date("february 10, 2023"), Some(ymd(2023, 2, 10)));
        assert_eq!(parse_display_date("yesterday"), None);
        assert_eq!(parse_display_date("Mar 05, 2023"), None);
        assert_eq!(parse_display_date("  May 01, 2024 "), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_display_date("2023-01-01"), None);
        assert_eq!(parse_display_date(""), None);
    }

    #[test]
    fn normalizes_input_dates() {
        assert_eq!(normalize_input_date("2023-03-05"), "March 05, 2023");
        assert_eq!(normalize_input_date(" March 05, 2023 "), "March 05, 2023");
        assert_eq!(normalize_input_date("someday"), "someday");
    }
}
