// ABOUTME: Publish-date formatting for pubDate and lastBuildDate fields.
// ABOUTME: Dates stay plain strings in the model; this only helps producers write them.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// chrono layout for `Mon, 02 Jan 2006 15:04:05 MST`.
pub const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Formats a timestamp the way RSS `pubDate` values are written.
///
/// The zone is printed by name when chrono knows one (`UTC`), otherwise as
/// an offset.
pub fn format_rfc1123<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(RFC1123).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_utc() {
        let dt = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_rfc1123(&dt), "Mon, 02 Jan 2006 15:04:05 UTC");
    }

    #[test]
    fn test_single_digit_day_is_padded() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        assert_eq!(format_rfc1123(&dt), "Sat, 09 Mar 2024 08:00:00 UTC");
    }

    #[test]
    fn test_fixed_offset_keeps_local_time() {
        let offset = FixedOffset::west_opt(7 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert!(format_rfc1123(&dt).starts_with("Mon, 02 Jan 2006 15:04:05 "));
    }
}
