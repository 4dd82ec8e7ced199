use chrono::{DateTime, TimeZone, Utc};
use clipsift_types::is_unrecorded;
use std::fmt::Display;

pub const NEVER: &str = "<never>";

/// Render a copy time in `tz`, or `<never>` for the 1970-01-01 sentinel.
pub fn format_copied_at<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    if is_unrecorded(instant) {
        return NEVER.to_string();
    }
    instant
        .with_timezone(tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use clipsift_types::unrecorded;

    #[test]
    fn test_format_in_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_copied_at(&at, &Utc), "2024-03-01 09:05:07");
    }

    #[test]
    fn test_format_converts_to_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_copied_at(&at, &tokyo), "2024-03-02 08:30:00");
    }

    #[test]
    fn test_unrecorded_renders_never() {
        assert_eq!(format_copied_at(&unrecorded(), &Utc), NEVER);
        let same_day = Utc.with_ymd_and_hms(1970, 1, 1, 15, 0, 0).unwrap();
        assert_eq!(format_copied_at(&same_day, &Utc), NEVER);
    }
}
