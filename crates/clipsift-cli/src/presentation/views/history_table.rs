use chrono::{Local, TimeZone};
use clipsift_types::HistoryRecord;
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::text::{or_placeholder, truncate};
use crate::presentation::formatters::time::format_copied_at;

const TITLE_WIDTH: usize = 20;
const RULE_WIDTH: usize = 120;

/// Fixed-width listing used by `items -t` and `pins -t`.
pub struct HistoryTableView<'a, Tz: TimeZone = Local> {
    records: &'a [HistoryRecord],
    tz: Tz,
    color: bool,
}

impl<'a> HistoryTableView<'a, Local> {
    pub fn new(records: &'a [HistoryRecord]) -> Self {
        Self::in_timezone(records, Local)
    }
}

impl<'a, Tz: TimeZone> HistoryTableView<'a, Tz> {
    pub fn in_timezone(records: &'a [HistoryRecord], tz: Tz) -> Self {
        Self {
            records,
            tz,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl<Tz: TimeZone> fmt::Display for HistoryTableView<'_, Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No items found.");
        }

        let header = format!(
            "{:<5} {:<20} {:<3} {:<30} {:<30} {:<5} {:<20}",
            "ID", "Title", "Pin", "First Copied", "Last Copied", "Count", "Application"
        );
        if self.color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for record in self.records {
            writeln!(
                f,
                "{:<5} {:<20} {:<3} {:<30} {:<30} {:<5} {:<20}",
                record.id,
                truncate(&record.title, TITLE_WIDTH),
                or_placeholder(&record.pin, "-"),
                format_copied_at(&record.first_copied_at, &self.tz),
                format_copied_at(&record.last_copied_at, &self.tz),
                record.number_of_copies,
                or_placeholder(&record.application, "<unknown>"),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use clipsift_types::unrecorded;

    fn record(id: i64, title: &str, pin: &str, application: &str) -> HistoryRecord {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        HistoryRecord {
            id,
            title: title.to_string(),
            pin: pin.to_string(),
            first_copied_at: at,
            last_copied_at: at,
            number_of_copies: 3,
            application: application.to_string(),
            contents: Vec::new(),
        }
    }

    #[test]
    fn test_table_layout() {
        let records = vec![
            record(1, "hello world", "h", "com.apple.Safari"),
            record(12, "meeting notes for the quarterly review", "", ""),
        ];

        let output = HistoryTableView::in_timezone(&records, Utc).to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID    Title                Pin First Copied"));
        assert_eq!(lines[1], "-".repeat(120));
        assert!(lines[2].starts_with(
            "1     hello world          h   2024-03-01 09:00:00            2024-03-01 09:00:00            3     com.apple.Safari"
        ));
        assert!(lines[3].starts_with("12    meeting notes for... -   "));
        assert!(lines[3].trim_end().ends_with("<unknown>"));
    }

    #[test]
    fn test_unrecorded_times_show_never() {
        let mut old = record(5, "old entry", "", "");
        old.first_copied_at = unrecorded();
        old.last_copied_at = unrecorded();
        let records = [old];

        let output = HistoryTableView::in_timezone(&records, Utc).to_string();
        assert_eq!(output.matches("<never>").count(), 2);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            HistoryTableView::in_timezone(&[], Utc).to_string(),
            "No items found.\n"
        );
    }
}
