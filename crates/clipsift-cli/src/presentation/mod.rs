pub mod formatters;
pub mod views;

pub use views::{HistoryTableView, SchemaView};

use anyhow::Result;
use clipsift_types::HistoryRecord;
use is_terminal::IsTerminal;

pub fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Print a listing as pretty JSON, or as the fixed-width table when `table` is set.
pub fn print_records(records: &[HistoryRecord], table: bool) -> Result<()> {
    if table {
        print!(
            "{}",
            HistoryTableView::new(records).with_color(stdout_supports_color())
        );
    } else {
        println!("{}", formatters::json::records_to_json(records)?);
    }
    Ok(())
}
