use crate::presentation;
use anyhow::{Context, Result};
use clipsift_store::HistoryStore;

pub fn handle(store: &HistoryStore<'_>, table: bool) -> Result<()> {
    let records = store
        .fetch_pinned()
        .context("Error retrieving pinned items")?;

    if records.is_empty() {
        println!("No pinned items found.");
        return Ok(());
    }

    presentation::print_records(&records, table)
}
