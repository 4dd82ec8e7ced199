use crate::presentation;
use anyhow::{Context, Result};
use clipsift_store::HistoryStore;

pub fn handle(store: &HistoryStore<'_>, limit: usize, table: bool) -> Result<()> {
    let records = store
        .fetch_recent(limit)
        .context("Error retrieving items")?;

    if records.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    presentation::print_records(&records, table)
}
