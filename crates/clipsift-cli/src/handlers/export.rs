use crate::presentation::formatters::json;
use anyhow::{Context, Result};
use clipsift_store::HistoryStore;
use std::fs;
use std::path::Path;

pub fn handle(store: &HistoryStore<'_>, output: &Path) -> Result<()> {
    let records = store.fetch_all().context("Error retrieving items")?;

    let mut document = json::records_to_json(&records)?;
    document.push('\n');
    fs::write(output, document)
        .with_context(|| format!("Error creating output file {}", output.display()))?;

    println!("Exported {} items to {}", records.len(), output.display());
    Ok(())
}
