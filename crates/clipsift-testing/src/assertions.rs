//! Assertions on listings and on the CLI's JSON output.
//!
//! Each helper returns `anyhow::Result` so tests can `?` through several
//! checks and get a message naming what differed.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert record ids appear in exactly this order.
pub fn assert_ids(actual: &[i64], expected: &[i64]) -> Result<()> {
    if actual != expected {
        bail!("Expected ids {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert a sequence of timestamps never increases.
pub fn assert_newest_first<T: PartialOrd + std::fmt::Debug>(values: &[T]) -> Result<()> {
    for (i, pair) in values.windows(2).enumerate() {
        if pair[0] < pair[1] {
            bail!(
                "Entry {} ({:?}) is older than entry {} ({:?})",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
    }
    Ok(())
}

/// Parse CLI stdout as a JSON array of records.
pub fn parse_records(stdout: &[u8]) -> Result<Vec<Value>> {
    let json: Value = serde_json::from_slice(stdout).context("Output is not valid JSON")?;
    let records = json
        .as_array()
        .context("Expected a top-level JSON array")?
        .clone();
    Ok(records)
}

/// Ids of a JSON record array, in output order.
pub fn json_ids(records: &[Value]) -> Result<Vec<i64>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["id"]
                .as_i64()
                .with_context(|| format!("Record {} has no numeric id", i))
        })
        .collect()
}

/// Assert a JSON record omits `key` entirely (not null, not empty).
pub fn assert_field_absent(record: &Value, key: &str) -> Result<()> {
    let object = record.as_object().context("Record is not a JSON object")?;
    if let Some(value) = object.get(key) {
        bail!("Expected '{}' to be omitted, found {}", key, value);
    }
    Ok(())
}

/// Assert every record carries the fields that are always serialized.
pub fn assert_required_fields(records: &[Value]) -> Result<()> {
    const REQUIRED: [&str; 5] = [
        "id",
        "title",
        "firstCopiedAt",
        "lastCopiedAt",
        "numberOfCopies",
    ];

    for (i, record) in records.iter().enumerate() {
        for key in REQUIRED {
            if record.get(key).is_none() {
                bail!("Record {} is missing '{}'", i, key);
            }
        }
    }
    Ok(())
}
