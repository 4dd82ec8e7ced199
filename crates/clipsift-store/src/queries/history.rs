use clipsift_types::{HistoryRecord, NullableRecord};
use rusqlite::{Connection, Row};

use crate::discovery::{pick_item_table, resolve_columns};
use crate::layout::{ColumnIndex, Field, Listing, Tier};
use crate::queries::contents;
use crate::{Error, Result, TierFailure};

// NOTE: Fallback Rationale
//
// Each tier is attempted exactly once per call, in order. The first tier whose
// query prepares is authoritative: its rows are returned even if they look
// odd. Tier failures are only logged; the caller sees an error when every
// tier failed, or immediately when the connection itself is unusable.
//
// Contents are fetched per record inside the decode loop (N+1). Stores are
// local and small, and a failing content lookup only thins one record.

/// Run a listing through the given tiers until one of them reads.
pub fn list(conn: &Connection, listing: Listing, tiers: &[Tier]) -> Result<Vec<HistoryRecord>> {
    let mut attempts = Vec::new();

    for tier in tiers {
        match attempt(conn, *tier, listing) {
            Ok(records) => {
                tracing::info!(
                    "Read {} record(s) using the {} layout",
                    records.len(),
                    tier
                );
                return Ok(records);
            }
            Err(err) => {
                let err = err.classify();
                if err.is_connection() {
                    return Err(err);
                }
                tracing::debug!("{} layout query failed, trying next: {}", tier, err);
                attempts.push(TierFailure {
                    tier: *tier,
                    reason: err.to_string(),
                });
            }
        }
    }

    Err(Error::SchemaNotRecognized { attempts })
}

fn attempt(conn: &Connection, tier: Tier, listing: Listing) -> Result<Vec<HistoryRecord>> {
    if let Some(layout) = tier.fixed_layout() {
        return read_records(conn, &layout.listing_sql(listing), &ColumnIndex::sequential());
    }

    let Listing::Recent { limit } = listing else {
        return Err(Error::Query(format!(
            "{} layout does not support {:?} listings",
            tier, listing
        )));
    };
    attempt_discovered(conn, limit)
}

fn attempt_discovered(conn: &Connection, limit: usize) -> Result<Vec<HistoryRecord>> {
    let tables = table_names(conn)?;
    let Some(table) = pick_item_table(&tables) else {
        return Err(Error::Query("no history table found".to_string()));
    };

    let observed = probe_columns(conn, table)?;
    tracing::debug!("{} columns: {}", table, observed.join(", "));

    let resolved = resolve_columns(&observed, &Field::ALL);
    if resolved.is_empty() {
        return Err(Error::Query(format!(
            "couldn't identify any known columns in {}",
            table
        )));
    }
    let missing = resolved.missing();
    if !missing.is_empty() {
        tracing::debug!("{} has no columns for {:?}; they read as empty", table, missing);
    }

    read_records(
        conn,
        &resolved.listing_sql(table, limit),
        &resolved.column_index(),
    )
}

fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(names)
}

/// Column names of a table, read from a prepared (never stepped) probe.
fn probe_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let sql = format!(
        "SELECT * FROM {} LIMIT 1",
        crate::discovery::quote_identifier(table)
    );
    let stmt = conn.prepare(&sql)?;
    let names = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(names)
}

fn read_records(conn: &Connection, sql: &str, columns: &ColumnIndex) -> Result<Vec<HistoryRecord>> {
    tracing::trace!("query: {}", sql.split_whitespace().collect::<Vec<_>>().join(" "));

    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut records = Vec::new();

    loop {
        let row = match rows.next() {
            Ok(Some(row)) => row,
            Ok(None) => break,
            Err(err) => {
                tracing::debug!("Stopped reading rows after {}: {}", records.len(), err);
                break;
            }
        };

        let staged = match decode_row(row, columns) {
            Ok(staged) => staged,
            Err(err) => {
                tracing::debug!("Error scanning row: {}", err);
                continue;
            }
        };

        let mut record = staged.into_record();
        match contents::fetch(conn, record.id) {
            Ok(blocks) => record.contents = blocks,
            Err(err) => tracing::debug!("Error getting contents for item {}: {}", record.id, err),
        }
        records.push(record);
    }

    Ok(records)
}

fn decode_row(row: &Row<'_>, columns: &ColumnIndex) -> rusqlite::Result<NullableRecord> {
    Ok(NullableRecord {
        id: columns.get(row, Field::Id)?,
        title: columns.get(row, Field::Title)?,
        pin: columns.get(row, Field::Pin)?,
        first_copied_at: columns.get(row, Field::FirstCopiedAt)?,
        last_copied_at: columns.get(row, Field::LastCopiedAt)?,
        number_of_copies: columns.get(row, Field::NumberOfCopies)?,
        application: columns.get(row, Field::Application)?,
    })
}
