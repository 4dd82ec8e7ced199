use clipsift_types::ContentBlock;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Statement};

use crate::layout::Tier;
use crate::{Error, Result, TierFailure};

/// Content blocks of one record, in storage order.
///
/// Tries each fixed layout's content table; a layout counts as found once
/// its query prepares. Decode failures after that are returned as-is.
pub fn fetch(conn: &Connection, record_id: i64) -> Result<Vec<ContentBlock>> {
    let mut attempts = Vec::new();

    for tier in Tier::FIXED {
        let Some(layout) = tier.fixed_layout() else {
            continue;
        };

        // NOTE: only a failed prepare moves on; once a table is found its errors are final.
        match conn.prepare(&layout.contents_sql()) {
            Ok(mut stmt) => return read_blocks(&mut stmt, record_id),
            Err(err) => {
                let err = Error::from(err).classify();
                if err.is_connection() {
                    return Err(err);
                }
                tracing::trace!("{} content table unavailable: {}", tier, err);
                attempts.push(TierFailure {
                    tier: *tier,
                    reason: err.to_string(),
                });
            }
        }
    }

    Err(Error::SchemaNotRecognized { attempts })
}

fn read_blocks(stmt: &mut Statement<'_>, record_id: i64) -> Result<Vec<ContentBlock>> {
    let mut rows = stmt.query([record_id])?;
    let mut blocks = Vec::new();

    while let Some(row) = rows.next()? {
        let content_type: Option<String> = row.get(0)?;
        let value = payload_bytes(row.get_ref(1)?)?;
        blocks.push(ContentBlock::new(content_type.unwrap_or_default(), value));
    }

    Ok(blocks)
}

/// Payloads are BLOBs, but older rows may hold TEXT; both are taken as bytes.
fn payload_bytes(value: ValueRef<'_>) -> rusqlite::Result<Vec<u8>> {
    match value {
        ValueRef::Null => Ok(Vec::new()),
        ValueRef::Blob(bytes) | ValueRef::Text(bytes) => Ok(bytes.to_vec()),
        other => Err(rusqlite::Error::InvalidColumnType(
            1,
            "value".to_string(),
            other.data_type(),
        )),
    }
}
