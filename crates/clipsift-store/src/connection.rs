use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::{Error, Result};

/// Open a store without write access and make sure it answers queries.
pub fn open_read_only(db_path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(db_path, flags).map_err(Error::Connection)?;

    ping(&conn)?;
    tracing::info!("Connected to {}", db_path.display());
    Ok(conn)
}

/// Cheap round trip proving the handle points at a readable SQLite file.
pub fn ping(conn: &Connection) -> Result<()> {
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(Error::Connection)?;
    Ok(())
}
