//! Schema inspection for arbitrary stores.
//!
//! Used to look at an unknown Maccy version before teaching the reader about
//! it: a per-table description, and a DDL dump that recreates the empty
//! schema in a fresh SQLite file.

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use std::fs;
use std::path::Path;

use crate::Result;
use crate::discovery::quote_identifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
    pub foreign_keys: Vec<ForeignKeyInfo>,
    pub indices: Vec<IndexInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, empty when the column has none.
    pub column_type: String,
    pub not_null: bool,
    pub primary_key: bool,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyInfo {
    pub from: String,
    pub table: String,
    /// Referenced column; `None` when the key targets the primary key implicitly.
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub unique: bool,
}

/// User tables (SQLite's internal `sqlite_*` tables excluded), in creation order.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        "#,
    )?;

    let mut rows = stmt.query([])?;
    let mut tables = Vec::new();
    while let Some(row) = rows.next()? {
        match row.get::<_, String>(0) {
            Ok(name) => tables.push(name),
            Err(err) => tracing::debug!("Error scanning table name: {}", err),
        }
    }
    Ok(tables)
}

/// Describe every user table. Tables whose pragmas fail are still listed,
/// with whatever could be read.
pub fn describe(conn: &Connection) -> Result<Vec<TableSchema>> {
    let tables = list_tables(conn)?;
    Ok(tables
        .into_iter()
        .map(|name| TableSchema {
            columns: table_columns(conn, &name),
            foreign_keys: foreign_keys(conn, &name),
            indices: indices(conn, &name),
            name,
        })
        .collect())
}

fn table_columns(conn: &Connection, table: &str) -> Vec<ColumnInfo> {
    let sql = format!("PRAGMA table_info({})", quote_identifier(table));
    read_pragma(conn, &sql, table, |row| {
        Ok(ColumnInfo {
            name: row.get(1)?,
            column_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            not_null: row.get::<_, i64>(3)? != 0,
            default_value: render_value(row.get_ref(4)?),
            primary_key: row.get::<_, i64>(5)? > 0,
        })
    })
}

fn foreign_keys(conn: &Connection, table: &str) -> Vec<ForeignKeyInfo> {
    let sql = format!("PRAGMA foreign_key_list({})", quote_identifier(table));
    read_pragma(conn, &sql, table, |row| {
        Ok(ForeignKeyInfo {
            table: row.get(2)?,
            from: row.get(3)?,
            to: row.get(4)?,
        })
    })
}

fn indices(conn: &Connection, table: &str) -> Vec<IndexInfo> {
    let sql = format!("PRAGMA index_list({})", quote_identifier(table));
    read_pragma(conn, &sql, table, |row| {
        Ok(IndexInfo {
            name: row.get(1)?,
            unique: row.get::<_, i64>(2)? != 0,
        })
    })
}

/// Run a pragma, skipping rows that fail to decode.
fn read_pragma<T>(
    conn: &Connection,
    sql: &str,
    table: &str,
    decode: impl Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> Vec<T> {
    let mut stmt = match conn.prepare(sql) {
        Ok(stmt) => stmt,
        Err(err) => {
            tracing::debug!("Error running `{}` for table {}: {}", sql, table, err);
            return Vec::new();
        }
    };
    let mut rows = match stmt.query([]) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::debug!("Error running `{}` for table {}: {}", sql, table, err);
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    loop {
        match rows.next() {
            Ok(Some(row)) => match decode(row) {
                Ok(item) => items.push(item),
                Err(err) => tracing::trace!("Error scanning pragma row: {}", err),
            },
            Ok(None) => break,
            Err(err) => {
                tracing::debug!("Error stepping `{}`: {}", sql, err);
                break;
            }
        }
    }
    items
}

fn render_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// SQL script recreating every user table and index, wrapped in a transaction.
pub fn export_ddl(conn: &Connection) -> Result<String> {
    let tables = stored_sql(
        conn,
        r#"
        SELECT sql FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND sql IS NOT NULL
        "#,
    )?;
    let indices = stored_sql(
        conn,
        r#"
        SELECT sql FROM sqlite_master
        WHERE type = 'index' AND name NOT LIKE 'sqlite_%' AND sql IS NOT NULL
        "#,
    )?;

    let mut script = String::from("BEGIN TRANSACTION;\n\n");
    for statement in tables.iter().chain(indices.iter()) {
        script.push_str(statement);
        script.push_str(";\n\n");
    }
    script.push_str("COMMIT;\n");
    Ok(script)
}

/// Write [`export_ddl`] output to `path`, replacing any existing file.
pub fn export_ddl_to_file(conn: &Connection, path: &Path) -> Result<()> {
    let script = export_ddl(conn)?;
    fs::write(path, script)?;
    Ok(())
}

fn stored_sql(conn: &Connection, query: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(query)?;
    let mut rows = stmt.query([])?;
    let mut statements = Vec::new();
    while let Some(row) = rows.next()? {
        match row.get::<_, String>(0) {
            Ok(sql) => statements.push(sql),
            Err(err) => tracing::debug!("Error scanning SQL: {}", err),
        }
    }
    Ok(statements)
}
