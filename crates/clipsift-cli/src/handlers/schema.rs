use crate::presentation::{self, SchemaView};
use anyhow::{Context, Result};
use clipsift_store::schema;
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        schema::export_ddl_to_file(conn, path)
            .with_context(|| format!("Error exporting schema to {}", path.display()))?;
        println!("Schema exported to {}", path.display());
        return Ok(());
    }

    let tables = schema::describe(conn).context("Error querying tables")?;
    print!(
        "{}",
        SchemaView::new(&tables).with_color(presentation::stdout_supports_color())
    );
    Ok(())
}
