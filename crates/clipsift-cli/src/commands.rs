use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use clipsift_store::{HistoryStore, open_read_only};
use tracing::Dispatch;

pub fn run(cli: Cli) -> Result<()> {
    let dispatch = logging::dispatch_for(cli.verbose);
    tracing::dispatcher::with_default(&dispatch, || execute(cli, &dispatch))
}

fn execute(cli: Cli, dispatch: &Dispatch) -> Result<()> {
    let db_path = clipsift_core::resolve_store_path(cli.db.as_deref())?;
    let conn = open_read_only(&db_path)
        .with_context(|| format!("Failed to open {}", db_path.display()))?;
    let store = HistoryStore::new(&conn).with_dispatch(dispatch.clone());

    match cli.command {
        Commands::Items { limit, table } => handlers::items::handle(&store, limit, table),
        Commands::Pins { table } => handlers::pins::handle(&store, table),
        Commands::Export { file } => handlers::export::handle(&store, &file),
        Commands::Schema { output } => handlers::schema::handle(&conn, output.as_deref()),
    }
}
