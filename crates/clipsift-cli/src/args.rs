use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipsift")]
#[command(about = "Explore and query Maccy's clipboard history database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the Maccy store (overrides CLIPSIFT_DB and auto-detection)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List clipboard items, most recently copied first")]
    Items {
        #[arg(short, long, default_value = "10", help = "Maximum items to show (0 for all)")]
        limit: usize,

        #[arg(short, long, help = "Display output in table format instead of JSON")]
        table: bool,
    },

    #[command(about = "List pinned clipboard items")]
    Pins {
        #[arg(short, long, help = "Display output in table format instead of JSON")]
        table: bool,
    },

    #[command(about = "Export every clipboard item to a JSON file")]
    Export {
        #[arg(default_value = "maccy-export.json")]
        file: PathBuf,
    },

    #[command(about = "Show the database schema")]
    Schema {
        #[arg(short, long, help = "Write a SQLite-compatible DDL script to this file")]
        output: Option<PathBuf>,
    },
}
