// NOTE: clipsift Architecture Rationale
//
// Why read-only and stateless?
// - Maccy owns the store and may be writing to it while we read
// - Every command opens the file read-only, reads, and exits
// - Nothing is cached, so a Maccy upgrade never leaves stale state behind
//
// Why layered fallback (not a version check)?
// - Maccy never recorded a schema version we could branch on
// - Each known layout is tried by simply running its query
// - Unknown layouts still list through column discovery
// - Trade-off: a failing store costs up to three queries before erroring

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
