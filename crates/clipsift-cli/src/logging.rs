//! Verbosity flag to diagnostics subscriber.
//!
//! The subscriber is never installed globally. [`crate::run`] scopes it over
//! the whole command and hands a clone to the store.

use is_terminal::IsTerminal;
use tracing::{Dispatch, Level};

/// `-v` count to level: none, info, debug, then trace.
pub fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Subscriber writing to stderr at the level `verbosity` selects.
pub fn dispatch_for(verbosity: u8) -> Dispatch {
    let Some(level) = level_for(verbosity) else {
        return Dispatch::none();
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}
