use rusqlite::ErrorCode;
use std::fmt;

use crate::layout::Tier;

/// Result type for clipsift-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Query failed against a reachable database
    Database(rusqlite::Error),

    /// The handle itself is unusable (missing file, not a database, I/O, locked)
    Connection(rusqlite::Error),

    /// Every layout was tried and none could be read
    SchemaNotRecognized { attempts: Vec<TierFailure> },

    /// Layout-specific failure that is not a SQLite error (no table, no columns)
    Query(String),

    /// IO operation failed
    Io(std::io::Error),
}

/// Why one layout was rejected during fallback.
#[derive(Debug, Clone)]
pub struct TierFailure {
    pub tier: Tier,
    pub reason: String,
}

impl fmt::Display for TierFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} layout: {}", self.tier, self.reason)
    }
}

impl Error {
    pub fn is_schema_not_recognized(&self) -> bool {
        matches!(self, Error::SchemaNotRecognized { .. })
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_))
    }

    /// Promote errors that say the handle is unusable, so callers skip fallback.
    pub(crate) fn classify(self) -> Self {
        match self {
            Error::Database(err) if is_connection_failure(&err) => Error::Connection(err),
            other => other,
        }
    }
}

fn is_connection_failure(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(
            ErrorCode::NotADatabase
                | ErrorCode::CannotOpen
                | ErrorCode::SystemIoFailure
                | ErrorCode::DatabaseCorrupt
                | ErrorCode::PermissionDenied
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
        )
    )
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Connection(err) => write!(f, "Cannot read database: {}", err),
            Error::SchemaNotRecognized { attempts } => {
                write!(f, "Source schema not recognized")?;
                if !attempts.is_empty() {
                    let reasons: Vec<String> = attempts.iter().map(|a| a.to_string()).collect();
                    write!(f, " ({})", reasons.join("; "))?;
                }
                Ok(())
            }
            Error::Query(msg) => write!(f, "Query error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) | Error::Connection(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::SchemaNotRecognized { .. } | Error::Query(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
