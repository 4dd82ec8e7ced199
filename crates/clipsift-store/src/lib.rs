// Read-only access to Maccy's clipboard store
// Layout resolution happens per call, nothing is cached between fetches

mod connection;
mod discovery;
mod error;
mod layout;
mod queries;
pub mod schema;
mod store;

// Public API
pub use connection::{open_read_only, ping};
pub use discovery::{ResolvedColumns, pick_item_table, quote_identifier, resolve_columns};
pub use error::{Error, Result, TierFailure};
pub use layout::{ALTERNATE_LAYOUT, Field, FixedLayout, Listing, PRIMARY_LAYOUT, Tier};
pub use store::HistoryStore;
