pub mod content;
pub mod record;
pub mod timestamp;

pub use content::{ContentBlock, PLAIN_TEXT_TYPE};
pub use record::{HistoryRecord, NullableRecord};
pub use timestamp::{REFERENCE_EPOCH_UNIX_SECONDS, is_unrecorded, unrecorded};
