pub mod history_table;
pub mod schema;

pub use history_table::HistoryTableView;
pub use schema::SchemaView;
