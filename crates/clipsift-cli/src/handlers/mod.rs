pub mod export;
pub mod items;
pub mod pins;
pub mod schema;
