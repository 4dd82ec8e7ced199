//! Testing infrastructure for clipsift integration tests.
//!
//! This crate provides utilities for writing integration tests:
//! - `fixtures`: SQLite stores in each layout Maccy has shipped, plus a shared sample set
//! - `assertions`: Checks on listings and JSON output

pub mod assertions;
pub mod fixtures;

pub use fixtures::{
    FixtureLayout, FixtureStore, PNG_BYTES, SAMPLE_NEWEST_FIRST, SAMPLE_PINNED, SampleItem,
    sample_items,
};
