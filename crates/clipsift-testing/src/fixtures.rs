//! Fixture stores for each storage layout.
//!
//! Stores are real SQLite files in a temp directory so the same fixture works
//! for in-process engine tests and for driving the CLI binary.

use anyhow::{Context, Result, bail};
use assert_cmd::Command;
use chrono::{DateTime, TimeZone, Utc};
use clipsift_types::{PLAIN_TEXT_TYPE, timestamp};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Storage shape a fixture is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureLayout {
    /// `HistoryItem` / `HistoryItemContent` with plain column names.
    Primary,
    /// Core Data store: `ZHISTORYITEM` / `ZHISTORYITEMCONTENT`, `Z_PK`.
    Alternate,
    /// `HistoryItem` with mixed-case, partially `z`-prefixed columns that only
    /// column discovery can read. Contents use the primary content table.
    Discovered,
    /// A `HistoryItem` table with no column the reader knows.
    Unmatched,
    /// No history table at all.
    Unrecognized,
}

struct LayoutNames {
    item_table: &'static str,
    /// id, title, pin, firstCopiedAt, lastCopiedAt, numberOfCopies, application
    item_columns: [&'static str; 7],
    content_table: &'static str,
    /// type, value, parent id
    content_columns: [&'static str; 3],
}

const PRIMARY_NAMES: LayoutNames = LayoutNames {
    item_table: "HistoryItem",
    item_columns: [
        "id",
        "title",
        "pin",
        "firstCopiedAt",
        "lastCopiedAt",
        "numberOfCopies",
        "application",
    ],
    content_table: "HistoryItemContent",
    content_columns: ["type", "value", "item_id"],
};

const ALTERNATE_NAMES: LayoutNames = LayoutNames {
    item_table: "ZHISTORYITEM",
    item_columns: [
        "Z_PK",
        "ZTITLE",
        "ZPIN",
        "ZFIRSTCOPIEDAT",
        "ZLASTCOPIEDAT",
        "ZNUMBEROFCOPIES",
        "ZAPPLICATION",
    ],
    content_table: "ZHISTORYITEMCONTENT",
    content_columns: ["ZTYPE", "ZVALUE", "ZITEM"],
};

const DISCOVERED_NAMES: LayoutNames = LayoutNames {
    item_table: "HistoryItem",
    item_columns: [
        "ID",
        "Title",
        "zPin",
        "FirstCopiedAt",
        "zLastCopiedAt",
        "NumberOfCopies",
        "zApplication",
    ],
    content_table: "HistoryItemContent",
    content_columns: ["type", "value", "item_id"],
};

const PRIMARY_SCHEMA: &str = r#"
    CREATE TABLE HistoryItem (
        id INTEGER PRIMARY KEY,
        title TEXT,
        pin TEXT,
        firstCopiedAt REAL,
        lastCopiedAt REAL,
        numberOfCopies INTEGER,
        application TEXT
    );
    CREATE TABLE HistoryItemContent (
        id INTEGER PRIMARY KEY,
        type TEXT,
        value BLOB,
        item_id INTEGER REFERENCES HistoryItem(id)
    );
    CREATE INDEX idx_content_item ON HistoryItemContent(item_id);
"#;

const ALTERNATE_SCHEMA: &str = r#"
    CREATE TABLE ZHISTORYITEM (
        Z_PK INTEGER PRIMARY KEY,
        Z_ENT INTEGER,
        Z_OPT INTEGER,
        ZNUMBEROFCOPIES INTEGER,
        ZFIRSTCOPIEDAT TIMESTAMP,
        ZLASTCOPIEDAT TIMESTAMP,
        ZAPPLICATION VARCHAR,
        ZPIN VARCHAR,
        ZTITLE VARCHAR
    );
    CREATE TABLE ZHISTORYITEMCONTENT (
        Z_PK INTEGER PRIMARY KEY,
        Z_ENT INTEGER,
        Z_OPT INTEGER,
        ZITEM INTEGER,
        ZTYPE VARCHAR,
        ZVALUE BLOB
    );
    CREATE INDEX ZHISTORYITEMCONTENT_ZITEM_INDEX ON ZHISTORYITEMCONTENT (ZITEM);
    CREATE TABLE Z_PRIMARYKEY (Z_ENT INTEGER PRIMARY KEY, Z_NAME VARCHAR, Z_SUPER INTEGER, Z_MAX INTEGER);
    CREATE TABLE Z_METADATA (Z_VERSION INTEGER PRIMARY KEY, Z_UUID VARCHAR(255), Z_PLIST BLOB);
"#;

const DISCOVERED_SCHEMA: &str = r#"
    CREATE TABLE HistoryItem (
        ID INTEGER PRIMARY KEY,
        Title TEXT,
        zPin TEXT,
        FirstCopiedAt REAL,
        zLastCopiedAt REAL,
        NumberOfCopies INTEGER,
        zApplication TEXT,
        Z_OPT INTEGER
    );
    CREATE TABLE HistoryItemContent (
        id INTEGER PRIMARY KEY,
        type TEXT,
        value BLOB,
        item_id INTEGER
    );
"#;

const UNMATCHED_SCHEMA: &str = r#"
    CREATE TABLE HistoryItem (
        uuid TEXT PRIMARY KEY,
        body TEXT,
        created REAL
    );
"#;

const UNRECOGNIZED_SCHEMA: &str = r#"
    CREATE TABLE notes (
        id INTEGER PRIMARY KEY,
        body TEXT
    );
"#;

impl FixtureLayout {
    fn schema(self) -> &'static str {
        match self {
            FixtureLayout::Primary => PRIMARY_SCHEMA,
            FixtureLayout::Alternate => ALTERNATE_SCHEMA,
            FixtureLayout::Discovered => DISCOVERED_SCHEMA,
            FixtureLayout::Unmatched => UNMATCHED_SCHEMA,
            FixtureLayout::Unrecognized => UNRECOGNIZED_SCHEMA,
        }
    }

    fn names(self) -> Option<&'static LayoutNames> {
        match self {
            FixtureLayout::Primary => Some(&PRIMARY_NAMES),
            FixtureLayout::Alternate => Some(&ALTERNATE_NAMES),
            FixtureLayout::Discovered => Some(&DISCOVERED_NAMES),
            FixtureLayout::Unmatched | FixtureLayout::Unrecognized => None,
        }
    }

    /// Layouts the reader is expected to handle.
    pub fn readable() -> [FixtureLayout; 3] {
        [
            FixtureLayout::Primary,
            FixtureLayout::Alternate,
            FixtureLayout::Discovered,
        ]
    }
}

/// One history row plus its contents, as written into a fixture.
#[derive(Debug, Clone, Default)]
pub struct SampleItem {
    pub id: i64,
    pub title: Option<String>,
    pub pin: Option<String>,
    pub first_copied_at: Option<DateTime<Utc>>,
    pub last_copied_at: Option<DateTime<Utc>>,
    pub number_of_copies: Option<i64>,
    pub application: Option<String>,
    pub contents: Vec<(String, Vec<u8>)>,
}

impl SampleItem {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn pinned(mut self, pin: &str) -> Self {
        self.pin = Some(pin.to_string());
        self
    }

    pub fn copied(mut self, first: DateTime<Utc>, last: DateTime<Utc>) -> Self {
        self.first_copied_at = Some(first);
        self.last_copied_at = Some(last);
        self
    }

    pub fn copies(mut self, count: i64) -> Self {
        self.number_of_copies = Some(count);
        self
    }

    pub fn from_app(mut self, bundle_id: &str) -> Self {
        self.application = Some(bundle_id.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_content(PLAIN_TEXT_TYPE, text.as_bytes().to_vec())
    }

    pub fn with_content(mut self, content_type: &str, value: Vec<u8>) -> Self {
        self.contents.push((content_type.to_string(), value));
        self
    }
}

/// PNG signature, used as a binary payload.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Shared sample set, inserted out of recency order.
///
/// Newest first by `lastCopiedAt`: 3, 1, 2, 4, 5 (item 5 has no copy times).
/// Pinned: 1 and 4; item 3 has an empty pin, items 2 and 5 a NULL pin.
pub fn sample_items() -> Vec<SampleItem> {
    vec![
        SampleItem::new(1, "hello world")
            .pinned("h")
            .copied(at(2024, 1, 1, 10, 0), at(2024, 3, 1, 9, 0))
            .copies(3)
            .from_app("com.apple.Safari")
            .with_text("hello world")
            .with_content("public.html", b"<b>hello world</b>".to_vec()),
        SampleItem::new(2, "Screenshot 2024-02-10")
            .copied(at(2024, 2, 10, 12, 0), at(2024, 2, 10, 12, 0))
            .copies(1)
            .from_app("com.apple.screencaptureui")
            .with_content("public.png", PNG_BYTES.to_vec()),
        SampleItem::new(3, "meeting notes for the quarterly planning session")
            .pinned("")
            .copied(at(2024, 1, 15, 8, 30), at(2024, 3, 5, 8, 0))
            .copies(7)
            .with_text("meeting notes for the quarterly planning session"),
        SampleItem::new(4, "api key")
            .pinned("k")
            .copied(at(2023, 12, 1, 18, 45), at(2023, 12, 1, 18, 45))
            .copies(1)
            .with_text("sk-test-123"),
        SampleItem::new(5, "old entry"),
    ]
}

/// Ids of [`sample_items`] ordered newest first.
pub const SAMPLE_NEWEST_FIRST: [i64; 5] = [3, 1, 2, 4, 5];

/// Ids of pinned [`sample_items`], newest first.
pub const SAMPLE_PINNED: [i64; 2] = [1, 4];

/// A store file in its own temp directory.
pub struct FixtureStore {
    _temp_dir: TempDir,
    path: PathBuf,
    layout: FixtureLayout,
}

impl FixtureStore {
    /// Create an empty store with the layout's schema.
    pub fn new(layout: FixtureLayout) -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let path = temp_dir.path().join("Storage.sqlite");

        let conn = Connection::open(&path)?;
        conn.execute_batch(layout.schema())
            .with_context(|| format!("Failed to create {:?} schema", layout))?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
            layout,
        })
    }

    /// Create a store holding [`sample_items`] (readable layouts only).
    pub fn with_samples(layout: FixtureLayout) -> Result<Self> {
        let store = Self::new(layout)?;
        for item in sample_items() {
            store.insert(&item)?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> FixtureLayout {
        self.layout
    }

    /// Fresh read-write connection to the store.
    pub fn connection(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Run raw SQL, for rows no layout helper can express.
    pub fn execute(&self, sql: &str) -> Result<()> {
        self.connection()?.execute_batch(sql)?;
        Ok(())
    }

    pub fn insert(&self, item: &SampleItem) -> Result<()> {
        let Some(names) = self.layout.names() else {
            bail!("{:?} fixtures hold no history rows", self.layout);
        };
        let conn = self.connection()?;

        let placeholders = (1..=names.item_columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        conn.execute(
            &format!(
                "INSERT INTO {} ({}) VALUES ({})",
                names.item_table,
                names.item_columns.join(", "),
                placeholders
            ),
            params![
                item.id,
                item.title,
                item.pin,
                item.first_copied_at.map(timestamp::encode),
                item.last_copied_at.map(timestamp::encode),
                item.number_of_copies,
                item.application,
            ],
        )?;

        let [type_col, value_col, item_col] = names.content_columns;
        for (content_type, value) in &item.contents {
            conn.execute(
                &format!(
                    "INSERT INTO {} ({}, {}, {}) VALUES (?1, ?2, ?3)",
                    names.content_table, type_col, value_col, item_col
                ),
                params![content_type, value, item.id],
            )?;
        }

        Ok(())
    }

    /// Point a CLI command at this store.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--db").arg(&self.path)
    }
}
