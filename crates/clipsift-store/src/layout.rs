use rusqlite::Row;
use rusqlite::types::FromSql;
use std::fmt;

// NOTE: Layout Rationale
//
// Maccy has shipped three storage shapes:
// - Primary: plain table/column names (`HistoryItem.lastCopiedAt`)
// - Alternate: Core Data mangling (`ZHISTORYITEM.ZLASTCOPIEDAT`, `Z_PK`)
// - Anything else: columns found by name at runtime (see discovery.rs)
//
// The fixed layouts are plain data so both the listing and content queries
// are generated from one table of names.

/// Canonical record fields, in the order fixed layouts select them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Pin,
    FirstCopiedAt,
    LastCopiedAt,
    NumberOfCopies,
    Application,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Title,
        Field::Pin,
        Field::FirstCopiedAt,
        Field::LastCopiedAt,
        Field::NumberOfCopies,
        Field::Application,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Pin => "pin",
            Field::FirstCopiedAt => "firstCopiedAt",
            Field::LastCopiedAt => "lastCopiedAt",
            Field::NumberOfCopies => "numberOfCopies",
            Field::Application => "application",
        }
    }

    /// Spellings accepted besides `name` and `Z` + `name`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Id => &["Z_PK"],
            _ => &[],
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// Which rows a listing asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Most recently copied first; `limit == 0` means no limit.
    Recent { limit: usize },
    /// Records with a non-empty pin, most recently copied first.
    Pinned,
}

/// One candidate naming convention, tried in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Alternate,
    Discovery,
}

impl Tier {
    /// Order used by full and recent listings.
    pub const LISTING: &'static [Tier] = &[Tier::Primary, Tier::Alternate, Tier::Discovery];

    /// Order used by pinned listings and content lookups.
    pub const FIXED: &'static [Tier] = &[Tier::Primary, Tier::Alternate];

    pub fn fixed_layout(self) -> Option<&'static FixedLayout> {
        match self {
            Tier::Primary => Some(&PRIMARY_LAYOUT),
            Tier::Alternate => Some(&ALTERNATE_LAYOUT),
            Tier::Discovery => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Primary => "primary",
            Tier::Alternate => "alternate",
            Tier::Discovery => "discovery",
        };
        f.write_str(name)
    }
}

/// Table and column names of one known storage layout.
#[derive(Debug)]
pub struct FixedLayout {
    pub item_table: &'static str,
    /// Column per [`Field`], in [`Field::ALL`] order.
    pub item_columns: [&'static str; 7],
    pub content_table: &'static str,
    pub content_type_column: &'static str,
    pub content_value_column: &'static str,
    pub content_item_column: &'static str,
}

pub const PRIMARY_LAYOUT: FixedLayout = FixedLayout {
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
    content_type_column: "type",
    content_value_column: "value",
    content_item_column: "item_id",
};

pub const ALTERNATE_LAYOUT: FixedLayout = FixedLayout {
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
    content_type_column: "ZTYPE",
    content_value_column: "ZVALUE",
    content_item_column: "ZITEM",
};

impl FixedLayout {
    pub fn column(&self, field: Field) -> &'static str {
        self.item_columns[field.position()]
    }

    pub fn listing_sql(&self, listing: Listing) -> String {
        let pin = self.column(Field::Pin);
        let last = self.column(Field::LastCopiedAt);

        let where_clause = match listing {
            Listing::Pinned => format!("WHERE {pin} IS NOT NULL AND {pin} != ''"),
            Listing::Recent { .. } => String::new(),
        };
        let limit_sql = match listing {
            Listing::Recent { limit } => limit_clause(limit),
            Listing::Pinned => String::new(),
        };

        format!(
            r#"
            SELECT {}
            FROM {}
            {}
            ORDER BY {} DESC
            {}
            "#,
            self.item_columns.join(", "),
            self.item_table,
            where_clause,
            last,
            limit_sql
        )
    }

    pub fn contents_sql(&self) -> String {
        format!(
            r#"
            SELECT {}, {}
            FROM {}
            WHERE {} = ?1
            "#,
            self.content_type_column,
            self.content_value_column,
            self.content_table,
            self.content_item_column
        )
    }
}

/// `LIMIT` clause for a recent listing; empty when `limit == 0`.
///
/// SQLite integer literals stop at `i64::MAX`; anything larger would parse
/// as REAL and match no rows, so it is clamped.
pub(crate) fn limit_clause(limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }
    format!("LIMIT {}", i64::try_from(limit).unwrap_or(i64::MAX))
}

/// Where each [`Field`] sits in a result row, if it was selected at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex([Option<usize>; 7]);

impl ColumnIndex {
    /// Every field selected, in [`Field::ALL`] order.
    pub fn sequential() -> Self {
        let mut positions = [None; 7];
        for (i, slot) in positions.iter_mut().enumerate() {
            *slot = Some(i);
        }
        Self(positions)
    }

    pub fn set(&mut self, field: Field, position: usize) {
        self.0[field.position()] = Some(position);
    }

    pub fn position(&self, field: Field) -> Option<usize> {
        self.0[field.position()]
    }

    /// Read a field as nullable; unselected fields read as NULL.
    pub fn get<T: FromSql>(&self, row: &Row<'_>, field: Field) -> rusqlite::Result<Option<T>> {
        match self.position(field) {
            Some(idx) => row.get::<_, Option<T>>(idx),
            None => Ok(None),
        }
    }
}
