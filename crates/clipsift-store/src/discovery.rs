//! Column discovery for stores that match neither fixed layout.
//!
//! Everything here is pure: callers hand in the table and column names they
//! observed, and get back the SELECT to run plus where each field lands in
//! the result row.

use crate::layout::{ColumnIndex, Field, limit_clause};

/// Prefix Core Data puts in front of every attribute column.
const CORE_DATA_PREFIX: &str = "Z";

/// Table names that may hold history items, most likely first.
const ITEM_TABLE_NAMES: &[&str] = &["HistoryItem", "ZHISTORYITEM"];

/// Observed columns matched to canonical fields, in [`Field::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    columns: Vec<(Field, String)>,
}

impl ResolvedColumns {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Observed column name chosen for a field.
    pub fn column(&self, field: Field) -> Option<&str> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, name)| name.as_str())
    }

    /// Fields with no matching column; they decode as NULL.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.column(*field).is_none())
            .collect()
    }

    /// Row positions of the selected fields.
    pub fn column_index(&self) -> ColumnIndex {
        let mut index = ColumnIndex::default();
        for (position, (field, _)) in self.columns.iter().enumerate() {
            index.set(*field, position);
        }
        index
    }

    /// SELECT naming only the matched columns, newest first when the store
    /// has a usable copy time.
    pub fn listing_sql(&self, table: &str, limit: usize) -> String {
        let select_list: Vec<String> = self
            .columns
            .iter()
            .map(|(_, name)| quote_identifier(name))
            .collect();

        let order_terms: Vec<String> = [Field::LastCopiedAt, Field::FirstCopiedAt]
            .into_iter()
            .filter_map(|field| self.column(field))
            .map(|name| format!("{} DESC", quote_identifier(name)))
            .collect();
        let order_clause = if order_terms.is_empty() {
            String::new()
        } else {
            format!("ORDER BY {}", order_terms.join(", "))
        };
        let limit_sql = limit_clause(limit);

        format!(
            r#"
            SELECT {}
            FROM {}
            {}
            {}
            "#,
            select_list.join(", "),
            quote_identifier(table),
            order_clause,
            limit_sql
        )
    }
}

/// Match observed column names against the canonical field table.
///
/// A column matches a field when it equals the field name, the field name
/// with the `Z` prefix, or one of the field's aliases, ignoring ASCII case.
/// Each field takes the first column that matches it; unmatched columns are
/// ignored.
pub fn resolve_columns<S: AsRef<str>>(observed: &[S], fields: &[Field]) -> ResolvedColumns {
    let mut columns = Vec::new();

    for field in fields {
        let hit = observed
            .iter()
            .map(AsRef::as_ref)
            .find(|name| matches_field(name, *field));
        if let Some(name) = hit
            && !columns.iter().any(|(f, _): &(Field, String)| f == field)
        {
            columns.push((*field, name.to_string()));
        }
    }

    ResolvedColumns { columns }
}

fn matches_field(column: &str, field: Field) -> bool {
    let canonical = field.canonical_name();
    if column.eq_ignore_ascii_case(canonical) {
        return true;
    }

    let prefixed = column.len() == CORE_DATA_PREFIX.len() + canonical.len()
        && column
            .get(..CORE_DATA_PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(CORE_DATA_PREFIX))
        && column
            .get(CORE_DATA_PREFIX.len()..)
            .is_some_and(|rest| rest.eq_ignore_ascii_case(canonical));
    if prefixed {
        return true;
    }

    field
        .aliases()
        .iter()
        .any(|alias| column.eq_ignore_ascii_case(alias))
}

/// Pick the table most likely to hold history items.
///
/// Exact known names win (case-insensitive, in priority order).
pub fn pick_item_table<S: AsRef<str>>(tables: &[S]) -> Option<&str> {
    ITEM_TABLE_NAMES.iter().find_map(|wanted| {
        tables
            .iter()
            .map(AsRef::as_ref)
            .find(|name| name.eq_ignore_ascii_case(wanted))
    })
}

/// Quote an identifier for SQLite, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
