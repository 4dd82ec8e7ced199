use clipsift_store::schema::{ColumnInfo, ForeignKeyInfo, TableSchema};
use owo_colors::OwoColorize;
use std::fmt;

/// Human-readable dump of every user table, for `schema` without `-o`.
pub struct SchemaView<'a> {
    tables: &'a [TableSchema],
    color: bool,
}

impl<'a> SchemaView<'a> {
    pub fn new(tables: &'a [TableSchema]) -> Self {
        Self {
            tables,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn render_column(&self, f: &mut fmt::Formatter, column: &ColumnInfo) -> fmt::Result {
        write!(f, "  - {}", column.name)?;
        if !column.column_type.is_empty() {
            write!(f, " ({})", column.column_type)?;
        }
        if column.not_null {
            write!(f, " NOT NULL")?;
        }
        if column.primary_key {
            write!(f, " PRIMARY KEY")?;
        }
        if let Some(default) = &column.default_value {
            write!(f, " DEFAULT {}", default)?;
        }
        writeln!(f)
    }

    fn render_foreign_key(&self, f: &mut fmt::Formatter, key: &ForeignKeyInfo) -> fmt::Result {
        match &key.to {
            Some(to) => writeln!(f, "  - Foreign Key: {} -> {}.{}", key.from, key.table, to),
            None => writeln!(f, "  - Foreign Key: {} -> {}", key.from, key.table),
        }
    }
}

impl fmt::Display for SchemaView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.tables.is_empty() {
            return writeln!(f, "No tables found.");
        }

        for table in self.tables {
            if self.color {
                writeln!(f, "Table: {}", table.name.cyan().bold())?;
            } else {
                writeln!(f, "Table: {}", table.name)?;
            }

            for column in &table.columns {
                self.render_column(f, column)?;
            }
            for key in &table.foreign_keys {
                self.render_foreign_key(f, key)?;
            }
            for index in &table.indices {
                if index.unique {
                    writeln!(f, "  - Index: {} (UNIQUE)", index.name)?;
                } else {
                    writeln!(f, "  - Index: {}", index.name)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsift_store::schema::IndexInfo;

    #[test]
    fn test_schema_view() {
        let tables = vec![TableSchema {
            name: "HistoryItemContent".to_string(),
            columns: vec![
                ColumnInfo {
                    name: "id".to_string(),
                    column_type: "INTEGER".to_string(),
                    not_null: false,
                    primary_key: true,
                    default_value: None,
                },
                ColumnInfo {
                    name: "type".to_string(),
                    column_type: "TEXT".to_string(),
                    not_null: true,
                    primary_key: false,
                    default_value: Some("''".to_string()),
                },
                ColumnInfo {
                    name: "blob".to_string(),
                    column_type: String::new(),
                    not_null: false,
                    primary_key: false,
                    default_value: None,
                },
            ],
            foreign_keys: vec![ForeignKeyInfo {
                from: "item_id".to_string(),
                table: "HistoryItem".to_string(),
                to: Some("id".to_string()),
            }],
            indices: vec![IndexInfo {
                name: "idx_item".to_string(),
                unique: false,
            }],
        }];

        assert_eq!(
            SchemaView::new(&tables).to_string(),
            "Table: HistoryItemContent\n\
             \x20 - id (INTEGER) PRIMARY KEY\n\
             \x20 - type (TEXT) NOT NULL DEFAULT ''\n\
             \x20 - blob\n\
             \x20 - Foreign Key: item_id -> HistoryItem.id\n\
             \x20 - Index: idx_item\n\
             \n"
        );
    }

    #[test]
    fn test_empty_schema() {
        assert_eq!(SchemaView::new(&[]).to_string(), "No tables found.\n");
    }
}
