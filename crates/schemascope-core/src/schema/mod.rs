//! Schema model - tables, columns and foreign-key edges extracted from DDL

use serde::{Deserialize, Serialize};

/// Root of the extracted model: every table found in the input, in order of
/// appearance. Duplicate table names are retained as distinct entries, so
/// tables live in a plain vector rather than a name-keyed map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up the first table with the given name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Check whether any table with the given name exists.
    pub fn contains_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Append another schema's tables, preserving their order.
    pub fn merge(&mut self, other: Schema) {
        self.tables.extend(other.tables);
    }
}

/// One `CREATE TABLE` result: the table name as written, its columns in
/// declaration order, and its outgoing foreign keys in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Column definition. `data_type` is the raw type token as written in the
/// input; it is not validated against any type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
            not_null: false,
            unique: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Foreign-key edge from a column of its owning table to a target table and
/// column. The target is recorded as written; nothing checks that it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

impl ForeignKey {
    pub fn new(
        column: impl Into<String>,
        references_table: impl Into<String>,
        references_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            references_table: references_table.into(),
            references_column: references_column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let mut schema = Schema::new();
        schema.tables.push(Table::new("users"));
        schema.tables.push(Table::new("posts"));

        assert!(schema.contains_table("users"));
        assert!(!schema.contains_table("comments"));
        assert_eq!(schema.table("posts").map(|t| t.name.as_str()), Some("posts"));
    }

    #[test]
    fn test_duplicate_names_kept_distinct() {
        let mut schema = Schema::new();
        schema.tables.push(Table::new("users"));
        schema.tables.push(Table::new("users"));

        assert_eq!(schema.tables.len(), 2);
        // Lookup resolves to the first occurrence.
        assert!(std::ptr::eq(
            schema.table("users").unwrap(),
            &schema.tables[0]
        ));
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut left = Schema::new();
        left.tables.push(Table::new("a"));
        let mut right = Schema::new();
        right.tables.push(Table::new("b"));

        left.merge(right);
        let names: Vec<&str> = left.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
