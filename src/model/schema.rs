//! Live column sets of database tables.

use std::fmt;

/// A column of a live database table, as reported by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Database type name as reported by the backend
    pub data_type: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Whether the column has a default value (or is an identity column)
    pub has_default: bool,
    /// Whether the column is part of the primary key
    pub primary_key: bool,
}

impl ColumnInfo {
    /// A column an INSERT must provide a value for.
    pub fn is_required(&self) -> bool {
        !self.nullable && !self.has_default
    }

    /// A column an INSERT may leave out.
    pub fn is_optional(&self) -> bool {
        !self.primary_key && !self.is_required()
    }
}

/// The introspected column set of one table.
///
/// An empty column list means the table does not exist in the live database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name
    pub table: String,
    /// Columns in ordinal order
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Whether the table exists.
    pub fn exists(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.exists() {
            return write!(f, "{}: table not found", self.table);
        }

        writeln!(f, "{} ({} columns)", self.table, self.columns.len())?;
        for column in &self.columns {
            let mut flags = Vec::new();
            if column.primary_key {
                flags.push("PK");
            }
            if !column.nullable {
                flags.push("NOT NULL");
            }
            if column.has_default {
                flags.push("DEFAULT");
            }
            writeln!(
                f,
                "  {:<28} {:<28} {}",
                column.name,
                column.data_type,
                flags.join(" ")
            )?;
        }
        Ok(())
    }
}
