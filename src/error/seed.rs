//! Errors that stop a single table from being seeded.

use thiserror::Error;

/// Reasons a table cannot be seeded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A parent table has no rows to reference.
    #[error("no {parent} rows to reference from {table}")]
    MissingParents {
        /// The child table
        table: &'static str,
        /// The empty parent table
        parent: &'static str,
    },
    /// The live table has required columns the generated rows cannot provide.
    #[error("table {table} has required columns unknown to the seeder: {}", columns.join(", "))]
    SchemaDrift {
        /// The drifted table
        table: &'static str,
        /// Required live columns the entity does not define
        columns: Vec<String>,
    },
    /// The table does not exist in the live database.
    #[error("table {0} does not exist")]
    TableMissing(String),
}
