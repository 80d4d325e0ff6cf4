//! Per-run cache of live table schemas.

use std::collections::{hash_map::Entry, HashMap};

use sea_orm::{ConnectionTrait, DbErr};

use crate::{data::schema::SchemaRepository, model::schema::TableSchema, model::table::SeedTable};

/// Live column sets of the charter tables, introspected once per table and cached.
pub struct SchemaCatalog<'a, C: ConnectionTrait> {
    repo: SchemaRepository<'a, C>,
    cache: HashMap<SeedTable, TableSchema>,
}

impl<'a, C: ConnectionTrait> SchemaCatalog<'a, C> {
    /// Creates a new instance of [`SchemaCatalog`] inspecting `schema` (ignored on SQLite)
    pub fn new(db: &'a C, schema: impl Into<String>) -> Self {
        Self {
            repo: SchemaRepository::new(db, schema),
            cache: HashMap::new(),
        }
    }

    /// The live column set of a table, introspecting it on first use.
    pub async fn describe(&mut self, table: SeedTable) -> Result<&TableSchema, DbErr> {
        match self.cache.entry(table) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let schema = self.repo.describe(table.name()).await?;
                tracing::debug!(
                    "Introspected {} ({} columns)",
                    table,
                    schema.columns.len()
                );
                Ok(entry.insert(schema))
            }
        }
    }
}
