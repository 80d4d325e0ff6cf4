//! Introspection of the live column set of a table.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, QueryResult, Statement};

use crate::model::schema::{ColumnInfo, TableSchema};

const POSTGRES_COLUMNS_SQL: &str = r#"
SELECT c.column_name::text AS name,
       c.data_type::text AS data_type,
       c.is_nullable = 'YES' AS nullable,
       (c.column_default IS NOT NULL OR c.is_identity = 'YES') AS has_default,
       EXISTS (
           SELECT 1
           FROM information_schema.table_constraints tc
           JOIN information_schema.key_column_usage k
             ON k.constraint_name = tc.constraint_name
            AND k.table_schema = tc.table_schema
            AND k.table_name = tc.table_name
           WHERE tc.constraint_type = 'PRIMARY KEY'
             AND tc.table_schema = c.table_schema
             AND tc.table_name = c.table_name
             AND k.column_name = c.column_name
       ) AS primary_key
FROM information_schema.columns c
WHERE c.table_schema = $1 AND c.table_name = $2
ORDER BY c.ordinal_position
"#;

const SQLITE_COLUMNS_SQL: &str = r#"
SELECT name,
       type AS data_type,
       "notnull" = 0 AS nullable,
       dflt_value IS NOT NULL AS has_default,
       pk > 0 AS primary_key
FROM pragma_table_info(?)
ORDER BY cid
"#;

/// Reads the live column set of tables.
pub struct SchemaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    schema: String,
}

impl<'a, C: ConnectionTrait> SchemaRepository<'a, C> {
    /// Create a repository inspecting `schema` (ignored on SQLite).
    pub fn new(db: &'a C, schema: impl Into<String>) -> Self {
        Self {
            db,
            schema: schema.into(),
        }
    }

    /// Introspects a table's columns.
    ///
    /// Returns an empty column list if the table does not exist.
    pub async fn describe(&self, table: &str) -> Result<TableSchema, DbErr> {
        let backend = self.db.get_database_backend();
        let stmt = match backend {
            DbBackend::Sqlite => {
                Statement::from_sql_and_values(backend, SQLITE_COLUMNS_SQL, [table.into()])
            }
            DbBackend::Postgres => Statement::from_sql_and_values(
                backend,
                POSTGRES_COLUMNS_SQL,
                [self.schema.as_str().into(), table.into()],
            ),
            _ => {
                return Err(DbErr::Custom(format!(
                    "schema introspection is not supported on {:?}",
                    backend
                )))
            }
        };

        let rows = self.db.query_all_raw(stmt).await?;
        let columns = rows
            .iter()
            .map(column_from_row)
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(TableSchema {
            table: table.to_string(),
            columns,
        })
    }
}

fn column_from_row(row: &QueryResult) -> Result<ColumnInfo, DbErr> {
    Ok(ColumnInfo {
        name: row.try_get("", "name")?,
        data_type: row
            .try_get::<Option<String>>("", "data_type")?
            .unwrap_or_default(),
        nullable: row.try_get("", "nullable")?,
        has_default: row.try_get("", "has_default")?,
        primary_key: row.try_get("", "primary_key")?,
    })
}
