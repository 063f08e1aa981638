//! Catalog queries against `information_schema`.
//!
//! The table name (and optional schema) are always bound as parameters.

use sqlx::postgres::PgConnection;

use crate::config::Config;
use crate::db::Database;
use crate::errors::{InspectError, ResultExt};
use crate::models::{ColumnDescriptor, TableColumns};

/// Both columns are cast to `text`; the catalog reports them as
/// `sql_identifier` / `character_data` domains.
pub const COLUMNS_QUERY: &str = r#"
    SELECT column_name::text AS column_name, data_type::text AS data_type
    FROM information_schema.columns
    WHERE table_name = $1
      AND ($2::text IS NULL OR table_schema = $2::text)
    ORDER BY ordinal_position
"#;

pub const TABLE_EXISTS_QUERY: &str = r#"
    SELECT EXISTS(
        SELECT 1
        FROM information_schema.tables
        WHERE table_name = $1
          AND ($2::text IS NULL OR table_schema = $2::text)
    )
"#;

/// Fetches the columns of `table` in ordinal position order.
///
/// An unknown table yields an empty list.
pub async fn fetch_columns(
    conn: &mut PgConnection,
    table: &str,
    schema: Option<&str>,
) -> Result<Vec<ColumnDescriptor>, InspectError> {
    tracing::debug!(table = %table, schema = ?schema, "Querying information_schema.columns");

    sqlx::query_as::<_, ColumnDescriptor>(COLUMNS_QUERY)
        .bind(table)
        .bind(schema)
        .fetch_all(&mut *conn)
        .await
        .map_err(InspectError::Query)
}

pub async fn table_exists(
    conn: &mut PgConnection,
    table: &str,
    schema: Option<&str>,
) -> Result<bool, InspectError> {
    sqlx::query_scalar::<_, bool>(TABLE_EXISTS_QUERY)
        .bind(table)
        .bind(schema)
        .fetch_one(&mut *conn)
        .await
        .map_err(InspectError::Query)
}

/// Inspects the configured table on an already open connection.
pub async fn inspect(
    conn: &mut PgConnection,
    config: &Config,
) -> Result<TableColumns, InspectError> {
    let table = config.table_name.as_str();
    let schema = config.table_schema.as_deref();

    if config.require_exists && !table_exists(conn, table, schema).await? {
        return Err(InspectError::TableNotFound(qualified_name(table, schema)));
    }

    let columns = fetch_columns(conn, table, schema)
        .await
        .with_context(|| format!("listing columns of {}", qualified_name(table, schema)))?;

    tracing::info!("Found {} columns in {}", columns.len(), table);
    Ok(TableColumns::new(table, columns))
}

/// Connects, inspects and disconnects. The connection is closed whether or
/// not the inspection succeeded.
pub async fn run(config: &Config) -> Result<TableColumns, InspectError> {
    let mut db = Database::connect(&config.database_url)
        .await
        .context("connecting to database")?;

    let result = inspect(db.connection(), config).await;
    db.release(result).await
}

fn qualified_name(table: &str, schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("{}.{}", schema, table),
        None => table.to_string(),
    }
}
