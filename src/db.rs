use std::str::FromStr;

use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{AppError, AppResult};

pub type DbPool = SqlitePool;
pub type OrmConn = DatabaseConnection;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT, price INTEGER, color TEXT, size TEXT, quantity INTEGER
    )
"#;

const ADD_IMAGE_COLUMN: &str = "ALTER TABLE products ADD COLUMN imageUri TEXT";

const CREATE_SALES: &str = r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, price INTEGER
    )
"#;

/// Open the local database with a single connection.
///
/// One connection keeps the store single-writer and lets `sqlite::memory:`
/// behave as one database for the lifetime of the pool.
pub async fn create_pool(database_url: &str) -> AppResult<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Wrap an existing pool in a SeaORM connection sharing the same handle.
pub fn create_orm_conn(pool: &DbPool) -> OrmConn {
    SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone())
}

/// Create `products` and `sales` if absent and add the `imageUri` column to
/// tables created before it existed. Safe to run on every startup.
pub async fn ensure_schema(pool: &DbPool) -> AppResult<()> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;

    match sqlx::query(ADD_IMAGE_COLUMN).execute(pool).await {
        Ok(_) => tracing::info!("added imageUri column to products"),
        Err(err) if is_duplicate_column(&err) => {
            tracing::debug!("imageUri column already present");
        }
        Err(err) => return Err(AppError::SchemaEvolution(err)),
    }

    sqlx::query(CREATE_SALES).execute(pool).await?;
    Ok(())
}

/// SQLite reports an existing column as `duplicate column name: <col>`.
fn is_duplicate_column(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().starts_with("duplicate column name"),
        _ => false,
    }
}
