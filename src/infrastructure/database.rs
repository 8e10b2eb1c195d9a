use crate::error::{Result, StoreError};
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, SqlxSqliteConnector};
use std::str::FromStr;

const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    color TEXT NOT NULL,
    description TEXT NOT NULL
)";

/// Handle to the SQLite store
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self> {
        tracing::info!("📦 Database: connecting to {}", url);
        if url.contains(":memory:") {
            return Self::connect_in_memory(url).await;
        }

        let mut options = ConnectOptions::new(url.to_owned());
        options.sqlx_logging(false);
        let conn = sea_orm::Database::connect(options).await?;
        Ok(Self { conn })
    }

    /// Every connection to `:memory:` opens its own empty database, so the
    /// pool holds exactly one connection and never reaps it.
    async fn connect_in_memory(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Storage(e.to_string()))?
            .disable_statement_logging();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self {
            conn: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn create_schema(&self) -> Result<()> {
        self.conn.execute_unprepared(CREATE_PRODUCTS_TABLE).await?;
        Ok(())
    }
}

#[async_trait]
impl OnModuleInit for Database {
    async fn on_module_init(&mut self) -> std::result::Result<(), LifecycleError> {
        tracing::info!("📦 Database: ensuring products table exists...");
        self.create_schema()
            .await
            .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
        tracing::info!("✅ Database: schema ready");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for Database {
    async fn on_module_destroy(&mut self) -> std::result::Result<(), LifecycleError> {
        tracing::info!("📦 Database: closing connection pool...");
        if let Err(e) = self.conn.clone().close().await {
            tracing::warn!("Database: close reported {}", e);
        }
        tracing::info!("✅ Database: connection pool closed");
        Ok(())
    }
}
