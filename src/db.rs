//! Connection provider.
//!
//! Opens SeaORM connections from configuration. Repositories never open
//! connections themselves; callers pass one in.

use anyhow::Result;
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::constants::SQLITE_MEMORY_URL;
use crate::schema;

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Connect using the given settings.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let url = config.resolve_url()?;
    connect_url(&url, config).await
}

async fn connect_url(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);

    // Every pooled connection to `:memory:` would get its own empty database.
    if is_sqlite_memory(url) {
        options.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(options).await?;
    info!("Connected to {:?} database", conn.get_database_backend());
    Ok(conn)
}

/// Open a fresh in-memory SQLite database with the schema already created.
pub async fn connect_memory() -> Result<DatabaseConnection> {
    let conn = connect_url(SQLITE_MEMORY_URL, &DatabaseConfig::default()).await?;
    schema::create_all(&conn).await?;
    Ok(conn)
}
