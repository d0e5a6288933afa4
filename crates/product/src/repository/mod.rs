mod command;
mod query;

use shared::{
    config::{ConnectionManager, DatabaseConfig},
    errors::RepositoryError,
};
use sqlx::{Connection, PgConnection, Postgres, Transaction, postgres::PgConnectOptions};
use std::fmt;
use tracing::{debug, error, info, warn};

/// Product data access over one exclusively owned connection.
///
/// Lifecycle is `disconnected -> connected -> disconnected`; every
/// operation issued while disconnected fails with
/// [`RepositoryError::NotConnected`].
pub struct ProductRepository {
    options: PgConnectOptions,
    conn: Option<PgConnection>,
}

impl fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductRepository")
            .field("host", &self.options.get_host())
            .field("port", &self.options.get_port())
            .field("database", &self.options.get_database())
            .field("connected", &self.conn.is_some())
            .finish()
    }
}

impl ProductRepository {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self::with_options(config.connect_options())
    }

    pub fn with_options(options: PgConnectOptions) -> Self {
        Self {
            options,
            conn: None,
        }
    }

    pub async fn connect(&mut self) -> Result<(), RepositoryError> {
        if self.conn.is_some() {
            return Ok(());
        }

        let conn = ConnectionManager::connect(&self.options)
            .await
            .map_err(|e| {
                error!("❌ Failed to connect to PostgreSQL: {:?}", e);
                RepositoryError::Connection(e)
            })?;

        info!(
            "✅ Connected to PostgreSQL at {}:{}",
            self.options.get_host(),
            self.options.get_port()
        );
        self.conn = Some(conn);
        Ok(())
    }

    /// No-op when no connection is open.
    pub async fn disconnect(&mut self) -> Result<(), RepositoryError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        conn.close().await.map_err(|e| {
            warn!("⚠️ PostgreSQL connection closed uncleanly: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("🔌 PostgreSQL connection closed");
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn connection(&mut self) -> Result<&mut PgConnection, RepositoryError> {
        self.conn.as_mut().ok_or_else(|| {
            error!("❌ Statement issued without an open connection");
            RepositoryError::NotConnected
        })
    }
}

async fn rollback(tx: Transaction<'_, Postgres>, operation: &str) {
    match tx.rollback().await {
        Ok(()) => debug!("↩️ Rolled back {operation}"),
        Err(e) => error!("❌ Failed to roll back {operation}: {:?}", e),
    }
}
