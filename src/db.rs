use sqlx::{postgres::PgConnection, Connection};

use crate::config::redact_database_url;
use crate::errors::InspectError;

/// A single database connection, closed through [`Database::release`].
///
/// Dropping it without `release` (e.g. while unwinding) still closes the socket.
pub struct Database {
    conn: PgConnection,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, InspectError> {
        tracing::debug!("Connecting to {}", redact_database_url(database_url));

        let conn = PgConnection::connect(database_url)
            .await
            .map_err(InspectError::Connection)?;

        tracing::info!("Database connection established");
        Ok(Self { conn })
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    /// Sends a protocol-level terminate and waits for the server to hang up.
    pub async fn close(self) -> Result<(), InspectError> {
        self.conn.close().await.map_err(InspectError::Connection)?;
        tracing::debug!("Database connection closed");
        Ok(())
    }

    /// Closes the connection and hands back the outcome of the work done on it.
    ///
    /// A failed close is logged and never replaces the work's result.
    pub async fn release<T>(
        self,
        result: Result<T, InspectError>,
    ) -> Result<T, InspectError> {
        if let Err(e) = self.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }
        result
    }
}
