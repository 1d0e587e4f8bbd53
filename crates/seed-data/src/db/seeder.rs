//! Database seeding utilities.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::generators::GeneratedClient;

/// Progress log cadence for large batches.
const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Acquires a connection pool for the configured endpoint.
///
/// A failure here means no connection was ever opened, so there is nothing
/// to release; the caller gets the driver error as [`SeedError::Connection`].
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, SeedError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await
        .map_err(SeedError::Connection)?;

    info!("Connected to database");
    Ok(pool)
}

/// Database seeder for inserting generated contact data.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts contacts into the clients table and returns the row count.
    ///
    /// The batch is one transaction: either every record commits or none
    /// do. A failed insert aborts the remaining records and the open
    /// transaction rolls back on drop.
    pub async fn seed_clients(&self, clients: &[GeneratedClient]) -> Result<u64, SeedError> {
        info!("Seeding {} clients...", clients.len());

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        for (i, client) in clients.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO clients (name, email, phone, address, type)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(&client.address)
            .bind(client.contact_type.as_str())
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();

            if (i + 1) % PROGRESS_INTERVAL == 0 {
                info!("  Seeded {}/{} clients", i + 1, clients.len());
            }
        }

        tx.commit().await?;

        info!("Seeded {} clients", inserted);
        Ok(inserted)
    }
}
