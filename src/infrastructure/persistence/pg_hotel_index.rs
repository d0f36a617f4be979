//! PostgreSQL implementation of the hotel index.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Hotel;
use crate::domain::repositories::{HotelIndex, IndexError};

impl From<sqlx::Error> for IndexError {
    fn from(e: sqlx::Error) -> Self {
        IndexError::Unavailable(e.to_string())
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    address: String,
    manager: String,
    data_uri: String,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel::new(row.address, row.manager, row.data_uri)
    }
}

/// PostgreSQL-backed hotel index.
///
/// Index order is insertion order (`id ASC`); the table is append-only from
/// the service's point of view.
pub struct PgHotelIndex {
    pool: Arc<PgPool>,
}

impl PgHotelIndex {
    /// Creates a new index with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelIndex for PgHotelIndex {
    async fn all_addresses(&self) -> Result<Vec<String>, IndexError> {
        let addresses =
            sqlx::query_scalar::<_, String>("SELECT address FROM hotels ORDER BY id ASC")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(addresses)
    }

    async fn get(&self, address: &str) -> Result<Option<Hotel>, IndexError> {
        let row = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT address, manager, data_uri
            FROM hotels
            WHERE address = $1
            "#,
        )
        .bind(address)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Hotel::from))
    }

    async fn count(&self) -> Result<i64, IndexError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
