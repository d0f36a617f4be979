//! Repository trait for the authoritative hotel index.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Hotel;

/// Failure to read the index itself (as opposed to a hotel being absent).
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Hotel index is unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the ordered collection of hotels.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHotelIndex`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelIndex: Send + Sync {
    /// Returns every hotel address in index order.
    ///
    /// The order is stable and append-only; it doubles as the pagination order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Unavailable`] if the index cannot be read.
    async fn all_addresses(&self) -> Result<Vec<String>, IndexError>;

    /// Fetches a single hotel by address.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Hotel))` if the hotel exists
    /// - `Ok(None)` if the address is not in the index
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Unavailable`] if the index cannot be read.
    async fn get(&self, address: &str) -> Result<Option<Hotel>, IndexError>;

    /// Counts hotels in the index. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Unavailable`] if the index cannot be read.
    async fn count(&self) -> Result<i64, IndexError>;
}
