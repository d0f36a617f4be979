//! Hotel catalog service: resilient pagination and single-hotel lookups.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::application::services::hotel_resolver::{HotelResolver, content_failure_message};
use crate::domain::entities::{DescriptionDocument, FailedHotel, Hotel, ResolvedHotel};
use crate::domain::fields::FieldSet;
use crate::domain::pagination::{PaginationError, paginate, validate_limit};
use crate::domain::repositories::{ContentStore, HotelIndex, IndexError};
use crate::error::AppError;

/// Upper bound on backfill rounds for one page.
pub const DEFAULT_MAX_BACKFILL_ROUNDS: usize = 64;

/// Hotels resolved at the same time within one window.
pub const DEFAULT_RESOLVE_CONCURRENCY: usize = 8;

/// One page of the hotel listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPage {
    pub items: Vec<ResolvedHotel>,
    pub errors: Vec<FailedHotel>,
    /// Ready-to-follow link to the next page.
    pub next: Option<String>,
    /// Raw cursor where the last consulted window stopped.
    pub next_start: Option<String>,
}

/// Service aggregating the hotel index and the content store.
///
/// Listing pages are filled up to the requested limit with successfully
/// resolved hotels: when hotels in a window fail, further windows are pulled
/// until the quota is met or the index is exhausted.
pub struct CatalogService {
    index: Arc<dyn HotelIndex>,
    resolver: HotelResolver,
    base_url: String,
    max_backfill_rounds: usize,
    resolve_concurrency: usize,
}

impl CatalogService {
    /// Creates a new catalog service.
    ///
    /// `base_url` prefixes every next link (e.g. `https://api.example.com`).
    pub fn new(
        index: Arc<dyn HotelIndex>,
        content: Arc<dyn ContentStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            index,
            resolver: HotelResolver::new(content),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_backfill_rounds: DEFAULT_MAX_BACKFILL_ROUNDS,
            resolve_concurrency: DEFAULT_RESOLVE_CONCURRENCY,
        }
    }

    /// Overrides the maximum number of backfill rounds per page.
    pub fn with_max_backfill_rounds(mut self, rounds: usize) -> Self {
        self.max_backfill_rounds = rounds;
        self
    }

    /// Overrides how many hotels of a window are resolved at once (at least 1).
    pub fn with_resolve_concurrency(mut self, concurrency: usize) -> Self {
        self.resolve_concurrency = concurrency.max(1);
        self
    }

    /// Lists hotels for `GET <path>`.
    ///
    /// The limit is validated before the index is touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a zero limit,
    /// [`AppError::NotFound`] for an unknown `start_with`, and
    /// [`AppError::BadGateway`] if the index cannot be read.
    pub async fn list_hotels(
        &self,
        path: &str,
        fields: &FieldSet,
        limit: Option<usize>,
        start_with: Option<&str>,
    ) -> Result<HotelPage, AppError> {
        validate_limit(limit)?;

        let addresses = self.index.all_addresses().await?;
        let page = self
            .fill(path, fields, &addresses, limit, start_with)
            .await?;

        debug!(
            items = page.items.len(),
            errors = page.errors.len(),
            has_next = page.next.is_some(),
            "Hotel page filled"
        );

        Ok(page)
    }

    /// Fills one page from `collection`, backfilling failed hotels.
    ///
    /// Each window is resolved with at most `resolve_concurrency` hotels in
    /// flight, results kept in window order, and fully joined before the next
    /// one starts. A new window is pulled only while the current one had
    /// failures, the page is still short of `limit`, and references remain.
    /// The cursor strictly advances, so the loop ends at the latest when the
    /// collection is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] for a zero limit or unknown `start_with`.
    pub async fn fill(
        &self,
        path: &str,
        fields: &FieldSet,
        collection: &[String],
        limit: Option<usize>,
        start_with: Option<&str>,
    ) -> Result<HotelPage, PaginationError> {
        let mut items = Vec::new();
        let mut errors = Vec::new();
        let mut window_limit = limit;
        let mut cursor = start_with.map(str::to_string);
        let mut rounds = 0;

        let next_start = loop {
            let window = paginate(collection, window_limit, cursor.as_deref())?;

            let lookups: Vec<_> = window
                .items
                .iter()
                .map(|address| {
                    self.resolver
                        .resolve_reference(self.index.as_ref(), address, fields)
                })
                .collect();
            let results: Vec<_> = stream::iter(lookups)
                .buffered(self.resolve_concurrency)
                .collect()
                .await;

            let mut resolved = 0;
            let mut failed = 0;
            for result in results {
                match result {
                    Ok(hotel) => {
                        resolved += 1;
                        items.push(hotel);
                    }
                    Err(failure) => {
                        failed += 1;
                        errors.push(failure);
                    }
                }
            }

            let next_start = window.next_start.cloned();
            let Some(remaining) = window_limit.map(|limit| limit - resolved) else {
                break next_start;
            };
            if failed == 0 || remaining == 0 || next_start.is_none() {
                break next_start;
            }

            if rounds >= self.max_backfill_rounds {
                warn!(
                    rounds,
                    remaining, "Backfill round limit reached, returning a short page"
                );
                break next_start;
            }
            rounds += 1;
            metrics::counter!("catalog_backfill_rounds_total").increment(1);
            debug!(round = rounds, remaining, cursor = ?next_start, "Backfilling failed hotels");

            window_limit = Some(remaining);
            cursor = next_start;
        };

        let next = match &next_start {
            Some(cursor) if !items.is_empty() => {
                Some(self.next_link(path, fields, limit, cursor))
            }
            _ => None,
        };

        Ok(HotelPage {
            items,
            errors,
            next,
            next_start,
        })
    }

    /// Resolves a single hotel for `GET /hotels/{address}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel is not in the index and
    /// [`AppError::BadGateway`] if its data cannot be resolved.
    pub async fn get_hotel(
        &self,
        address: &str,
        fields: &FieldSet,
    ) -> Result<ResolvedHotel, AppError> {
        let hotel = self.find_hotel(address).await?;

        self.resolver
            .resolve(&hotel, fields)
            .await
            .map_err(|failed| AppError::hotel_not_accessible(failed.error))
    }

    /// Returns every room type of a hotel, keyed by id.
    ///
    /// A description without room types yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel is not in the index and
    /// [`AppError::BadGateway`] if its description cannot be read.
    pub async fn room_types(&self, address: &str) -> Result<Map<String, Value>, AppError> {
        let description = self.description_of(address).await?;
        Ok(description.room_types().unwrap_or_default())
    }

    /// Returns a single room type of a hotel.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogService::room_types`], plus [`AppError::NotFound`] if
    /// the room type does not exist.
    pub async fn room_type(&self, address: &str, room_type_id: &str) -> Result<Value, AppError> {
        self.description_of(address)
            .await?
            .room_type(room_type_id)
            .ok_or_else(AppError::room_type_not_found)
    }

    /// Number of hotels in the index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Unavailable`] if the index cannot be read.
    pub async fn index_size(&self) -> Result<i64, IndexError> {
        self.index.count().await
    }

    async fn find_hotel(&self, address: &str) -> Result<Hotel, AppError> {
        self.index
            .get(address)
            .await?
            .ok_or_else(AppError::hotel_not_found)
    }

    async fn description_of(&self, address: &str) -> Result<DescriptionDocument, AppError> {
        let hotel = self.find_hotel(address).await?;

        self.resolver.description(&hotel).await.map_err(|e| {
            warn!(address, "Hotel description not accessible: {}", e);
            AppError::hotel_not_accessible(content_failure_message(e.kind))
        })
    }

    fn next_link(
        &self,
        path: &str,
        fields: &FieldSet,
        limit: Option<usize>,
        cursor: &str,
    ) -> String {
        let limit = limit.map(|l| format!("limit={l}&")).unwrap_or_default();
        let cursor: String = url::form_urlencoded::byte_serialize(cursor.as_bytes()).collect();

        format!(
            "{}{}?{}fields={}&startWith={}",
            self.base_url,
            path,
            limit,
            fields.to_csv(),
            cursor
        )
    }
}
