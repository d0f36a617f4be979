#![allow(dead_code)]

use async_trait::async_trait;
use hotel_catalog::application::services::CatalogService;
use hotel_catalog::domain::entities::Hotel;
use hotel_catalog::domain::repositories::{ContentError, ContentStore, HotelIndex, IndexError};
use hotel_catalog::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

pub const BASE_URL: &str = "http://test.local";

/// In-memory hotel index kept in insertion order.
#[derive(Default)]
pub struct MemoryIndex {
    hotels: Vec<Hotel>,
    unavailable: bool,
}

impl MemoryIndex {
    pub fn unavailable() -> Self {
        Self {
            hotels: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), IndexError> {
        if self.unavailable {
            return Err(IndexError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HotelIndex for MemoryIndex {
    async fn all_addresses(&self) -> Result<Vec<String>, IndexError> {
        self.check()?;
        Ok(self.hotels.iter().map(|h| h.address.clone()).collect())
    }

    async fn get(&self, address: &str) -> Result<Option<Hotel>, IndexError> {
        self.check()?;
        Ok(self.hotels.iter().find(|h| h.address == address).cloned())
    }

    async fn count(&self) -> Result<i64, IndexError> {
        self.check()?;
        Ok(self.hotels.len() as i64)
    }
}

/// In-memory content store: URIs map to documents or failures.
#[derive(Default)]
pub struct MemoryContent {
    documents: HashMap<String, Result<Value, ContentError>>,
}

#[async_trait]
impl ContentStore for MemoryContent {
    async fn fetch(&self, uri: &str) -> Result<Value, ContentError> {
        self.documents
            .get(uri)
            .cloned()
            .unwrap_or_else(|| Err(ContentError::not_found(format!("{uri} not found"))))
    }
}

/// Builds an index and a content store side by side.
#[derive(Default)]
pub struct Fixture {
    index: MemoryIndex,
    content: MemoryContent,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a healthy hotel named after its address, with a `single` and a
    /// `double` room type.
    pub fn hotel(self, address: &str) -> Self {
        self.hotel_with(
            address,
            json!({
                "name": format!("Hotel {address}"),
                "description": "A quiet place",
                "location": { "latitude": 50.08, "longitude": 14.42 },
                "currency": "EUR",
                "roomTypes": {
                    "single": { "name": "Single room", "occupancy": { "max": 1 } },
                    "double": { "name": "Double room", "occupancy": { "max": 2 } }
                }
            }),
        )
    }

    /// Adds a hotel with the given description document.
    pub fn hotel_with(mut self, address: &str, description: Value) -> Self {
        let (index_uri, description_uri) = uris(address);
        self.index
            .hotels
            .push(Hotel::new(address, format!("manager-{address}"), &index_uri));
        self.content.documents.insert(
            index_uri,
            Ok(json!({ "descriptionUri": description_uri })),
        );
        self.content
            .documents
            .insert(description_uri, Ok(description));
        self
    }

    /// Adds a hotel whose content pointer is unreachable.
    pub fn broken_hotel(mut self, address: &str) -> Self {
        let (index_uri, _) = uris(address);
        self.index
            .hotels
            .push(Hotel::new(address, format!("manager-{address}"), &index_uri));
        self.content.documents.insert(
            index_uri,
            Err(ContentError::unreachable("connection timed out")),
        );
        self
    }

    pub fn unavailable_index(mut self) -> Self {
        self.index = MemoryIndex::unavailable();
        self
    }

    pub fn state(self) -> AppState {
        let service = CatalogService::new(
            Arc::new(self.index),
            Arc::new(self.content),
            BASE_URL,
        );
        AppState::new(Arc::new(service))
    }
}

fn uris(address: &str) -> (String, String) {
    (
        format!("mem://{address}/index"),
        format!("mem://{address}/description"),
    )
}

/// Ids of the `items` of a listing response.
pub fn item_ids(body: &Value) -> Vec<String> {
    ids(&body["items"])
}

/// Ids of the `errors` of a listing response.
pub fn error_ids(body: &Value) -> Vec<String> {
    ids(&body["errors"])
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
