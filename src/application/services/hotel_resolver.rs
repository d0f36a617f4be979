//! Resolution of a single hotel into a typed field map.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::domain::entities::{
    DESCRIPTION_URI_KEY, DescriptionDocument, FailedHotel, FailureKind, FieldMap, Hotel,
    ResolvedHotel,
};
use crate::domain::fields::FieldSet;
use crate::domain::repositories::{ContentError, ContentStore, HotelIndex};

/// Summary reported when the index record itself cannot be read.
pub const INDEX_DATA_ERROR: &str = "Cannot access index data";
/// Summary reported when the content pointer cannot be dereferenced.
pub const CONTENT_DATA_ERROR: &str = "Cannot access off-chain data";
/// Summary reported for any other resolution failure.
pub const GENERIC_DATA_ERROR: &str = "Cannot get hotel data";

/// Human-readable summary for a content failure of the given kind.
pub fn content_failure_message(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::NotFound | FailureKind::Unreachable | FailureKind::Malformed => {
            CONTENT_DATA_ERROR
        }
        FailureKind::Other => GENERIC_DATA_ERROR,
    }
}

/// Resolves hotels against the index record and the content store.
///
/// A hotel is either fully resolved or reported as failed; index fields are
/// never returned on their own when the description could not be read.
pub struct HotelResolver {
    content: Arc<dyn ContentStore>,
}

impl HotelResolver {
    /// Creates a new resolver reading descriptions from `content`.
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    /// Resolves the requested `fields` of an already fetched hotel.
    ///
    /// # Errors
    ///
    /// Returns a [`FailedHotel`] if any description field is requested and the
    /// description document cannot be fetched or is malformed.
    pub async fn resolve(
        &self,
        hotel: &Hotel,
        fields: &FieldSet,
    ) -> Result<ResolvedHotel, FailedHotel> {
        let index_values: FieldMap = fields
            .index_fields()
            .filter_map(|field| hotel.index_value(field).map(|value| (field, value)))
            .collect();

        let description_values = if fields.needs_description() {
            let document = self.description(hotel).await.map_err(|e| {
                let message = content_failure_message(e.kind);
                failure(&hotel.address, e.kind, message, e.message)
            })?;

            fields
                .description_fields()
                .filter_map(|field| document.field(field).map(|value| (field, value)))
                .collect()
        } else {
            FieldMap::new()
        };

        Ok(ResolvedHotel::merge(
            hotel.address.clone(),
            index_values,
            description_values,
        ))
    }

    /// Fetches the hotel behind `address` from `index`, then resolves it.
    ///
    /// # Errors
    ///
    /// Returns a [`FailedHotel`] if the hotel is missing from the index, the
    /// index cannot be read, or [`HotelResolver::resolve`] fails.
    pub async fn resolve_reference(
        &self,
        index: &dyn HotelIndex,
        address: &str,
        fields: &FieldSet,
    ) -> Result<ResolvedHotel, FailedHotel> {
        match index.get(address).await {
            Ok(Some(hotel)) => self.resolve(&hotel, fields).await,
            Ok(None) => Err(failure(
                address,
                FailureKind::NotFound,
                GENERIC_DATA_ERROR,
                "Hotel is not present in the index",
            )),
            Err(e) => Err(failure(
                address,
                FailureKind::Unreachable,
                INDEX_DATA_ERROR,
                e.to_string(),
            )),
        }
    }

    /// Dereferences the hotel's content pointer into its description document.
    ///
    /// The pointer leads to a data index document whose `descriptionUri`
    /// member points at the description itself.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] of either hop, or a `Malformed` error if a
    /// document is not a JSON object or the data index has no `descriptionUri`.
    pub async fn description(&self, hotel: &Hotel) -> Result<DescriptionDocument, ContentError> {
        let data_index = self.content.fetch(&hotel.data_uri).await?;

        let description_uri = data_index
            .get(DESCRIPTION_URI_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ContentError::malformed(format!(
                    "Data index at {} has no `{}`",
                    hotel.data_uri, DESCRIPTION_URI_KEY
                ))
            })?;

        match self.content.fetch(description_uri).await? {
            Value::Object(contents) => Ok(DescriptionDocument::new(contents)),
            _ => Err(ContentError::malformed(format!(
                "Description at {} is not a JSON object",
                description_uri
            ))),
        }
    }
}

fn failure(
    address: &str,
    kind: FailureKind,
    error: &str,
    original_error: impl Into<String>,
) -> FailedHotel {
    let failed = FailedHotel::new(address, kind, error, original_error);

    warn!(
        address = %failed.id,
        kind = kind.as_str(),
        "Hotel resolution failed: {}",
        failed.original_error
    );
    metrics::counter!("catalog_resolution_failures_total", "kind" => kind.as_str()).increment(1);

    failed
}
