//! DTOs for the hotel endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::HotelPage;
use crate::domain::entities::{FailedHotel, ResolvedHotel};

/// Query parameters of `GET /hotels`.
///
/// `limit` stays a raw string so that non-numeric values surface as the
/// pagination validation error rather than a query rejection.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HotelListQuery {
    #[serde(default)]
    pub limit: Option<String>,

    #[serde(default, rename = "startWith")]
    pub start_with: Option<String>,

    /// Comma-separated field names; empty means the endpoint default.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub fields: Option<String>,
}

/// Query parameters of `GET /hotels/{address}`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HotelQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub fields: Option<String>,
}

/// Listing response: resolved hotels, per-hotel failures and the next link.
#[derive(Debug, Serialize)]
pub struct HotelListResponse {
    pub items: Vec<ResolvedHotel>,
    pub errors: Vec<FailedHotel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl From<HotelPage> for HotelListResponse {
    fn from(page: HotelPage) -> Self {
        Self {
            items: page.items,
            errors: page.errors,
            next: page.next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FailureKind;
    use serde_json::json;

    #[test]
    fn test_list_query_parses_camel_case_cursor() {
        let query: HotelListQuery =
            serde_json::from_value(json!({ "limit": "5", "startWith": "0xabc", "fields": "name" }))
                .unwrap();

        assert_eq!(query.limit.as_deref(), Some("5"));
        assert_eq!(query.start_with.as_deref(), Some("0xabc"));
        assert_eq!(query.fields.as_deref(), Some("name"));
    }

    #[test]
    fn test_empty_fields_is_none() {
        let query: HotelQuery = serde_json::from_value(json!({ "fields": "" })).unwrap();
        assert!(query.fields.is_none());

        let query: HotelQuery = serde_json::from_value(json!({})).unwrap();
        assert!(query.fields.is_none());
    }

    #[test]
    fn test_response_omits_absent_next() {
        let response = HotelListResponse::from(HotelPage {
            items: vec![],
            errors: vec![FailedHotel::new(
                "0xabc",
                FailureKind::Malformed,
                "Cannot access off-chain data",
                "bad json",
            )],
            next: None,
            next_start: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("next").is_none());
        assert_eq!(json["errors"][0]["originalError"], "bad json");
        assert_eq!(json["items"], json!([]));
    }
}
