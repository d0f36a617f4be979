//! Outcomes of resolving a hotel against both backing stores.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::entities::FieldValue;
use crate::domain::fields::Field;

/// Typed field map produced by one backing store.
pub type FieldMap = BTreeMap<Field, FieldValue>;

/// Why a hotel could not be resolved. Set where the failure happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Unreachable,
    Malformed,
    Other,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::Unreachable => "unreachable",
            FailureKind::Malformed => "malformed",
            FailureKind::Other => "other",
        }
    }
}

/// A successfully resolved hotel: its id plus every requested field that exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHotel {
    pub id: String,
    fields: FieldMap,
}

impl ResolvedHotel {
    /// Merges index and description values into one hotel.
    ///
    /// Description values override index values on collision, and `id` is
    /// always the hotel reference.
    pub fn merge(id: impl Into<String>, index: FieldMap, description: FieldMap) -> Self {
        let mut fields = index;
        fields.extend(description);
        fields.remove(&Field::Id);
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }
}

impl Serialize for ResolvedHotel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (field, value) in &self.fields {
            map.serialize_entry(field.response_name(), value)?;
        }
        map.end()
    }
}

/// A hotel that could not be resolved, reported alongside the page items.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FailedHotel {
    pub id: String,
    pub error: String,
    #[serde(rename = "originalError")]
    pub original_error: String,
    #[serde(skip)]
    pub kind: FailureKind,
}

impl FailedHotel {
    pub fn new(
        id: impl Into<String>,
        kind: FailureKind,
        error: impl Into<String>,
        original_error: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            error: error.into(),
            original_error: original_error.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_prefers_description_values() {
        let index = FieldMap::from([
            (Field::Manager, FieldValue::Text("0xmanager".to_string())),
            (Field::Name, FieldValue::Text("from index".to_string())),
        ]);
        let description =
            FieldMap::from([(Field::Name, FieldValue::Document(json!("from description")))]);

        let hotel = ResolvedHotel::merge("0xabc", index, description);

        assert_eq!(
            hotel.get(Field::Name),
            Some(&FieldValue::Document(json!("from description")))
        );
        assert_eq!(
            hotel.get(Field::Manager),
            Some(&FieldValue::Text("0xmanager".to_string()))
        );
    }

    #[test]
    fn test_id_is_always_the_reference() {
        let index = FieldMap::from([(Field::Id, FieldValue::Text("other".to_string()))]);
        let hotel = ResolvedHotel::merge("0xabc", index, FieldMap::new());

        assert_eq!(hotel.id, "0xabc");
        assert!(hotel.get(Field::Id).is_none());
    }

    #[test]
    fn test_serialize_uses_response_names() {
        let index = FieldMap::from([(Field::Manager, FieldValue::Text("0xm".to_string()))]);
        let description = FieldMap::from([(Field::Name, FieldValue::Document(json!("Rust Inn")))]);
        let hotel = ResolvedHotel::merge("0xabc", index, description);

        assert_eq!(
            serde_json::to_value(&hotel).unwrap(),
            json!({ "id": "0xabc", "managerAddress": "0xm", "name": "Rust Inn" })
        );
    }

    #[test]
    fn test_failed_hotel_shape() {
        let failed = FailedHotel::new(
            "0xabc",
            FailureKind::Unreachable,
            "Cannot access off-chain data",
            "connection refused",
        );

        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "id": "0xabc",
                "error": "Cannot access off-chain data",
                "originalError": "connection refused"
            })
        );
    }
}
