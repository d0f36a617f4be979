//! Description document fetched from the content store, and the typed field
//! values read from it.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::fields::Field;

/// Key under which a data index document points at the description document.
pub const DESCRIPTION_URI_KEY: &str = "descriptionUri";

/// A single resolved field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain string attribute, e.g. an index-sourced address.
    Text(String),
    /// Arbitrary JSON taken from the description document.
    Document(Value),
}

/// Content-sourced hotel data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptionDocument(Map<String, Value>);

impl DescriptionDocument {
    pub fn new(contents: Map<String, Value>) -> Self {
        Self(contents)
    }

    /// Reads a field from the document.
    ///
    /// Room types come back with their map key injected as `id`.
    pub fn field(&self, field: Field) -> Option<FieldValue> {
        if field == Field::RoomTypes {
            return self.room_types().map(|rt| FieldValue::Document(Value::Object(rt)));
        }
        self.0
            .get(field.name())
            .cloned()
            .map(FieldValue::Document)
    }

    /// All room types keyed by id, each record carrying its own `id`.
    pub fn room_types(&self) -> Option<Map<String, Value>> {
        let mut room_types = self.0.get(Field::RoomTypes.name())?.clone();
        if let Value::Object(records) = &mut room_types {
            for (id, record) in records.iter_mut() {
                if let Value::Object(record) = record {
                    record.insert("id".to_string(), Value::String(id.clone()));
                }
            }
        }
        match room_types {
            Value::Object(records) => Some(records),
            _ => None,
        }
    }

    /// A single room type with its `id` injected.
    pub fn room_type(&self, id: &str) -> Option<Value> {
        self.room_types()?.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> DescriptionDocument {
        let Value::Object(map) = json!({
            "name": "Hotel Rust",
            "location": { "latitude": 50.08, "longitude": 14.42 },
            "roomTypes": {
                "single": { "name": "Single room" },
                "double": { "name": "Double room" }
            }
        }) else {
            unreachable!()
        };
        DescriptionDocument::new(map)
    }

    #[test]
    fn test_plain_field() {
        assert_eq!(
            document().field(Field::Name),
            Some(FieldValue::Document(json!("Hotel Rust")))
        );
        assert_eq!(document().field(Field::Currency), None);
    }

    #[test]
    fn test_room_types_get_ids() {
        let room_types = document().room_types().unwrap();
        assert_eq!(room_types["single"]["id"], "single");
        assert_eq!(room_types["double"]["id"], "double");
        assert_eq!(room_types["double"]["name"], "Double room");
    }

    #[test]
    fn test_room_types_field_is_injected() {
        let Some(FieldValue::Document(value)) = document().field(Field::RoomTypes) else {
            panic!("roomTypes should resolve to a document");
        };
        assert_eq!(value["single"]["id"], "single");
    }

    #[test]
    fn test_single_room_type() {
        assert_eq!(document().room_type("single").unwrap()["id"], "single");
        assert!(document().room_type("suite").is_none());
    }

    #[test]
    fn test_text_value_serializes_as_string() {
        let value = FieldValue::Text("0xabc".to_string());
        assert_eq!(serde_json::to_value(value).unwrap(), json!("0xabc"));
    }
}
