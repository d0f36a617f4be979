//! Hotel entity as stored in the index.

use crate::domain::entities::FieldValue;
use crate::domain::fields::Field;

/// A hotel record from the index.
///
/// Holds the index-sourced attributes plus the content pointer (`data_uri`)
/// leading to the hotel's description document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub address: String,
    pub manager: String,
    pub data_uri: String,
}

impl Hotel {
    /// Creates a new Hotel instance.
    pub fn new(
        address: impl Into<String>,
        manager: impl Into<String>,
        data_uri: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            manager: manager.into(),
            data_uri: data_uri.into(),
        }
    }

    /// Reads an index-sourced field. Returns `None` for description fields.
    pub fn index_value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Id => Some(FieldValue::Text(self.address.clone())),
            Field::Manager => Some(FieldValue::Text(self.manager.clone())),
            _ => None,
        }
    }
}
