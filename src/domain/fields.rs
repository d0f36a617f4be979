//! Field catalog: the supported hotel fields, where each one lives, and how
//! requested field lists are turned into a [`FieldSet`].

use std::collections::BTreeSet;
use std::fmt;

/// Field list used by `GET /hotels` when the client sends no `fields` parameter.
pub const DEFAULT_HOTELS_FIELDS: &str = "id,location,name";

/// Field list used by `GET /hotels/{address}` when the client sends no `fields` parameter.
pub const DEFAULT_HOTEL_FIELDS: &str =
    "id,location,name,description,contacts,address,currency,images,amenities,updatedAt";

/// Fields present in every response, whether requested or not.
pub const OBLIGATORY_FIELDS: &[Field] = &[Field::Id];

/// Requester-facing aliases and the canonical field they stand for.
const ALIASES: &[(&str, Field)] = &[("managerAddress", Field::Manager)];

/// Backing store a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Read directly from the hotel index record.
    Index,
    /// Read from the description document behind the content pointer.
    Description,
}

/// A canonical hotel field.
///
/// Variant order is the catalog order; [`FieldSet`] iterates in it, so the
/// `fields` part of a next link is stable regardless of request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Manager,
    Name,
    Description,
    Location,
    Contacts,
    Address,
    Timezone,
    Currency,
    Images,
    Amenities,
    UpdatedAt,
    RoomTypes,
    DefaultCancellationAmount,
    CancellationPolicies,
}

impl Field {
    /// Every valid field, in catalog order.
    pub const ALL: [Field; 15] = [
        Field::Id,
        Field::Manager,
        Field::Name,
        Field::Description,
        Field::Location,
        Field::Contacts,
        Field::Address,
        Field::Timezone,
        Field::Currency,
        Field::Images,
        Field::Amenities,
        Field::UpdatedAt,
        Field::RoomTypes,
        Field::DefaultCancellationAmount,
        Field::CancellationPolicies,
    ];

    /// Canonical name, as stored in the description document.
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Manager => "manager",
            Field::Name => "name",
            Field::Description => "description",
            Field::Location => "location",
            Field::Contacts => "contacts",
            Field::Address => "address",
            Field::Timezone => "timezone",
            Field::Currency => "currency",
            Field::Images => "images",
            Field::Amenities => "amenities",
            Field::UpdatedAt => "updatedAt",
            Field::RoomTypes => "roomTypes",
            Field::DefaultCancellationAmount => "defaultCancellationAmount",
            Field::CancellationPolicies => "cancellationPolicies",
        }
    }

    /// Name used for this field in API responses.
    pub fn response_name(self) -> &'static str {
        ALIASES
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(alias, _)| *alias)
            .unwrap_or_else(|| self.name())
    }

    pub fn source(self) -> FieldSource {
        match self {
            Field::Id | Field::Manager => FieldSource::Index,
            _ => FieldSource::Description,
        }
    }

    /// Looks up a field by its canonical name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a requester-supplied name to its canonical form.
///
/// Names without an alias pass through unchanged.
pub fn canonical_name(requested: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == requested)
        .map(|(_, field)| field.name())
        .unwrap_or(requested)
}

/// Request-scoped set of canonical fields to return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet(BTreeSet<Field>);

impl FieldSet {
    /// Computes `valid ∩ (obligatory ∪ mapped(requested))` from a comma-separated list.
    ///
    /// Unknown names are dropped without error.
    pub fn resolve(requested_csv: &str) -> Self {
        let mut fields: BTreeSet<Field> = OBLIGATORY_FIELDS.iter().copied().collect();
        fields.extend(
            requested_csv
                .split(',')
                .filter_map(|name| Field::from_name(canonical_name(name))),
        );
        Self(fields)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    /// Requested fields read from the index record.
    pub fn index_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.iter().filter(|f| f.source() == FieldSource::Index)
    }

    /// Requested fields read from the description document.
    pub fn description_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.iter().filter(|f| f.source() == FieldSource::Description)
    }

    pub fn needs_description(&self) -> bool {
        self.description_fields().next().is_some()
    }

    /// Canonical names joined with commas, in catalog order.
    pub fn to_csv(&self) -> String {
        self.iter().map(Field::name).collect::<Vec<_>>().join(",")
    }
}
