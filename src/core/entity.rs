//! Validated entities and stored records
//!
//! An [`Entity`] is the immutable, validated in-memory form of a resource
//! instance: it only ever comes out of a successful validation pass. A
//! [`StoredRecord`] is its persisted twin, addressed by the identity value.
//! An update replaces a stored record's fields wholesale with a new entity's
//! fields; records are never merged or partially written.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::field::FieldValue;

/// Field name to value mapping, preserving schema declaration order
pub type FieldMap = IndexMap<String, FieldValue>;

/// A validated resource instance
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    resource: String,
    identity: String,
    fields: FieldMap,
}

impl Entity {
    /// Assemble a validated entity. Only the validator constructs these.
    pub(crate) fn new(resource: &str, identity: String, fields: FieldMap) -> Self {
        Self {
            resource: resource.to_string(),
            identity,
            fields,
        }
    }

    /// The singular resource name this entity belongs to
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The value of the identity field
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// All validated field values, in declaration order
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// The durable, identity-addressed form of an entity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoredRecord {
    #[serde(skip)]
    identity: String,
    #[serde(flatten)]
    fields: FieldMap,
}

impl StoredRecord {
    /// The identity value this record is addressed by
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// All persisted field values
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Look up one field value by name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// True when every filter entry equals the corresponding field value
    pub fn matches(&self, filters: &FieldMap) -> bool {
        filters
            .iter()
            .all(|(name, expected)| self.fields.get(name) == Some(expected))
    }
}

impl From<Entity> for StoredRecord {
    fn from(entity: Entity) -> Self {
        Self {
            identity: entity.identity,
            fields: entity.fields,
        }
    }
}
