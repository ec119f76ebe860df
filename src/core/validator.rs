//! Entity validation
//!
//! `validate` turns a raw JSON payload into a validated [`Entity`] or a list
//! of [`FieldViolation`]s. Every declared field is visited in declaration
//! order; within a field, rules run in order and the first failure wins, so
//! each failing field reports exactly one violation. The current time is an
//! explicit argument — the temporal rules never read the ambient clock.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::core::entity::{Entity, FieldMap};
use crate::core::error::FieldViolation;
use crate::core::field::FieldValue;
use crate::core::schema::ResourceSchema;

impl ResourceSchema {
    /// Validate a raw field mapping against this schema.
    ///
    /// On success the returned [`Entity`] is immutable and carries every
    /// declared field; no entity is produced on any failure. Fields present
    /// in the payload but not declared in the schema are ignored.
    pub fn validate(&self, raw: &Value, now: DateTime<Utc>) -> Result<Entity, Vec<FieldViolation>> {
        let Some(object) = raw.as_object() else {
            return Err(vec![FieldViolation {
                field: "body".to_string(),
                message: "expected a JSON object".to_string(),
            }]);
        };

        let mut fields = FieldMap::new();
        let mut violations = Vec::new();

        for decl in self.fields() {
            let Some(raw_value) = object.get(decl.name).filter(|v| !v.is_null()) else {
                violations.push(FieldViolation {
                    field: decl.name.to_string(),
                    message: format!("'{}' is required", decl.name),
                });
                continue;
            };

            let value = match decl.coerce(raw_value) {
                Ok(value) => value,
                Err(message) => {
                    violations.push(FieldViolation {
                        field: decl.name.to_string(),
                        message,
                    });
                    continue;
                }
            };

            if let Some(message) = decl
                .rules
                .iter()
                .find_map(|rule| rule.check(decl.name, &value, now).err())
            {
                violations.push(FieldViolation {
                    field: decl.name.to_string(),
                    message,
                });
                continue;
            }

            fields.insert(decl.name.to_string(), value);
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        // The builder guarantees the identity field is string-typed.
        let identity = match fields.get(self.identity_field()) {
            Some(FieldValue::String(s)) => s.clone(),
            _ => {
                return Err(vec![FieldViolation {
                    field: self.identity_field().to_string(),
                    message: format!("'{}' must be a string", self.identity_field()),
                }]);
            }
        };

        Ok(Entity::new(self.singular(), identity, fields))
    }
}
