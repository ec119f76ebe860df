//! Resource schemas
//!
//! A [`ResourceSchema`] is the static description of one resource type: an
//! ordered set of field declarations, exactly one of which is the identity
//! field (the primary key). Schemas are built once at process start through
//! [`SchemaBuilder`] and are immutable afterwards; all regex rules are
//! compiled at construction time.

use serde_json::Value;

use crate::core::field::FieldValue;
use crate::core::rules::Rule;

/// The primitive type a field is declared with.
///
/// Coercion from raw JSON happens against this type; `Enum` fields coerce
/// like strings, with token membership enforced by a [`Rule::OneOf`] in the
/// field's rule list.
#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Timestamp,
    Enum(&'static [&'static str]),
}

/// One field declaration: name, primitive type, and its ordered rule list
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: &'static str,
    pub field_type: FieldType,
    pub rules: Vec<Rule>,
}

impl FieldDecl {
    /// Convert a raw JSON value into the declared field type.
    ///
    /// All fields in this system are non-null, so `null` is rejected here
    /// alongside shape mismatches.
    pub fn coerce(&self, raw: &Value) -> Result<FieldValue, String> {
        match &self.field_type {
            FieldType::String | FieldType::Enum(_) => raw
                .as_str()
                .map(|s| FieldValue::String(s.to_string()))
                .ok_or_else(|| format!("'{}' must be a string", self.name)),
            FieldType::Integer => raw
                .as_i64()
                .map(FieldValue::Integer)
                .ok_or_else(|| format!("'{}' must be an integer", self.name)),
            FieldType::Float => raw
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| format!("'{}' must be a number", self.name)),
            FieldType::Timestamp => raw
                .as_str()
                .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
                .map(|t| FieldValue::Timestamp(t.with_timezone(&chrono::Utc)))
                .ok_or_else(|| format!("'{}' must be an RFC 3339 timestamp", self.name)),
        }
    }
}

/// Static schema for one resource type
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    singular: &'static str,
    plural: &'static str,
    identity: &'static str,
    fields: Vec<FieldDecl>,
}

impl ResourceSchema {
    /// Start building a schema for a resource type
    pub fn builder(singular: &'static str, plural: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            singular,
            plural,
            identity: None,
            fields: Vec::new(),
        }
    }

    /// The singular resource name (e.g. "user")
    pub fn singular(&self) -> &'static str {
        self.singular
    }

    /// The plural resource name used in URLs (e.g. "users")
    pub fn plural(&self) -> &'static str {
        self.plural
    }

    /// The name of the identity field
    pub fn identity_field(&self) -> &'static str {
        self.identity
    }

    /// All field declarations, in declaration order
    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Look up a field declaration by name
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Coerce a raw query-string value for use as an equality filter.
    ///
    /// Returns `None` when the text cannot be parsed as the declared type;
    /// such a filter can never match a stored value.
    pub fn coerce_filter(&self, field: &str, raw: &str) -> Option<FieldValue> {
        match &self.field(field)?.field_type {
            FieldType::String | FieldType::Enum(_) => Some(FieldValue::String(raw.to_string())),
            FieldType::Integer => raw.parse::<i64>().ok().map(FieldValue::Integer),
            FieldType::Float => raw.parse::<f64>().ok().map(FieldValue::Float),
            FieldType::Timestamp => chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|t| FieldValue::Timestamp(t.with_timezone(&chrono::Utc))),
        }
    }
}

/// Builder for [`ResourceSchema`]
///
/// The identity field must be declared exactly once and must be a string
/// field; both are programming errors caught when the schema table runs at
/// startup.
pub struct SchemaBuilder {
    singular: &'static str,
    plural: &'static str,
    identity: Option<&'static str>,
    fields: Vec<FieldDecl>,
}

impl SchemaBuilder {
    /// Declare the identity field (always string-typed in this system)
    pub fn identity(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        assert!(
            self.identity.is_none(),
            "schema '{}' declares two identity fields",
            self.singular
        );
        self.identity = Some(name);
        self.fields.push(FieldDecl {
            name,
            field_type: FieldType::String,
            rules,
        });
        self
    }

    /// Declare a non-identity field
    pub fn field(mut self, name: &'static str, field_type: FieldType, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldDecl {
            name,
            field_type,
            rules,
        });
        self
    }

    /// Declare an enumerated field; token membership becomes the field's rule
    pub fn enum_field(self, name: &'static str, tokens: &'static [&'static str]) -> Self {
        self.field(name, FieldType::Enum(tokens), vec![Rule::OneOf(tokens)])
    }

    pub fn build(self) -> ResourceSchema {
        let identity = self
            .identity
            .unwrap_or_else(|| panic!("schema '{}' has no identity field", self.singular));
        ResourceSchema {
            singular: self.singular,
            plural: self.plural,
            identity,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> ResourceSchema {
        ResourceSchema::builder("widget", "widgets")
            .identity("code", vec![Rule::matches(r"^[A-Z]{3}$")])
            .field("count", FieldType::Integer, vec![Rule::Positive])
            .field("weight", FieldType::Float, vec![])
            .field("seen_at", FieldType::Timestamp, vec![])
            .enum_field("color", &["RED", "BLUE"])
            .build()
    }

    #[test]
    fn test_builder_records_identity_and_order() {
        let schema = sample_schema();
        assert_eq!(schema.identity_field(), "code");
        assert_eq!(schema.plural(), "widgets");
        let names: Vec<_> = schema.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["code", "count", "weight", "seen_at", "color"]);
    }

    #[test]
    #[should_panic(expected = "no identity field")]
    fn test_builder_requires_identity() {
        ResourceSchema::builder("widget", "widgets")
            .field("count", FieldType::Integer, vec![])
            .build();
    }

    #[test]
    fn test_coerce_string_field() {
        let schema = sample_schema();
        let decl = schema.field("code").unwrap();
        assert_eq!(
            decl.coerce(&json!("ABC")).unwrap(),
            FieldValue::String("ABC".to_string())
        );
        assert!(decl.coerce(&json!(12)).is_err());
        assert!(decl.coerce(&json!(null)).is_err());
    }

    #[test]
    fn test_coerce_integer_rejects_fraction() {
        let schema = sample_schema();
        let decl = schema.field("count").unwrap();
        assert_eq!(decl.coerce(&json!(7)).unwrap(), FieldValue::Integer(7));
        assert!(decl.coerce(&json!(7.5)).is_err());
        assert!(decl.coerce(&json!("7")).is_err());
    }

    #[test]
    fn test_coerce_float_accepts_integer_json() {
        let schema = sample_schema();
        let decl = schema.field("weight").unwrap();
        assert_eq!(decl.coerce(&json!(3)).unwrap(), FieldValue::Float(3.0));
        assert_eq!(decl.coerce(&json!(3.25)).unwrap(), FieldValue::Float(3.25));
    }

    #[test]
    fn test_coerce_timestamp() {
        let schema = sample_schema();
        let decl = schema.field("seen_at").unwrap();
        assert!(decl.coerce(&json!("2025-03-20T10:00:00Z")).is_ok());
        assert!(decl.coerce(&json!("not-a-date")).is_err());
    }

    #[test]
    fn test_coerce_filter_per_type() {
        let schema = sample_schema();
        assert_eq!(
            schema.coerce_filter("count", "5"),
            Some(FieldValue::Integer(5))
        );
        assert_eq!(schema.coerce_filter("count", "five"), None);
        assert_eq!(
            schema.coerce_filter("color", "RED"),
            Some(FieldValue::String("RED".to_string()))
        );
        assert_eq!(schema.coerce_filter("missing", "x"), None);
    }
}
