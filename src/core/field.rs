//! Dynamic field values
//!
//! Every resource field is stored as a [`FieldValue`], the typed counterpart
//! of the raw JSON a client sends. Coercion from raw JSON happens against the
//! declared [`crate::core::schema::FieldType`], so a value that reaches the
//! validator already has the shape its rules expect.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A polymorphic field value covering the primitive types resources declare
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a number, promoting integers to floats
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a timestamp if possible
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_number(), None);
    }

    #[test]
    fn test_field_value_integer() {
        let value = FieldValue::Integer(42);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_number(), Some(42.0));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_field_value_float() {
        let value = FieldValue::Float(7.5);
        assert_eq!(value.as_number(), Some(7.5));
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_field_value_timestamp() {
        let now = Utc::now();
        let value = FieldValue::Timestamp(now);
        assert_eq!(value.as_timestamp(), Some(now));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_value(FieldValue::String("hello".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("hello"));

        let json = serde_json::to_value(FieldValue::Integer(3)).unwrap();
        assert_eq!(json, serde_json::json!(3));
    }
}
