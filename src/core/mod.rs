//! Core module containing the validator, repository seam, and shared types

pub mod entity;
pub mod error;
pub mod field;
pub mod repository;
pub mod rules;
pub mod schema;
pub mod validator;

pub use entity::{Entity, FieldMap, StoredRecord};
pub use error::{FieldViolation, RegistraError, RegistraResult};
pub use field::FieldValue;
pub use repository::Repository;
pub use rules::Rule;
pub use schema::{FieldDecl, FieldType, ResourceSchema, SchemaBuilder};
