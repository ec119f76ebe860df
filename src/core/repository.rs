//! Repository trait for identity-keyed CRUD
//!
//! Implementations perform CRUD against a concrete store for one resource
//! type. The framework is agnostic to the underlying storage mechanism; each
//! resource type gets its own repository instance and repositories for
//! different resource types are fully independent.
//!
//! The state machine per identity value is
//! `Absent → create → Present → update → Present → delete → Absent`;
//! any call attempting an invalid transition yields the corresponding
//! [`Conflict`](crate::core::error::RegistraError::Conflict) or
//! [`NotFound`](crate::core::error::RegistraError::NotFound) outcome and
//! leaves the store unmodified.

use async_trait::async_trait;

use crate::core::entity::{Entity, FieldMap, StoredRecord};
use crate::core::error::RegistraResult;

/// CRUD operations over stored records of one resource type
#[async_trait]
pub trait Repository: Send + Sync {
    /// Return all records where every supplied filter field equals the given
    /// value (logical AND). An empty filter set returns all records; ordering
    /// follows the underlying store.
    async fn list(&self, filters: &FieldMap) -> RegistraResult<Vec<StoredRecord>>;

    /// Persist a new record. Returns `Conflict` without mutating the store if
    /// a record already exists under the entity's identity.
    async fn create(&self, entity: Entity) -> RegistraResult<StoredRecord>;

    /// Replace the record under `identity` wholesale with the entity's
    /// fields. Returns `IdentityMismatch` when the out-of-band identity
    /// disagrees with the entity's own, and `NotFound` when no record exists;
    /// neither touches the store.
    async fn update(&self, identity: &str, entity: Entity) -> RegistraResult<StoredRecord>;

    /// Remove the record under `identity`, returning the identity as
    /// confirmation, or `NotFound` when no record exists.
    async fn delete(&self, identity: &str) -> RegistraResult<String>;
}
