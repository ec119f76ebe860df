//! In-memory implementation of Repository for testing and development
//!
//! Uses `RwLock` for thread-safe access. Uniqueness on the identity value is
//! enforced under a single write lock, so two concurrent creates for the
//! same identity serialize to exactly one success and one `Conflict`. Lock
//! poisoning surfaces as `StoreUnavailable` rather than a panic.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::entity::{Entity, FieldMap, StoredRecord};
use crate::core::error::{RegistraError, RegistraResult};
use crate::core::repository::Repository;

/// In-memory repository for one resource type
#[derive(Clone)]
pub struct InMemoryStore {
    resource: String,
    records: Arc<RwLock<HashMap<String, StoredRecord>>>,
}

impl InMemoryStore {
    /// Create an empty store for the given resource type
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn unavailable(reason: impl std::fmt::Display) -> RegistraError {
        RegistraError::StoreUnavailable(format!("failed to acquire lock: {}", reason))
    }
}

#[async_trait]
impl Repository for InMemoryStore {
    async fn list(&self, filters: &FieldMap) -> RegistraResult<Vec<StoredRecord>> {
        let records = self.records.read().map_err(Self::unavailable)?;

        Ok(records
            .values()
            .filter(|record| record.matches(filters))
            .cloned()
            .collect())
    }

    async fn create(&self, entity: Entity) -> RegistraResult<StoredRecord> {
        let mut records = self.records.write().map_err(Self::unavailable)?;

        if records.contains_key(entity.identity()) {
            return Err(RegistraError::Conflict {
                resource: self.resource.clone(),
                identity: entity.identity().to_string(),
            });
        }

        let record = StoredRecord::from(entity);
        records.insert(record.identity().to_string(), record.clone());
        tracing::debug!(resource = %self.resource, identity = %record.identity(), "record created");

        Ok(record)
    }

    async fn update(&self, identity: &str, entity: Entity) -> RegistraResult<StoredRecord> {
        if identity != entity.identity() {
            return Err(RegistraError::IdentityMismatch {
                path: identity.to_string(),
                body: entity.identity().to_string(),
            });
        }

        let mut records = self.records.write().map_err(Self::unavailable)?;

        if !records.contains_key(identity) {
            return Err(RegistraError::NotFound {
                resource: self.resource.clone(),
                identity: identity.to_string(),
            });
        }

        let record = StoredRecord::from(entity);
        records.insert(identity.to_string(), record.clone());
        tracing::debug!(resource = %self.resource, identity, "record replaced");

        Ok(record)
    }

    async fn delete(&self, identity: &str) -> RegistraResult<String> {
        let mut records = self.records.write().map_err(Self::unavailable)?;

        if records.remove(identity).is_none() {
            return Err(RegistraError::NotFound {
                resource: self.resource.clone(),
                identity: identity.to_string(),
            });
        }
        tracing::debug!(resource = %self.resource, identity, "record deleted");

        Ok(identity.to_string())
    }
}
