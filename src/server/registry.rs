//! Registry mapping URL path segments to resource schemas and repositories

use indexmap::IndexMap;
use std::sync::Arc;

use crate::core::repository::Repository;
use crate::core::schema::ResourceSchema;

/// A registered resource: its schema plus the repository backing it
#[derive(Clone)]
pub struct ResourceEntry {
    pub schema: Arc<ResourceSchema>,
    pub repository: Arc<dyn Repository>,
}

/// Registry of resources keyed by plural path segment
///
/// Routing is data-driven: one wildcard route pair serves every registered
/// resource, and a lookup miss means the path names a resource this server
/// does not know.
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    entries: IndexMap<String, ResourceEntry>,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under its schema's plural segment.
    ///
    /// Registering the same plural twice replaces the earlier entry.
    pub fn register(&mut self, schema: ResourceSchema, repository: Arc<dyn Repository>) {
        self.entries.insert(
            schema.plural().to_string(),
            ResourceEntry {
                schema: Arc::new(schema),
                repository,
            },
        );
    }

    /// Look up a resource by plural path segment
    pub fn get(&self, plural: &str) -> Option<&ResourceEntry> {
        self.entries.get(plural)
    }

    /// Plural segments of all registered resources, in registration order
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources;
    use crate::storage::InMemoryStore;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ResourceRegistry::new();
        let schema = resources::user_schema();
        registry.register(schema, Arc::new(InMemoryStore::new("user")));

        let entry = registry.get("users").expect("users should be registered");
        assert_eq!(entry.schema.singular(), "user");
        assert!(registry.get("user").is_none());
        assert!(registry.get("widgets").is_none());
    }

    #[test]
    fn test_resources_keeps_registration_order() {
        let mut registry = ResourceRegistry::new();
        registry.register(
            resources::book_schema(),
            Arc::new(InMemoryStore::new("book")),
        );
        registry.register(
            resources::user_schema(),
            Arc::new(InMemoryStore::new("user")),
        );

        let plurals: Vec<_> = registry.resources().collect();
        assert_eq!(plurals, vec!["books", "users"]);
    }
}
