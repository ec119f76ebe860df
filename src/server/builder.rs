//! ServerBuilder for fluent API to build HTTP servers

use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};
use super::registry::ResourceRegistry;
use crate::core::repository::Repository;
use crate::core::schema::ResourceSchema;
use crate::resources;
use crate::storage::InMemoryStore;

/// Builder for a server with data-driven CRUD routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_default_resources()
///     .build_router();
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    registry: ResourceRegistry,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource backed by a fresh in-memory store
    pub fn with_resource(mut self, schema: ResourceSchema) -> Self {
        let store = InMemoryStore::new(schema.singular());
        self.registry.register(schema, Arc::new(store));
        self
    }

    /// Register a resource backed by the given repository
    pub fn with_repository(
        mut self,
        schema: ResourceSchema,
        repository: Arc<dyn Repository>,
    ) -> Self {
        self.registry.register(schema, repository);
        self
    }

    /// Register all built-in resource schemas with in-memory stores
    pub fn with_default_resources(mut self) -> Self {
        for schema in resources::all() {
            let store = InMemoryStore::new(schema.singular());
            self.registry.register(schema, Arc::new(store));
        }
        self
    }

    /// Build the final router
    ///
    /// Two wildcard route pairs cover every registered resource:
    /// `/{resource}` (GET list, POST create) and `/{resource}/{id}`
    /// (PUT replace, DELETE remove), plus `/health`.
    pub fn build_router(self) -> Router {
        let state = AppState {
            registry: Arc::new(self.registry),
        };

        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/{resource}",
                get(handlers::list_records).post(handlers::create_record),
            )
            .route(
                "/{resource}/{id}",
                put(handlers::update_record).delete(handlers::delete_record),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds the address, serves requests, and handles SIGTERM and Ctrl+C.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let app = self.build_router();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ServerBuilder::new();
        assert_eq!(builder.registry.resources().count(), 0);
    }

    #[test]
    fn test_with_resource_registers_store() {
        let builder = ServerBuilder::new().with_resource(resources::user_schema());
        assert!(builder.registry.get("users").is_some());
    }

    #[test]
    fn test_with_default_resources_registers_all_ten() {
        let builder = ServerBuilder::new().with_default_resources();
        assert_eq!(builder.registry.resources().count(), 10);
    }

    #[test]
    fn test_build_produces_router() {
        let router = ServerBuilder::new()
            .with_default_resources()
            .build_router();

        // We cannot inspect the Router deeply, but it should not panic
        let _ = router;
    }
}
