//! HTTP server: resource registry, handlers, and the fluent builder

pub mod builder;
pub mod handlers;
pub mod registry;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use registry::{ResourceEntry, ResourceRegistry};
