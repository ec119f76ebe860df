//! Storage backends implementing the [`Repository`](crate::core::Repository) trait

pub mod in_memory;

pub use in_memory::InMemoryStore;
