//! # Registra
//!
//! A schema-driven framework for building validated CRUD services in Rust.
//!
//! Ten near-identical registry services (users, books, movies, tasks, events,
//! logins, minerals, clocks, missions, flights) are expressed as one generic
//! contract: a declarative [`ResourceSchema`](core::ResourceSchema) describing
//! fields and validation rules, and a [`Repository`](core::Repository) trait
//! performing identity-keyed CRUD. The HTTP layer is data-driven: a single set
//! of wildcard routes serves every registered resource.
//!
//! ## Features
//!
//! - **Declarative Schemas**: Field types, regex patterns, numeric ranges,
//!   enum token sets, and temporal rules declared as data
//! - **Whole-Body Validation**: Every field is checked and all violations are
//!   reported together, one per failing field
//! - **Identity-Keyed Storage**: Natural keys (ISBN, INN, serial numbers)
//!   with conflict detection, wholesale replacement, and path/body identity
//!   checks
//! - **Pluggable Repositories**: In-memory store included; any backend can
//!   implement the `Repository` trait
//! - **Data-Driven Routing**: Adding a resource is one schema table, not a
//!   new set of handlers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use registra::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_default_resources()
//!     .build_router();
//!
//! let listener = TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Entity, FieldDecl, FieldMap, FieldType, FieldValue, FieldViolation, RegistraError,
        RegistraResult, Repository, ResourceSchema, Rule, SchemaBuilder, StoredRecord,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ResourceEntry, ResourceRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, Query, State},
        routing::{delete, get, post, put},
    };
}
