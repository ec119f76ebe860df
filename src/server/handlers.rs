//! HTTP handlers for the data-driven CRUD routes
//!
//! One handler per verb serves every registered resource; the first path
//! segment selects the schema and repository out of the registry. Success
//! bodies are `{"message": ..., "data": ...}`; failures go through
//! [`RegistraError`]'s `IntoResponse`.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::entity::FieldMap;
use crate::core::error::{RegistraError, RegistraResult};
use crate::server::registry::{ResourceEntry, ResourceRegistry};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ResourceRegistry>,
}

fn lookup<'a>(state: &'a AppState, resource: &str) -> RegistraResult<&'a ResourceEntry> {
    state
        .registry
        .get(resource)
        .ok_or_else(|| RegistraError::UnknownResource(resource.to_string()))
}

/// GET /{resource} — list records, optionally filtered by field equality
///
/// Query parameters naming declared fields become filters (logical AND).
/// Parameters naming undeclared fields are ignored. A value that cannot be
/// parsed as the field's type can never equal a stored value, so it short
/// circuits to an empty listing.
pub async fn list_records(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> RegistraResult<Json<Value>> {
    let entry = lookup(&state, &resource)?;

    let mut filters = FieldMap::new();
    let mut unmatchable = false;
    for (name, raw) in &params {
        if entry.schema.field(name).is_none() {
            continue;
        }
        match entry.schema.coerce_filter(name, raw) {
            Some(value) => {
                filters.insert(name.clone(), value);
            }
            None => {
                unmatchable = true;
                break;
            }
        }
    }

    let records = if unmatchable {
        Vec::new()
    } else {
        entry.repository.list(&filters).await?
    };

    Ok(Json(json!({
        "message": format!("found {} {}", records.len(), entry.schema.plural()),
        "data": records,
    })))
}

/// POST /{resource} — validate the body and create a record
pub async fn create_record(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> RegistraResult<impl IntoResponse> {
    let entry = lookup(&state, &resource)?;

    let entity = entry
        .schema
        .validate(&payload, Utc::now())
        .map_err(RegistraError::Validation)?;
    let record = entry.repository.create(entity).await?;

    tracing::info!(resource = %entry.schema.singular(), identity = %record.identity(), "created");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} created", entry.schema.singular()),
            "data": record,
        })),
    ))
}

/// PUT /{resource}/{id} — validate the body and replace the record wholesale
///
/// The body is validated before the path/body identity comparison, so a
/// malformed body reports its violations rather than a mismatch.
pub async fn update_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> RegistraResult<Json<Value>> {
    let entry = lookup(&state, &resource)?;

    let entity = entry
        .schema
        .validate(&payload, Utc::now())
        .map_err(RegistraError::Validation)?;
    let record = entry.repository.update(&id, entity).await?;

    tracing::info!(resource = %entry.schema.singular(), identity = %id, "updated");
    Ok(Json(json!({
        "message": format!("{} updated", entry.schema.singular()),
        "data": record,
    })))
}

/// DELETE /{resource}/{id} — remove the record, echoing its identity
pub async fn delete_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> RegistraResult<Json<Value>> {
    let entry = lookup(&state, &resource)?;

    let identity = entry.repository.delete(&id).await?;

    tracing::info!(resource = %entry.schema.singular(), identity = %identity, "deleted");
    Ok(Json(json!({
        "message": format!("{} deleted", entry.schema.singular()),
        "data": { (entry.schema.identity_field()): identity },
    })))
}

/// GET /health — liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "registra",
    }))
}
