//! Contract tests exercising a real schema end to end against a repository:
//! validate the raw body, persist the entity, and observe the stored record.

use chrono::{Duration, Utc};
use registra::core::{Entity, FieldMap, FieldValue, RegistraError, Repository};
use registra::resources;
use registra::storage::InMemoryStore;
use serde_json::{Value, json};

fn flight_body(flight_id: &str, cargo_type: &str, weight: f64) -> Value {
    json!({
        "flight_id": flight_id,
        "drone_id": "DRN-0042",
        "departure_point": "Warehouse 7",
        "destination": "Clinic 3",
        "departure_time": (Utc::now() + Duration::hours(6)).to_rfc3339(),
        "cargo_type": cargo_type,
        "cargo_weight_kg": weight,
        "max_altitude_m": 120,
    })
}

fn flight(flight_id: &str, cargo_type: &str, weight: f64) -> Entity {
    resources::flight_schema()
        .validate(&flight_body(flight_id, cargo_type, weight), Utc::now())
        .expect("fixture flight should validate")
}

#[tokio::test]
async fn test_validated_entity_round_trips_through_store() {
    let store = InMemoryStore::new("flight");

    let record = store
        .create(flight("FL-00001-A", "MEDICAL", 12.5))
        .await
        .unwrap();
    assert_eq!(record.identity(), "FL-00001-A");
    assert_eq!(
        record.field("cargo_type"),
        Some(&FieldValue::String("MEDICAL".to_string()))
    );
    assert_eq!(record.field("cargo_weight_kg"), Some(&FieldValue::Float(12.5)));

    // The serialized record is flat: fields only, no wrapper.
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["flight_id"], "FL-00001-A");
    assert_eq!(value["max_altitude_m"], 120);
    assert!(value.get("fields").is_none());
}

#[tokio::test]
async fn test_invalid_body_never_reaches_the_store() {
    let store = InMemoryStore::new("flight");
    let schema = resources::flight_schema();

    // Over the 50 kg cargo limit.
    let result = schema.validate(&flight_body("FL-00001-A", "MEDICAL", 75.0), Utc::now());
    let violations = result.unwrap_err();
    assert_eq!(violations[0].field, "cargo_weight_kg");

    assert!(store.list(&FieldMap::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_typed_filters_distinguish_float_values() {
    let store = InMemoryStore::new("flight");
    store
        .create(flight("FL-00001-A", "MEDICAL", 12.5))
        .await
        .unwrap();
    store
        .create(flight("FL-00002-B", "FOOD", 30.0))
        .await
        .unwrap();

    let mut filters = FieldMap::new();
    filters.insert(
        "cargo_weight_kg".to_string(),
        FieldValue::Float(12.5),
    );
    let matched = store.list(&filters).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].identity(), "FL-00001-A");
}

#[tokio::test]
async fn test_full_lifecycle_per_identity() {
    let store = InMemoryStore::new("flight");

    // Absent: update and delete fail, create succeeds.
    assert!(matches!(
        store
            .update("FL-00001-A", flight("FL-00001-A", "MEDICAL", 12.5))
            .await,
        Err(RegistraError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete("FL-00001-A").await,
        Err(RegistraError::NotFound { .. })
    ));
    store
        .create(flight("FL-00001-A", "MEDICAL", 12.5))
        .await
        .unwrap();

    // Present: create fails, update replaces.
    assert!(matches!(
        store.create(flight("FL-00001-A", "FOOD", 5.0)).await,
        Err(RegistraError::Conflict { .. })
    ));
    let replaced = store
        .update("FL-00001-A", flight("FL-00001-A", "DOCUMENTS", 1.0))
        .await
        .unwrap();
    assert_eq!(
        replaced.field("cargo_type"),
        Some(&FieldValue::String("DOCUMENTS".to_string()))
    );

    // Delete returns to Absent and frees the identity.
    assert_eq!(store.delete("FL-00001-A").await.unwrap(), "FL-00001-A");
    store
        .create(flight("FL-00001-A", "MEDICAL", 12.5))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mismatch_wins_over_not_found_and_mutates_nothing() {
    let store = InMemoryStore::new("flight");
    store
        .create(flight("FL-00001-A", "MEDICAL", 12.5))
        .await
        .unwrap();

    let err = store
        .update("FL-00001-A", flight("FL-00002-B", "FOOD", 5.0))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistraError::IdentityMismatch { .. }));

    let all = store.list(&FieldMap::new()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(
        all[0].field("cargo_type"),
        Some(&FieldValue::String("MEDICAL".to_string()))
    );
}
