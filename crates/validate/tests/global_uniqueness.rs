//! Store-backed validation scenarios: global uniqueness, identity
//! exclusion on update, soft-delete reuse, fail-closed store faults,
//! and the exactly-once extension contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formwork_core::{FormRecord, ValidationErrorKind};
use formwork_storage::{FormFilter, FormStore, MemoryFormStore, StoreError, UniqueField};
use formwork_validate::{validate_form, FormValidator, SearchExtension};

fn record(json: serde_json::Value) -> FormRecord {
    let mut record: FormRecord = serde_json::from_value(json).unwrap();
    record.normalize();
    record
}

fn intake(id: Option<&str>) -> FormRecord {
    let mut r = record(serde_json::json!({
        "title": "Intake",
        "name": "intake",
        "path": "intake",
        "components": [
            {"type": "textfield", "key": "firstName", "input": true}
        ]
    }));
    r.id = id.map(str::to_string);
    r
}

fn stored(id: &str, name: &str, path: &str, deleted: Option<i64>) -> FormRecord {
    let mut r = record(serde_json::json!({
        "_id": id,
        "title": name,
        "name": name,
        "path": path
    }));
    r.deleted = deleted;
    r
}

#[tokio::test]
async fn create_against_empty_store_is_accepted() {
    let store = MemoryFormStore::empty();
    assert!(validate_form(store, &intake(None)).await.is_ok());
}

#[tokio::test]
async fn duplicate_name_in_a_live_record_rejects_the_create() {
    let store = MemoryFormStore::new(vec![stored("1", "intake", "other", None)]);
    let err = validate_form(store, &intake(None)).await.unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(err.kind, ValidationErrorKind::DuplicateGlobal);
}

#[tokio::test]
async fn duplicate_path_is_reported_after_name_passes() {
    let store = MemoryFormStore::new(vec![stored("1", "other", "intake", None)]);
    let err = validate_form(store, &intake(None)).await.unwrap_err();
    assert_eq!(err.field, "path");
    assert_eq!(err.kind, ValidationErrorKind::DuplicateGlobal);
}

#[tokio::test]
async fn updating_a_record_does_not_conflict_with_itself() {
    let store = MemoryFormStore::new(vec![stored("1", "intake", "intake", None)]);
    assert!(validate_form(store, &intake(Some("1"))).await.is_ok());
}

#[tokio::test]
async fn a_soft_deleted_record_does_not_block_name_reuse() {
    let store = MemoryFormStore::new(vec![stored("1", "intake", "intake", Some(1_700_000_000))]);
    assert!(validate_form(store, &intake(None)).await.is_ok());
}

#[tokio::test]
async fn local_failures_short_circuit_before_any_store_query() {
    // A failing store proves no query ran: the duplicate-key rejection
    // must win.
    let store = FailingStore::default();
    let queries = store.queries.clone();
    let duplicate_keys = record(serde_json::json!({
        "title": "Intake",
        "name": "intake",
        "path": "intake",
        "components": [
            {"type": "textfield", "key": "firstName", "input": true},
            {"type": "textfield", "key": "firstName", "input": true}
        ]
    }));

    let err = validate_form(store, &duplicate_keys).await.unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::DuplicateLocal);
    assert_eq!(queries.load(Ordering::SeqCst), 0);
}

// ──────────────────────────────────────────────
// Fail closed on store faults
// ──────────────────────────────────────────────

#[derive(Default)]
struct FailingStore {
    queries: Arc<AtomicUsize>,
}

#[async_trait]
impl FormStore for FailingStore {
    async fn find_one(&self, _filter: &FormFilter) -> Result<Option<FormRecord>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_fault_rejects_the_record() {
    let err = validate_form(FailingStore::default(), &intake(None))
        .await
        .unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(err.kind, ValidationErrorKind::StoreQuery);
}

// ──────────────────────────────────────────────
// Extension contract
// ──────────────────────────────────────────────

#[derive(Default)]
struct RecordingExtension {
    calls: Mutex<Vec<FormFilter>>,
}

impl SearchExtension for RecordingExtension {
    fn alter_search(&self, filter: FormFilter, _record: &FormRecord, _value: &str) -> FormFilter {
        self.calls.lock().unwrap().push(filter.clone());
        filter
    }
}

#[tokio::test]
async fn extension_sees_the_unmodified_base_filter_once_per_check() {
    let extension = Arc::new(RecordingExtension::default());
    let validator = FormValidator::new(MemoryFormStore::empty())
        .with_extension(extension.clone() as Arc<dyn SearchExtension>);

    validator.validate(&intake(Some("7"))).await.unwrap();

    let calls = extension.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        FormFilter::unique(UniqueField::Name, "intake").excluding_id("7")
    );
    assert_eq!(
        calls[1],
        FormFilter::unique(UniqueField::Path, "intake").excluding_id("7")
    );
}

struct ScopingExtension;

impl SearchExtension for ScopingExtension {
    fn alter_search(&self, mut filter: FormFilter, _record: &FormRecord, _value: &str) -> FormFilter {
        filter
            .extra
            .insert("title".to_string(), serde_json::json!("Other project"));
        filter
    }
}

#[tokio::test]
async fn a_scoping_extension_can_narrow_the_query_past_a_collision() {
    // The stored record collides on name, but the extension scopes the
    // query to a different project, so the collision is out of scope.
    let store = MemoryFormStore::new(vec![stored("1", "intake", "intake", None)]);
    let validator = FormValidator::new(store).with_extension(Arc::new(ScopingExtension));
    assert!(validator.validate(&intake(None)).await.is_ok());
}
