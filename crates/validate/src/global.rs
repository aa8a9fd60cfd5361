use formwork_core::FormRecord;
use formwork_storage::{FormFilter, FormStore, StoreError, UniqueField};

use crate::extension::SearchExtension;

/// Outcome of one global-uniqueness existence query.
///
/// A store fault is its own variant, not a boolean: the fail-closed
/// mapping to a rejection is an explicit branch in the orchestrator,
/// never an accidental fallthrough.
#[derive(Debug)]
pub enum ExistenceCheck {
    /// No live record holds this value.
    Unique,
    /// Another live record already holds this value.
    Duplicate,
    /// The query itself failed; validation treats this as invalid.
    StoreFailed(StoreError),
}

/// Run one global-uniqueness existence query for `field` on the
/// candidate record.
///
/// Builds the base filter `{deleted: {eq: null}, field == value}`,
/// adds the identity exclusion on update, hands the filter to the
/// search extension exactly once, then executes a single `find_one`.
pub async fn check_global_unique<S: FormStore>(
    store: &S,
    extension: &dyn SearchExtension,
    record: &FormRecord,
    field: UniqueField,
) -> ExistenceCheck {
    let value = match field {
        UniqueField::Name => record.name.as_str(),
        UniqueField::Path => record.path.as_str(),
    };

    let mut filter = FormFilter::unique(field, value);
    if let Some(id) = &record.id {
        filter = filter.excluding_id(id.clone());
    }
    let filter = extension.alter_search(filter, record, value);

    match store.find_one(&filter).await {
        Ok(Some(_)) => ExistenceCheck::Duplicate,
        Ok(None) => ExistenceCheck::Unique,
        Err(err) => ExistenceCheck::StoreFailed(err),
    }
}
