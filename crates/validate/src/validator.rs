use std::sync::Arc;

use formwork_core::{
    check_record, FormRecord, MessageCatalog, ValidationError, ValidationErrorKind,
};
use formwork_storage::{FormStore, UniqueField};

use crate::extension::{NoopSearchExtension, SearchExtension};
use crate::global::{check_global_unique, ExistenceCheck};

/// The validation orchestrator: synchronous checks first, then the two
/// global-uniqueness queries, name before path. First failure
/// short-circuits with a field-scoped error.
///
/// Owns no long-lived state beyond its collaborators; each `validate`
/// call is a pure function of the candidate record plus read-only
/// store queries.
pub struct FormValidator<S: FormStore> {
    store: S,
    extension: Arc<dyn SearchExtension>,
    messages: MessageCatalog,
}

impl<S: FormStore> FormValidator<S> {
    pub fn new(store: S) -> Self {
        FormValidator {
            store,
            extension: Arc::new(NoopSearchExtension),
            messages: MessageCatalog::default(),
        }
    }

    pub fn with_extension(mut self, extension: Arc<dyn SearchExtension>) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Validate a candidate record for create or update.
    ///
    /// Order: required fields → name/path format → reserved path →
    /// component key/shortcut format → local uniqueness of keys, input
    /// paths, shortcuts → global uniqueness of name → global
    /// uniqueness of path. The two global checks run sequentially so
    /// the first-failure outcome stays deterministic.
    pub async fn validate(&self, record: &FormRecord) -> Result<(), ValidationError> {
        check_record(record, &self.messages)?;
        self.check_global(record, UniqueField::Name).await?;
        self.check_global(record, UniqueField::Path).await?;
        Ok(())
    }

    async fn check_global(
        &self,
        record: &FormRecord,
        field: UniqueField,
    ) -> Result<(), ValidationError> {
        match check_global_unique(&self.store, self.extension.as_ref(), record, field).await {
            ExistenceCheck::Unique => Ok(()),
            ExistenceCheck::Duplicate => Err(ValidationError::new(
                field.as_str(),
                ValidationErrorKind::DuplicateGlobal,
                self.messages
                    .render(ValidationErrorKind::DuplicateGlobal, field.as_str()),
            )),
            ExistenceCheck::StoreFailed(err) => {
                // Fail closed: a store fault rejects the record and is
                // surfaced to operators, never treated as unique.
                tracing::warn!(
                    field = field.as_str(),
                    error = %err,
                    "uniqueness query failed; rejecting record"
                );
                Err(ValidationError::new(
                    field.as_str(),
                    ValidationErrorKind::StoreQuery,
                    self.messages
                        .render(ValidationErrorKind::StoreQuery, field.as_str()),
                ))
            }
        }
    }
}
