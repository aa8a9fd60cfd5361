//! Store-backed form validation: composes the synchronous checks from
//! `formwork-core` with global uniqueness queries against a
//! `FormStore`, behind a single accept/reject entry point.

mod extension;
mod global;
mod validator;

pub use extension::{NoopSearchExtension, SearchExtension};
pub use global::{check_global_unique, ExistenceCheck};
pub use validator::FormValidator;

use formwork_core::{FormRecord, ValidationError};
use formwork_storage::FormStore;

/// Validate a candidate record against a store with default policy
/// (no search extension, English messages).
pub async fn validate_form<S: FormStore>(
    store: S,
    record: &FormRecord,
) -> Result<(), ValidationError> {
    FormValidator::new(store).validate(record).await
}
