use async_trait::async_trait;
use formwork_core::FormRecord;

use crate::error::StoreError;
use crate::filter::FormFilter;

/// The query interface the validator consumes from a form storage
/// backend.
///
/// `find_one` is a single "does any record match" existence query; the
/// validator never mutates the store. A backend honors the full filter:
/// `exclude_deleted` drops soft-deleted records, `field == value` is an
/// exact match against the normalized field, `exclude_id` drops the
/// record being updated, and every `extra` entry is a top-level
/// equality criterion against the serialized record.
///
/// Implementations must be `Send + Sync + 'static` so validators can be
/// shared across async task boundaries.
#[async_trait]
pub trait FormStore: Send + Sync + 'static {
    /// Return the first record matching the filter, or `None`.
    async fn find_one(&self, filter: &FormFilter) -> Result<Option<FormRecord>, StoreError>;
}
