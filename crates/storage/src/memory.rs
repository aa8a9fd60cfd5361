use async_trait::async_trait;
use formwork_core::FormRecord;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::filter::{FormFilter, UniqueField};
use crate::traits::FormStore;

/// An in-memory `FormStore` backed by a `Vec` under an async lock.
///
/// The reference implementation shipped beside the trait: used by
/// tests and by the CLI's registry-file mode. Matching follows the
/// documented filter semantics exactly, including `extra` equality
/// against the serialized record.
#[derive(Default)]
pub struct MemoryFormStore {
    records: RwLock<Vec<FormRecord>>,
}

impl MemoryFormStore {
    pub fn new(records: Vec<FormRecord>) -> Self {
        MemoryFormStore {
            records: RwLock::new(records),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: FormRecord) {
        self.records.write().await.push(record);
    }
}

fn matches(record: &FormRecord, filter: &FormFilter) -> Result<bool, StoreError> {
    if filter.exclude_deleted && record.deleted.is_some() {
        return Ok(false);
    }

    let field_value = match filter.field {
        UniqueField::Name => &record.name,
        UniqueField::Path => &record.path,
    };
    if *field_value != filter.value {
        return Ok(false);
    }

    if let (Some(excluded), Some(id)) = (&filter.exclude_id, &record.id) {
        if excluded == id {
            return Ok(false);
        }
    }

    if !filter.extra.is_empty() {
        let doc = serde_json::to_value(record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        for (key, expected) in &filter.extra {
            if doc.get(key) != Some(expected) {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn find_one(&self, filter: &FormFilter) -> Result<Option<FormRecord>, StoreError> {
        let records = self.records.read().await;
        for record in records.iter() {
            if matches(record, filter)? {
                return Ok(Some(record.clone()));
            }
        }
        Ok(None)
    }
}
