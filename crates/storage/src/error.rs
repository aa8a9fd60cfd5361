/// All errors that can be returned by a FormStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A backend-specific storage error (connection, query execution, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A record could not be serialized or deserialized at the storage boundary.
    #[error("storage serialization error: {0}")]
    Serialization(String),
}
