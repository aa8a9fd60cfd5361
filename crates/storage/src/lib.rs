mod error;
mod filter;
mod memory;
mod traits;

pub use error::StoreError;
pub use filter::{FormFilter, UniqueField};
pub use memory::MemoryFormStore;
pub use traits::FormStore;
