//! Formwork core: the form record data model plus every synchronous
//! validation building block — tree traversal, identifier extraction,
//! pattern checks, local uniqueness, and the ordered record checks.
//!
//! Global (store-backed) uniqueness lives in `formwork-validate`; this
//! crate is pure and owns no I/O.

mod checks;
mod error;
mod extract;
mod format;
mod messages;
mod model;
mod unique;
mod walk;

pub use checks::check_record;
pub use error::{ValidationError, ValidationErrorKind};
pub use extract::{component_keys, component_paths, component_shortcuts};
pub use format::{
    ends_with_reserved_suffix, is_valid_key, is_valid_shortcut, is_valid_slug,
    INVALID_SLUG_PATTERN, RESERVED_PATH_PATTERN, VALID_KEY_PATTERN, VALID_SHORTCUT_PATTERN,
};
pub use messages::MessageCatalog;
pub use model::{AccessControl, ComponentNode, FormRecord, FormType, OptionValue};
pub use unique::{check_local_unique, duplicate_values};
pub use walk::walk_components;
