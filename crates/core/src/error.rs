use serde::{Deserialize, Serialize};

/// The kind of rule a record failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field is empty or absent.
    MissingField,
    /// An identifier, shortcut, or slug fails its pattern.
    InvalidFormat,
    /// The path ends in a reserved route segment.
    ReservedPath,
    /// Duplicate keys, paths, or shortcuts within one component tree.
    DuplicateLocal,
    /// Another live record already holds this name or path.
    DuplicateGlobal,
    /// The existence query itself failed; treated as a rejection.
    StoreQuery,
}

/// A field-scoped validation failure. Validation never throws past the
/// acceptance boundary; the orchestrator's caller receives one of these
/// with enough detail to show the offending field and duplicate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<String>,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            kind,
            message: message.into(),
            duplicates: Vec::new(),
        }
    }

    pub fn with_duplicates(
        field: &str,
        kind: ValidationErrorKind,
        message: impl Into<String>,
        duplicates: Vec<String>,
    ) -> Self {
        ValidationError {
            field: field.to_string(),
            kind,
            message: message.into(),
            duplicates,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
