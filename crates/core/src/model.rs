use serde::{Deserialize, Serialize};

/// A stored form definition. Wire-compatible with the original JSON
/// documents: `_id`, `type`, `submissionAccess`, and `machineName` keep
/// their wire spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    /// Present only when updating an existing record.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    /// Globally unique among live records.
    #[serde(default)]
    pub name: String,

    /// Globally unique among live records. Lowercased and trimmed by
    /// `normalize`.
    #[serde(default)]
    pub path: String,

    #[serde(rename = "type", default)]
    pub kind: FormType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Custom submission action URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Soft-delete timestamp in epoch milliseconds. `None` means live;
    /// deleted records are excluded from uniqueness checks entirely.
    #[serde(default)]
    pub deleted: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<AccessControl>,

    #[serde(
        rename = "submissionAccess",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub submission_access: Vec<AccessControl>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default)]
    pub components: Vec<ComponentNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,

    /// Carried for wire compatibility; never derived here.
    #[serde(
        rename = "machineName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub machine_name: Option<String>,

    /// RFC 3339 timestamp string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// RFC 3339 timestamp string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl FormRecord {
    /// Apply the schema-level normalization the original storage layer
    /// performed on write: `path` is trimmed and lowercased, `name` and
    /// `title` are trimmed. Callers normalize before validating;
    /// validation itself never mutates the record.
    pub fn normalize(&mut self) {
        self.path = self.path.trim().to_lowercase();
        self.name = self.name.trim().to_string();
        self.title = self.title.trim().to_string();
    }
}

/// The record type: a data-collection form or a reusable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    #[default]
    Form,
    Resource,
}

/// A permission sub-object, carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControl {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

/// A node in a form's component tree.
///
/// The tree is duck-typed on the wire: any field this model does not
/// declare is preserved in `extra`, and the walker recurses into every
/// nested component collection regardless of the node's category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Machine name of the component, used for data binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Opaque component category (`textfield`, `panel`, `columns`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// True if this node represents a data-bearing input.
    #[serde(default)]
    pub input: bool,

    /// Single keyboard-shortcut accelerator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,

    /// Selectable option records, each optionally carrying its own
    /// shortcut.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<OptionValue>,

    /// Primary nested components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentNode>,

    /// Layout columns; each column is itself a node carrying components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ComponentNode>,

    /// Table rows of nested components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<ComponentNode>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One selectable value of a component (radio option, select item, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
