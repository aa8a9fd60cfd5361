use serde::{Deserialize, Serialize};

/// The globally-unique record fields an existence query can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueField {
    Name,
    Path,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Name => "name",
            UniqueField::Path => "path",
        }
    }
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An existence-query filter over stored form records.
///
/// The base shape built by the validator is
/// `{deleted: {eq: null}, <field>: value}` plus, on update,
/// `{id: {ne: excludeId}}` so a record does not conflict with itself.
/// Extensions may add further top-level equality criteria through
/// `extra` (tenant scoping and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFilter {
    pub field: UniqueField,
    pub value: String,
    /// Soft-deleted records never participate in uniqueness.
    pub exclude_deleted: bool,
    /// Set on update so the record being validated is not its own
    /// duplicate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<String>,
    /// Extension-supplied top-level equality criteria.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FormFilter {
    /// The base filter for a uniqueness check on `field == value`,
    /// excluding soft-deleted records.
    pub fn unique(field: UniqueField, value: impl Into<String>) -> Self {
        FormFilter {
            field,
            value: value.into(),
            exclude_deleted: true,
            exclude_id: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn excluding_id(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }

    /// Render the canonical query shape, used for logging and for wire
    /// backends:
    /// `{"deleted": {"eq": null}, "<field>": value, "id": {"ne": excludeId}, ...extra}`.
    pub fn to_query_value(&self) -> serde_json::Value {
        let mut query = serde_json::Map::new();
        if self.exclude_deleted {
            query.insert(
                "deleted".to_string(),
                serde_json::json!({"eq": serde_json::Value::Null}),
            );
        }
        query.insert(
            self.field.as_str().to_string(),
            serde_json::Value::String(self.value.clone()),
        );
        if let Some(id) = &self.exclude_id {
            query.insert("id".to_string(), serde_json::json!({"ne": id}));
        }
        for (key, value) in &self.extra {
            query.insert(key.clone(), value.clone());
        }
        serde_json::Value::Object(query)
    }
}
