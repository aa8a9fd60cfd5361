//! User-facing message templates, kept out of the validation logic so
//! presentation language is swappable without touching any rule.

use crate::error::ValidationErrorKind;

/// One template string per error kind. `{field}` expands to the field
/// name and `{values}` to the comma-joined duplicate list.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    pub missing_field: String,
    pub invalid_slug: String,
    pub invalid_key: String,
    pub invalid_shortcut: String,
    pub reserved_path: String,
    pub duplicate_local: String,
    pub duplicate_global: String,
    pub store_query: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        MessageCatalog {
            missing_field: "{field} is required".to_string(),
            invalid_slug: "{field} may only contain letters, numbers, hyphens, and forward \
                           slashes, and may not start or end with a hyphen or forward slash"
                .to_string(),
            invalid_key: "a component on this form has an invalid or missing API key; keys may \
                          only contain alphanumeric characters, hyphens, and dots, and must \
                          start and end with a word character"
                .to_string(),
            invalid_shortcut: "a component on this form has an invalid shortcut; shortcuts must \
                               be a single letter or equal 'Enter' or 'Esc'"
                .to_string(),
            reserved_path: "{field} cannot end in `submission` or `action`".to_string(),
            duplicate_local: "component {field} must be unique: {values}".to_string(),
            duplicate_global: "each {field} must be unique".to_string(),
            store_query: "unable to verify that {field} is unique".to_string(),
        }
    }
}

impl MessageCatalog {
    fn template(&self, kind: ValidationErrorKind) -> &str {
        match kind {
            ValidationErrorKind::MissingField => &self.missing_field,
            ValidationErrorKind::InvalidFormat => &self.invalid_slug,
            ValidationErrorKind::ReservedPath => &self.reserved_path,
            ValidationErrorKind::DuplicateLocal => &self.duplicate_local,
            ValidationErrorKind::DuplicateGlobal => &self.duplicate_global,
            ValidationErrorKind::StoreQuery => &self.store_query,
        }
    }

    /// Render the template for `kind` with the field name substituted.
    pub fn render(&self, kind: ValidationErrorKind, field: &str) -> String {
        self.template(kind).replace("{field}", field)
    }

    /// Render with both the field name and a duplicate-value list.
    pub fn render_with_values(
        &self,
        kind: ValidationErrorKind,
        field: &str,
        values: &[String],
    ) -> String {
        self.render(kind, field).replace("{values}", &values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_field_placeholder() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.render(ValidationErrorKind::MissingField, "title"),
            "title is required"
        );
    }

    #[test]
    fn renders_duplicate_list_joined_by_comma_space() {
        let catalog = MessageCatalog::default();
        let msg = catalog.render_with_values(
            ValidationErrorKind::DuplicateLocal,
            "keys",
            &["a".to_string(), "b".to_string()],
        );
        assert_eq!(msg, "component keys must be unique: a, b");
    }

    #[test]
    fn swapping_language_touches_no_logic() {
        let catalog = MessageCatalog {
            duplicate_global: "每个项目的{field}必须是惟一的".to_string(),
            ..Default::default()
        };
        assert_eq!(
            catalog.render(ValidationErrorKind::DuplicateGlobal, "name"),
            "每个项目的name必须是惟一的"
        );
    }
}
