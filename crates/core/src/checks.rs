//! The synchronous half of form validation: required fields, pattern
//! checks, and local uniqueness, run in a fixed order with the first
//! failure short-circuiting.
//!
//! Global (store-backed) uniqueness is layered on top of this by
//! `formwork-validate`.

use crate::error::{ValidationError, ValidationErrorKind};
use crate::extract::{component_keys, component_paths, component_shortcuts};
use crate::format::{ends_with_reserved_suffix, is_valid_key, is_valid_shortcut, is_valid_slug};
use crate::messages::MessageCatalog;
use crate::model::FormRecord;
use crate::unique::check_local_unique;

/// Run every synchronous check on a candidate record, in order:
/// required fields, name/path format, reserved path suffix, component
/// key/shortcut format, then local uniqueness of keys, input paths,
/// and shortcuts. Pure — no hidden state, identical results on rerun.
pub fn check_record(record: &FormRecord, messages: &MessageCatalog) -> Result<(), ValidationError> {
    check_required(record, messages)?;
    check_formats(record, messages)?;
    check_local_uniqueness(record, messages)?;
    Ok(())
}

fn check_required(record: &FormRecord, messages: &MessageCatalog) -> Result<(), ValidationError> {
    for (field, value) in [
        ("title", &record.title),
        ("name", &record.name),
        ("path", &record.path),
    ] {
        if value.is_empty() {
            return Err(ValidationError::new(
                field,
                ValidationErrorKind::MissingField,
                messages.render(ValidationErrorKind::MissingField, field),
            ));
        }
    }
    Ok(())
}

fn check_formats(record: &FormRecord, messages: &MessageCatalog) -> Result<(), ValidationError> {
    for (field, value) in [("name", &record.name), ("path", &record.path)] {
        if !is_valid_slug(value) {
            return Err(ValidationError::new(
                field,
                ValidationErrorKind::InvalidFormat,
                messages.render(ValidationErrorKind::InvalidFormat, field),
            ));
        }
    }

    if ends_with_reserved_suffix(&record.path) {
        return Err(ValidationError::new(
            "path",
            ValidationErrorKind::ReservedPath,
            messages.render(ValidationErrorKind::ReservedPath, "path"),
        ));
    }

    // The whole tree is invalid if any extracted key or shortcut fails
    // its pattern.
    if !component_keys(&record.components).iter().all(|k| is_valid_key(k)) {
        return Err(ValidationError::new(
            "components",
            ValidationErrorKind::InvalidFormat,
            messages.invalid_key.clone(),
        ));
    }
    if !component_shortcuts(&record.components)
        .iter()
        .all(|s| is_valid_shortcut(s))
    {
        return Err(ValidationError::new(
            "components",
            ValidationErrorKind::InvalidFormat,
            messages.invalid_shortcut.clone(),
        ));
    }

    Ok(())
}

fn check_local_uniqueness(
    record: &FormRecord,
    messages: &MessageCatalog,
) -> Result<(), ValidationError> {
    let lists = [
        ("keys", component_keys(&record.components)),
        ("paths", component_paths(&record.components)),
        ("shortcuts", component_shortcuts(&record.components)),
    ];
    for (label, values) in lists {
        if let Err(duplicates) = check_local_unique(&values) {
            let message =
                messages.render_with_values(ValidationErrorKind::DuplicateLocal, label, &duplicates);
            return Err(ValidationError::with_duplicates(
                "components",
                ValidationErrorKind::DuplicateLocal,
                message,
                duplicates,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentNode;

    fn record_with_components(components: Vec<ComponentNode>) -> FormRecord {
        let mut record: FormRecord = serde_json::from_value(serde_json::json!({
            "title": "Test",
            "name": "test",
            "path": "test"
        }))
        .unwrap();
        record.components = components;
        record
    }

    fn input(key: &str) -> ComponentNode {
        ComponentNode {
            key: Some(key.to_string()),
            input: true,
            ..Default::default()
        }
    }

    #[test]
    fn missing_title_is_rejected_first() {
        let mut record = record_with_components(vec![]);
        record.title = String::new();
        let err = check_record(&record, &MessageCatalog::default()).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
    }

    #[test]
    fn bad_key_fails_the_whole_tree() {
        let record = record_with_components(vec![input("good"), input("-bad")]);
        let err = check_record(&record, &MessageCatalog::default()).unwrap_err();
        assert_eq!(err.field, "components");
        assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
    }

    #[test]
    fn duplicate_shortcut_lists_the_value() {
        let mut a = input("a");
        a.shortcut = Some("x".to_string());
        let mut b = input("b");
        b.shortcut = Some("X".to_string());
        let record = record_with_components(vec![a, b]);
        let err = check_record(&record, &MessageCatalog::default()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateLocal);
        assert_eq!(err.duplicates, vec!["X"]);
        assert!(err.message.contains("shortcuts"));
    }

    #[test]
    fn reserved_path_rejected_before_component_checks() {
        let mut record = record_with_components(vec![input("-bad")]);
        record.path = "forms/submission".to_string();
        let err = check_record(&record, &MessageCatalog::default()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::ReservedPath);
    }
}
