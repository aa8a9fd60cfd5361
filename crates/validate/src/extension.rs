use formwork_core::FormRecord;
use formwork_storage::FormFilter;

/// The single point where the uniqueness query defers to caller
/// policy.
///
/// Before a global-uniqueness query executes, the assembled base
/// filter is handed to the extension exactly once; the extension may
/// rewrite or augment it (tenant scoping, project scoping) and returns
/// the filter to run. Everything else about validation is mechanics —
/// the extension only shapes the query.
pub trait SearchExtension: Send + Sync {
    /// Rewrite the base filter for one existence query.
    ///
    /// `record` is the record under validation and `value` the raw
    /// field value being checked, provided so extensions can scope by
    /// record context.
    fn alter_search(&self, filter: FormFilter, record: &FormRecord, value: &str) -> FormFilter;
}

/// The default extension: returns the base filter unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSearchExtension;

impl SearchExtension for NoopSearchExtension {
    fn alter_search(&self, filter: FormFilter, _record: &FormRecord, _value: &str) -> FormFilter {
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_storage::UniqueField;

    #[test]
    fn noop_returns_the_filter_unchanged() {
        let record: FormRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        let filter = FormFilter::unique(UniqueField::Name, "intake");
        let altered = NoopSearchExtension.alter_search(filter.clone(), &record, "intake");
        assert_eq!(altered, filter);
    }

    #[test]
    fn extensions_are_object_safe() {
        let _ext: Box<dyn SearchExtension> = Box::new(NoopSearchExtension);
    }
}
