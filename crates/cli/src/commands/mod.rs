pub(crate) mod inspect;
pub(crate) mod validate;

use std::path::Path;
use std::process;

use formwork_core::FormRecord;

use crate::{report_error, OutputFormat};

/// Read and parse a form record from a JSON file, normalizing it the
/// way the storage layer would on write. Exits with code 1 on any
/// read or parse failure.
pub(crate) fn load_form(path: &Path, output: OutputFormat, quiet: bool) -> FormRecord {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let mut record: FormRecord = match serde_json::from_str(&raw) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("error parsing form in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    record.normalize();
    record
}
