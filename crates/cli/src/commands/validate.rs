use std::path::Path;
use std::process;

use formwork_core::FormRecord;
use formwork_storage::MemoryFormStore;
use formwork_validate::validate_form;

use crate::{report_error, OutputFormat};

use super::load_form;

pub(crate) fn cmd_validate(
    form_path: &Path,
    registry_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let record = load_form(form_path, output, quiet);

    let stored = match registry_path {
        Some(path) => load_registry(path, output, quiet),
        None => Vec::new(),
    };
    let store = MemoryFormStore::new(stored);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    let result = rt.block_on(validate_form(store, &record));

    match result {
        Ok(()) => {
            if !quiet {
                match output {
                    OutputFormat::Text => println!("valid"),
                    OutputFormat::Json => println!("{{\"valid\": true}}"),
                }
            }
        }
        Err(err) => {
            match output {
                OutputFormat::Text => {
                    if !quiet {
                        eprintln!("invalid form");
                        eprintln!("  - {}", err);
                    }
                }
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "valid": false,
                        "error": err
                    });
                    eprintln!(
                        "{}",
                        serde_json::to_string_pretty(&json).unwrap_or_default()
                    );
                }
            }
            process::exit(1);
        }
    }
}

/// A registry file is a JSON array of stored form records.
fn load_registry(path: &Path, output: OutputFormat, quiet: bool) -> Vec<FormRecord> {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading registry '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            let msg = format!("error parsing registry '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
