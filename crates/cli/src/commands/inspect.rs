use std::path::Path;

use formwork_core::{component_keys, component_paths, component_shortcuts};

use crate::OutputFormat;

use super::load_form;

pub(crate) fn cmd_inspect(form_path: &Path, output: OutputFormat, quiet: bool) {
    let record = load_form(form_path, output, quiet);

    let keys = component_keys(&record.components);
    let paths = component_paths(&record.components);
    let shortcuts = component_shortcuts(&record.components);

    if quiet {
        return;
    }

    match output {
        OutputFormat::Text => {
            println!("keys:      {}", keys.join(", "));
            println!("paths:     {}", paths.join(", "));
            println!("shortcuts: {}", shortcuts.join(", "));
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "keys": keys,
                "paths": paths,
                "shortcuts": shortcuts
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
}
