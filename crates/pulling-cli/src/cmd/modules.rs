use super::{load_config, load_datasheet};
use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(config_path: Option<&Path>, datasheet: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let sheet = load_datasheet(datasheet)?;
    let activations = pulling_core::active_modules(&sheet, &config.vocabulary);

    if json {
        return print_json(&serde_json::json!({ "modules": activations }));
    }

    let rows = activations
        .iter()
        .map(|a| {
            let state = if a.active { "active" } else { "inactive" };
            vec![a.module.to_string(), state.to_string()]
        })
        .collect();
    print_table(&["MODULE", "STATE"], rows);
    Ok(())
}
