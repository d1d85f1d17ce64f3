use super::{load_config, load_datasheet};
use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;

pub fn run(config_path: Option<&Path>, datasheet: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let sheet = load_datasheet(datasheet)?;
    let program = pulling_core::generate_program(&sheet, &config.vocabulary)
        .with_context(|| format!("failed to generate program for {}", sheet.well_id))?;

    if json {
        return print_json(&serde_json::json!({ "program": program }));
    }

    let rows = program
        .iter()
        .map(|r| {
            vec![
                r.program_point.to_string(),
                r.normalized_maneuver_name.clone(),
                r.activity_phase.clone(),
                r.activity_code.clone(),
                r.activity_subcode.clone(),
                r.description.clone(),
            ]
        })
        .collect();
    print_table(
        &["POINT", "MANEUVER", "PHASE", "CODE", "SUBCODE", "DESCRIPTION"],
        rows,
    );
    Ok(())
}
