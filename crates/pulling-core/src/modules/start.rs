use crate::error::Result;
use crate::program::EvalContext;
use crate::types::{Maneuver, ManeuverRecord};

/// Transport, rig up, well control, wellhead removal and tool assembly.
pub fn generate(ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    Ok(vec![
        Maneuver::EquipmentInTransit.record(transport_description(ctx)),
        Maneuver::RigUp.record(
            "Check tubing and casing pressures. Disassemble production bridge. \
             Rig up according to procedure.",
        ),
        Maneuver::WellControl.record(
            "Control tubing and casing pressures, displacement and gas emanations from the well.",
        ),
        Maneuver::DisassembleWellhead.record("Disassemble wellhead."),
        Maneuver::AssembleTools.record("Assemble tools."),
    ])
}

fn transport_description(ctx: &EvalContext) -> String {
    let sheet = ctx.sheet;
    let mut desc = format!("Transport to {}.", sheet.well_id.trim());
    if !sheet.antecedents.is_empty() {
        desc.push_str(&format!(
            " Consider the well antecedents: {}.",
            sheet.antecedents.join(", ")
        ));
    }
    let definition = sheet.definition_text();
    if !definition.is_empty() {
        desc.push_str(&format!(" Current well definition: {definition}."));
    }
    let motive = sheet.motive_text();
    if !motive.is_empty() {
        desc.push_str(&format!(" Maneuver to perform: {motive}."));
    }
    if !sheet.special_requirements.is_empty() {
        desc.push_str(&format!(
            " Consider the following requirements: {}.",
            sheet.special_requirements.join(", ")
        ));
    }
    desc
}
