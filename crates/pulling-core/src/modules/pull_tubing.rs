use super::{
    anchor_prefix, condition_for_pressure_test, disassemble_tools, sentences,
    OBSERVATIONS_PULLED, PHOTO_EVIDENCE, REPLACE_COMPONENTS, STEEL_GRADE,
};
use crate::datasheet::Section;
use crate::design::{self, DesignOptions};
use crate::error::Result;
use crate::program::EvalContext;
use crate::tags::{first_keyword_tag, requirement_tag, Tag, Verb};
use crate::types::{Maneuver, ManeuverRecord, TripMode};

const PRESSURE_TEST: &str = "Perform pressure test at 1000, 900 and 800 psi respectively. \
Report whether it is positive and whether the tubing column must be moved.";

const PUMP_TO_SHOP: &str = "Request immediate shipment of the pump to the shop for teardown and \
inspection. Indicate whether it shows visible failure. Record the pump number and the condition \
of head and filter.";

/// Tubing extraction: pressure test, preparation, then a dewatering or
/// mode-tagged pull, then tool disassembly.
pub fn generate(ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    let mut records = vec![
        condition_for_pressure_test(),
        Maneuver::PressureTest.record(PRESSURE_TEST),
        Maneuver::ConditionToPullTubing.record(
            "Condition wellhead, fill with ASDF, unpack and mount annular BOP assembly. \
             Mount work floor.",
        ),
        Maneuver::PullTubing.record("General tasks while pulling tubing."),
    ];

    let prefix = anchor_prefix(ctx, Section::CurrentTubing).unwrap_or("");
    let rows = ctx.sheet.section(Section::CurrentTubing);
    let opts = DesignOptions::pull_tubing();

    let branch = match requirement_tag(ctx.sheet) {
        Tag::Dewater => {
            let design = design::build(rows, ctx.vocabulary, &opts);
            let head = format!(
                "Flush down the tubing to pull a clean string. Pull the tubing string dewatering \
                 with a swab cup, searching for the leak and filling the well. If a failed tubing \
                 joint is found, report its depth. {REPLACE_COMPONENTS} Design to pull: {design}."
            );
            Maneuver::PullTubingDewatering.record(sentences([
                prefix,
                head.as_str(),
                OBSERVATIONS_PULLED,
                PHOTO_EVIDENCE,
                STEEL_GRADE,
                PUMP_TO_SHOP,
            ]))
        }
        _ => {
            let pulled: Vec<_> = rows
                .iter()
                .filter(|r| r.comment_contains(Verb::Pull.keyword()))
                .collect();
            let mode = first_keyword_tag(pulled.iter().copied()).trip_mode_or(TripMode::Simple);
            let design = design::build(pulled.iter().copied(), ctx.vocabulary, &opts);
            let head = format!(
                "Flush down the tubing to pull a clean string. Pull string in {} trips, \
                 searching for the leak and filling the well. {REPLACE_COMPONENTS} \
                 Design to pull: {design}.",
                mode.as_prose()
            );
            Maneuver::PullTubingTrip(mode).record(sentences([
                prefix,
                head.as_str(),
                OBSERVATIONS_PULLED,
                PHOTO_EVIDENCE,
                STEEL_GRADE,
            ]))
        }
    };
    records.push(branch);
    records.push(disassemble_tools());
    Ok(records)
}
