use super::{anchor_prefix, condition_for_pressure_test, sentences};
use crate::anchor::AnchorSetting;
use crate::datasheet::Section;
use crate::design::{self, DesignOptions};
use crate::error::Result;
use crate::predicates::has_role;
use crate::program::EvalContext;
use crate::tags::{first_trip_tag, requirement_tag, Tag, Verb};
use crate::types::{ElementRole, Maneuver, ManeuverRecord, TripMode};

const RUN_IN: &str = "Run in the TBG column gauging, measuring, cleaning, greasing and torquing \
the connections.";
const OBSERVATIONS: &str = "Record significant observations in OW.";

const PUMP_FUNCTION_TEST: &str = "Along with the final test, perform a pump function test. \
Record it in OpenWells. If the test is deficient, report to the Pulling Supervisor.";

/// Tubing installation: preparation, a dewatering or mode-tagged run with the
/// anchor setting, then the pressure test.
///
/// Fails with [`crate::PullingError::AnchorDepthUnresolved`] when the anchor
/// setting is needed and no anchor, shoe or pump depth is known.
pub fn generate(ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    let mut records = vec![
        Maneuver::ConditionToLowerTubing.record("Fill the well with ASDF and remove BOP. Pack the well."),
        Maneuver::LowerTubing.record("General tasks while lowering tubing."),
    ];

    let rows = ctx.sheet.section(Section::FinalTubing);
    let prefix = anchor_prefix(ctx, Section::FinalTubing).unwrap_or("");
    let design = design::build(rows, ctx.vocabulary, &DesignOptions::lower_tubing());

    let branch = match requirement_tag(ctx.sheet) {
        Tag::Dewater => {
            let anchor = AnchorSetting::for_rows(rows, ctx.vocabulary)?.sentence();
            let body = format!("Lower dewatering with a swab cup. Design to lower: {design}.");
            Maneuver::LowerTubingDewatering.record(sentences([
                prefix,
                RUN_IN,
                body.as_str(),
                OBSERVATIONS,
                anchor.as_str(),
            ]))
        }
        _ => {
            let mode = first_trip_tag(rows, Verb::Lower).trip_mode_or(TripMode::Simple);
            let anchor = if has_role(ctx, Section::FinalTubing, ElementRole::Anchor) {
                Some(AnchorSetting::for_rows(rows, ctx.vocabulary)?.sentence())
            } else {
                None
            };
            let body = format!(
                "Lower the tubing column in {} trips. Design to lower: {design}.",
                mode.as_prose()
            );
            Maneuver::LowerTubingTrip(mode).record(sentences([
                prefix,
                RUN_IN,
                body.as_str(),
                OBSERVATIONS,
                anchor.as_deref().unwrap_or(""),
            ]))
        }
    };
    records.push(branch);

    records.push(condition_for_pressure_test());
    records.push(Maneuver::PressureTest.record(pressure_test(ctx)));
    Ok(records)
}

fn pressure_test(ctx: &EvalContext) -> String {
    let test = if has_role(ctx, Section::FinalTubing, ElementRole::ShearOut) {
        "Perform initial and final pressure test at 1000 psi. Expel the 4-pin SO with 2023 psi."
    } else {
        "Perform initial, intermediate and final pressure tests at 1000, 900 and 800 psi respectively."
    };
    sentences([test, PUMP_FUNCTION_TEST])
}
