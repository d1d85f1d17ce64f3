use crate::datasheet::Section;
use crate::design::{self, DesignOptions};
use crate::error::Result;
use crate::predicates::{has_role, rows_with_role};
use crate::program::EvalContext;
use crate::tags::{first_trip_tag, Verb};
use crate::types::{ElementRole, Maneuver, ManeuverRecord, TripMode};

pub const CONNECT_ON_OFF: &str = " Connect on-off.";

const FINAL_PRESSURE_TEST: &str = "Perform final pressure test at 1000, 900 and 800 psi \
respectively. Along with the final test, perform a pump function test. Record it in OpenWells. \
If the test is deficient, report to the Pulling Supervisor.";

/// Rod string installation: preparation, the mode-tagged run, final pressure test.
pub fn generate(ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    let mode = first_trip_tag(
        rows_with_role(ctx, Section::FinalRods, ElementRole::SuckerRod),
        Verb::Lower,
    )
    .trip_mode_or(TripMode::Simple);

    let design = design::build(
        ctx.sheet.section(Section::FinalRods),
        ctx.vocabulary,
        &DesignOptions::lower_rods(),
    );

    let mut run = format!(
        "Take pump data and run it in with the sucker-rod string in {} trips, cleaning every \
         connection with biodegradable detergent. Check torque every 15 rods according to the \
         rod steel grade. Design to lower: {design}.",
        mode.as_prose()
    );
    if has_role(ctx, Section::FinalRods, ElementRole::OnOff)
        || has_role(ctx, Section::FinalRods, ElementRole::TubingPump)
    {
        run.push_str(CONNECT_ON_OFF);
    }

    Ok(vec![
        Maneuver::ConditionToLowerRods
            .record("Condition wellhead, mount work floor and sucker-rod tools."),
        Maneuver::LowerRods.record("Clean every connection with biodegradable detergent."),
        Maneuver::LowerRodsTrip(mode).record(run),
        Maneuver::PressureTest.record(FINAL_PRESSURE_TEST),
    ])
}
