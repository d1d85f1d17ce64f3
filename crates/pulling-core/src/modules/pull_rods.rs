use super::{
    disassemble_tools, sentences, OBSERVATIONS_PULLED, PHOTO_EVIDENCE, REPLACE_COMPONENTS,
    STEEL_GRADE,
};
use crate::datasheet::Section;
use crate::design::{self, DesignOptions};
use crate::error::Result;
use crate::predicates::{has_role, has_role_in, rows_with_role};
use crate::program::EvalContext;
use crate::tags::{first_trip_tag, motive_tag, Tag, Verb};
use crate::types::{ElementRole, Maneuver, ManeuverRecord, TripMode};

const CURRENT: [Section; 2] = [Section::CurrentTubing, Section::CurrentRods];

/// Rod string extraction: four fixed records, then either the fishing pair or
/// the normal pull, then tool disassembly.
pub fn generate(ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    let mut records = vec![
        Maneuver::ConditionToPullRods.record(
            "Condition wellhead, mount work floor and sucker-rod tools. Remove complete \
             polished rod. Take string weight and record in OW.",
        ),
        Maneuver::PullRods.record("Miscellaneous maneuvers while pulling rods."),
        Maneuver::Circulate.record(
            "Circulate the well 2.5 times the tubing capacity down the tubing until clean \
             returns to ensure the pulled material is clean. If no circulation is observed, \
             report whether the installation tip is plugged or the well takes fluid.",
        ),
        Maneuver::ToolHandling.record("Maneuver string and tools."),
    ];

    let design = design::build(
        ctx.sheet.section(Section::CurrentRods),
        ctx.vocabulary,
        &DesignOptions::pull_rods(),
    );

    match motive_tag(ctx.sheet) {
        Tag::Fishing => records.extend(fishing(ctx, &design)),
        _ => records.extend(normal_pull(ctx, &design)),
    }

    records.push(disassemble_tools());
    Ok(records)
}

fn fishing(ctx: &EvalContext, design: &str) -> [ManeuverRecord; 2] {
    let to_fish_point = format!(
        "Pull rods in double down to the fishing point, filling the well. {REPLACE_COMPONENTS} \
         Design to pull: {design}. {OBSERVATIONS_PULLED} Record photographic evidence of the \
         material condition and fishing point. {STEEL_GRADE}"
    );

    let release = if has_role_in(ctx, &CURRENT, ElementRole::OnOff) {
        "Disconnect On&Off."
    } else if has_role_in(ctx, &CURRENT, ElementRole::TubingPump) {
        "Unseat pump."
    } else {
        ""
    };
    let fished = sentences([
        "Fish.",
        release,
        "Pull fished rods in double, breaking the even connection, filling the well.",
        REPLACE_COMPONENTS,
    ]);

    [
        Maneuver::PullRodsFishing.record(to_fish_point),
        Maneuver::PullRodsFishingDouble.record(fished),
    ]
}

/// The mode-tagged pull. Omitted when the designated pump is missing, when a
/// connector must be released first, or when no sucker rod carries a trip tag.
fn normal_pull(ctx: &EvalContext, design: &str) -> Option<ManeuverRecord> {
    let pump_in_rods = has_role(ctx, Section::CurrentRods, ElementRole::PumpModel);
    let connector = has_role_in(ctx, &CURRENT, ElementRole::OnOff)
        || has_role_in(ctx, &CURRENT, ElementRole::TubingPump);
    if !pump_in_rods || connector {
        return None;
    }

    let mode: TripMode = first_trip_tag(
        rows_with_role(ctx, Section::CurrentRods, ElementRole::SuckerRod),
        Verb::Pull,
    )
    .trip_mode()?;

    let desc = format!(
        "Unseat pump. Flush down the tubing to pull a clean string. Pull string in {} trips, \
         breaking out and filling the well. {REPLACE_COMPONENTS} Design to pull: {design}. \
         {OBSERVATIONS_PULLED} {PHOTO_EVIDENCE} {STEEL_GRADE}",
        mode.as_prose()
    );
    Some(Maneuver::PullRodsTrip(mode).record(desc))
}
