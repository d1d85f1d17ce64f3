//! Module generators.
//!
//! Each generator turns the datasheet into the ordered maneuver records of one
//! block of the program. Generators are pure; the assembler in
//! [`crate::program`] decides which ones run and concatenates their output.

pub mod finalize;
pub mod lower_rods;
pub mod lower_tubing;
pub mod pull_rods;
pub mod pull_tubing;
pub mod start;

use crate::datasheet::Section;
use crate::predicates::{self, has_role};
use crate::program::{EvalContext, ModuleRule};
use crate::types::{ElementRole, Maneuver, ManeuverRecord, Module};

// ---------------------------------------------------------------------------
// Module table
// ---------------------------------------------------------------------------

fn always(_ctx: &EvalContext) -> bool {
    true
}

/// Every module in execution order with its activation predicate.
pub fn default_modules() -> Vec<ModuleRule> {
    vec![
        ModuleRule {
            module: Module::Start,
            condition: always,
            generate: start::generate,
        },
        ModuleRule {
            module: Module::PullRods,
            condition: predicates::pull_rods_active,
            generate: pull_rods::generate,
        },
        ModuleRule {
            module: Module::PullTubing,
            condition: predicates::pull_tubing_active,
            generate: pull_tubing::generate,
        },
        ModuleRule {
            module: Module::LowerTubing,
            condition: predicates::lower_tubing_active,
            generate: lower_tubing::generate,
        },
        ModuleRule {
            module: Module::LowerRods,
            condition: predicates::lower_rods_active,
            generate: lower_rods::generate,
        },
        ModuleRule {
            module: Module::Finalize,
            condition: always,
            generate: finalize::generate,
        },
    ]
}

// ---------------------------------------------------------------------------
// Shared wording
// ---------------------------------------------------------------------------

pub(crate) const REPLACE_COMPONENTS: &str = "Break out components that need replacement.";
pub(crate) const PHOTO_EVIDENCE: &str = "Record photographic evidence of the material condition.";
pub(crate) const STEEL_GRADE: &str = "Record the steel grade of the pulled material in OW.";
pub(crate) const OBSERVATIONS_PULLED: &str = "Record significant observations in OW regarding possible corrosion, wear or over-torque.";
pub(crate) const FREE_ANCHOR: &str = "Free ANCHOR.";

/// Closing record shared by both pull modules.
pub(crate) fn disassemble_tools() -> ManeuverRecord {
    Maneuver::DisassembleTools.record("Disassemble tools.")
}

pub(crate) fn condition_for_pressure_test() -> ManeuverRecord {
    Maneuver::ConditionForPressureTest
        .record("Condition surface to perform the hydraulic pressure test.")
}

/// "Free ANCHOR." when the section carries an anchor row.
pub(crate) fn anchor_prefix(ctx: &EvalContext, section: Section) -> Option<&'static str> {
    has_role(ctx, section, ElementRole::Anchor).then_some(FREE_ANCHOR)
}

/// Join sentence fragments with single spaces, skipping empty ones.
pub(crate) fn sentences<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
