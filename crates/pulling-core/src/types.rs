use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ElementRole
// ---------------------------------------------------------------------------

/// What a datasheet row is, as far as the rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// Any rod-string member: rods, stems, rod segments.
    Rod,
    /// Sucker rods proper; the rows whose comments decide the trip mode.
    SuckerRod,
    /// The designated insert pump model.
    PumpModel,
    /// Any pump-bearing row.
    Pump,
    Anchor,
    Shoe,
    Tubing,
    ShearOut,
    OnOff,
    TubingPump,
}

impl ElementRole {
    pub fn all() -> &'static [ElementRole] {
        &[
            ElementRole::Rod,
            ElementRole::SuckerRod,
            ElementRole::PumpModel,
            ElementRole::Pump,
            ElementRole::Anchor,
            ElementRole::Shoe,
            ElementRole::Tubing,
            ElementRole::ShearOut,
            ElementRole::OnOff,
            ElementRole::TubingPump,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementRole::Rod => "rod",
            ElementRole::SuckerRod => "sucker_rod",
            ElementRole::PumpModel => "pump_model",
            ElementRole::Pump => "pump",
            ElementRole::Anchor => "anchor",
            ElementRole::Shoe => "shoe",
            ElementRole::Tubing => "tubing",
            ElementRole::ShearOut => "shear_out",
            ElementRole::OnOff => "on_off",
            ElementRole::TubingPump => "tubing_pump",
        }
    }

    /// Substring roles match any element name containing an alias.
    pub fn matches_substring(self) -> bool {
        matches!(
            self,
            ElementRole::Rod
                | ElementRole::SuckerRod
                | ElementRole::Pump
                | ElementRole::OnOff
                | ElementRole::TubingPump
        )
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TripMode
// ---------------------------------------------------------------------------

/// Joints handled per trip: one (simple) or two (double).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripMode {
    Simple,
    Double,
}

impl TripMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TripMode::Simple => "SIMPLE",
            TripMode::Double => "DOUBLE",
        }
    }

    /// Lowercase form used inside descriptions ("in double trips").
    pub fn as_prose(self) -> &'static str {
        match self {
            TripMode::Simple => "simple",
            TripMode::Double => "double",
        }
    }
}

impl fmt::Display for TripMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Start,
    PullRods,
    PullTubing,
    LowerTubing,
    LowerRods,
    Finalize,
}

impl Module {
    /// Fixed execution order of the program.
    pub fn all() -> &'static [Module] {
        &[
            Module::Start,
            Module::PullRods,
            Module::PullTubing,
            Module::LowerTubing,
            Module::LowerRods,
            Module::Finalize,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Start => "start",
            Module::PullRods => "pull_rods",
            Module::PullTubing => "pull_tubing",
            Module::LowerTubing => "lower_tubing",
            Module::LowerRods => "lower_rods",
            Module::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Maneuver catalogue
// ---------------------------------------------------------------------------

/// Every slot of the master maneuver catalogue the generators draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maneuver {
    EquipmentInTransit,
    RigUp,
    WellControl,
    DisassembleWellhead,
    AssembleTools,
    ConditionToPullRods,
    PullRods,
    Circulate,
    ToolHandling,
    PullRodsFishing,
    PullRodsFishingDouble,
    PullRodsTrip(TripMode),
    ConditionToPullTubing,
    PullTubing,
    PullTubingDewatering,
    PullTubingTrip(TripMode),
    DisassembleTools,
    ConditionToLowerTubing,
    LowerTubing,
    LowerTubingDewatering,
    LowerTubingTrip(TripMode),
    ConditionForPressureTest,
    PressureTest,
    ConditionToLowerRods,
    LowerRods,
    LowerRodsTrip(TripMode),
    Miscellaneous,
    AssembleWellhead,
    RigDown,
}

/// Catalogue coordinates of a maneuver: program point and activity taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub point: u32,
    pub phase: &'static str,
    pub code: &'static str,
    pub subcode: &'static str,
}

const fn slot(point: u32, phase: &'static str, code: &'static str, subcode: &'static str) -> Slot {
    Slot {
        point,
        phase,
        code,
        subcode,
    }
}

impl Maneuver {
    pub fn slot(self) -> Slot {
        match self {
            Maneuver::EquipmentInTransit => slot(1, "S01", "SP10", "200"),
            Maneuver::RigUp => slot(2, "S01", "SP10", "201"),
            Maneuver::WellControl => slot(3, "SP05", "SP20", "220"),
            Maneuver::DisassembleWellhead => slot(4, "SP03", "SP34", "210"),
            Maneuver::AssembleTools => slot(5, "SP04", "SP15", "209"),
            Maneuver::ConditionToPullRods => slot(6, "SP03", "SP24", "250"),
            Maneuver::PullRods => slot(7, "SP03", "SP24", "251"),
            Maneuver::Circulate => slot(8, "SP05", "SP20", "218"),
            Maneuver::ToolHandling => slot(9, "SP04", "SP18", "212"),
            Maneuver::PullRodsFishing => slot(10, "SP03", "SP24", "251"),
            Maneuver::PullRodsFishingDouble => slot(11, "SP03", "SP24", "251"),
            Maneuver::PullRodsTrip(_) => slot(13, "SP03", "SP24", "251"),
            Maneuver::ConditionToPullTubing => slot(15, "SP03", "SP24", "252"),
            Maneuver::PullTubing => slot(16, "SP03", "SP24", "253"),
            Maneuver::PullTubingDewatering => slot(17, "SP03", "SP24", "253"),
            Maneuver::PullTubingTrip(_) => slot(20, "SP03", "SP24", "253"),
            Maneuver::DisassembleTools => slot(29, "SP03", "SP25", "229"),
            Maneuver::ConditionToLowerTubing => slot(36, "SP04", "SP16", "256"),
            Maneuver::LowerTubing => slot(37, "SP04", "SP16", "257"),
            Maneuver::LowerTubingDewatering => slot(38, "SP04", "SP16", "257"),
            Maneuver::LowerTubingTrip(_) => slot(38, "SP04", "SP16", "257"),
            Maneuver::ConditionForPressureTest => slot(47, "SP03", "SP13", "259"),
            Maneuver::PressureTest => slot(49, "SP03", "SP13", "205"),
            Maneuver::ConditionToLowerRods => slot(50, "SP04", "SP16", "254"),
            Maneuver::LowerRods => slot(51, "SP04", "SP16", "255"),
            Maneuver::LowerRodsTrip(_) => slot(54, "SP04", "SP16", "255"),
            Maneuver::Miscellaneous => slot(58, "SPV", "SPV", "SPV"),
            Maneuver::AssembleWellhead => slot(59, "SP04", "SP15", "260"),
            Maneuver::RigDown => slot(61, "SP01", "SP11", "202"),
        }
    }

    /// Normalized maneuver name as it appears in the program.
    pub fn name(self) -> String {
        let fixed = match self {
            Maneuver::EquipmentInTransit => "EQUIPMENT IN TRANSIT",
            Maneuver::RigUp => "RIG UP",
            Maneuver::WellControl => "WELL CONTROL",
            Maneuver::DisassembleWellhead => "DISASSEMBLE WELLHEAD",
            Maneuver::AssembleTools => "ASSEMBLE TOOLS",
            Maneuver::ConditionToPullRods => "CONDITION TO PULL RODS",
            Maneuver::PullRods => "PULL RODS",
            Maneuver::Circulate => "CIRCULATE",
            Maneuver::ToolHandling => "TOOL HANDLING",
            Maneuver::PullRodsFishing => "PULL RODS FISHING",
            Maneuver::PullRodsFishingDouble => "PULL RODS FISHING DOUBLE",
            Maneuver::PullRodsTrip(mode) => return format!("PULL RODS {mode}"),
            Maneuver::ConditionToPullTubing => "CONDITION TO PULL TUBING",
            Maneuver::PullTubing => "PULL TUBING",
            Maneuver::PullTubingDewatering => "PULL TUBING DEWATERING",
            Maneuver::PullTubingTrip(mode) => return format!("PULL TUBING {mode}"),
            Maneuver::DisassembleTools => "DISASSEMBLE TOOLS",
            Maneuver::ConditionToLowerTubing => "CONDITION TO LOWER TUBING",
            Maneuver::LowerTubing => "LOWER TUBING",
            Maneuver::LowerTubingDewatering => "LOWER TUBING DEWATERING",
            Maneuver::LowerTubingTrip(mode) => return format!("LOWER TUBING {mode}"),
            Maneuver::ConditionForPressureTest => "CONDITION FOR PRESSURE TEST",
            Maneuver::PressureTest => "PRESSURE TEST",
            Maneuver::ConditionToLowerRods => "CONDITION TO LOWER RODS",
            Maneuver::LowerRods => "LOWER RODS",
            Maneuver::LowerRodsTrip(mode) => return format!("LOWER RODS {mode}"),
            Maneuver::Miscellaneous => "MISCELLANEOUS",
            Maneuver::AssembleWellhead => "ASSEMBLE WELLHEAD",
            Maneuver::RigDown => "RIG DOWN",
        };
        fixed.to_string()
    }

    /// Build the program line for this maneuver.
    pub fn record(self, description: impl Into<String>) -> ManeuverRecord {
        let slot = self.slot();
        ManeuverRecord {
            normalized_maneuver_name: self.name(),
            program_point: slot.point,
            description: description.into(),
            activity_phase: slot.phase.to_string(),
            activity_code: slot.code.to_string(),
            activity_subcode: slot.subcode.to_string(),
            duration: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ManeuverRecord / Program
// ---------------------------------------------------------------------------

/// One line of the generated work program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManeuverRecord {
    pub normalized_maneuver_name: String,
    pub program_point: u32,
    pub description: String,
    pub activity_phase: String,
    pub activity_code: String,
    pub activity_subcode: String,
    /// Filled in by planners downstream; always empty here.
    pub duration: String,
}

/// Maneuver records in module-execution order (not point order).
pub type Program = Vec<ManeuverRecord>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_maneuvers_carry_the_mode() {
        assert_eq!(
            Maneuver::LowerRodsTrip(TripMode::Double).name(),
            "LOWER RODS DOUBLE"
        );
        assert_eq!(
            Maneuver::PullTubingTrip(TripMode::Simple).name(),
            "PULL TUBING SIMPLE"
        );
    }

    #[test]
    fn mode_does_not_move_the_slot() {
        assert_eq!(
            Maneuver::PullRodsTrip(TripMode::Simple).slot(),
            Maneuver::PullRodsTrip(TripMode::Double).slot()
        );
        assert_eq!(
            Maneuver::LowerTubingTrip(TripMode::Simple).slot().point,
            Maneuver::LowerTubingDewatering.slot().point
        );
    }

    #[test]
    fn record_copies_slot_and_leaves_duration_empty() {
        let r = Maneuver::PressureTest.record("Test.");
        assert_eq!(r.program_point, 49);
        assert_eq!(r.normalized_maneuver_name, "PRESSURE TEST");
        assert_eq!(r.activity_phase, "SP03");
        assert_eq!(r.activity_code, "SP13");
        assert_eq!(r.activity_subcode, "205");
        assert_eq!(r.description, "Test.");
        assert!(r.duration.is_empty());
    }

    #[test]
    fn record_serializes_with_contract_keys() {
        let json = serde_json::to_value(Maneuver::RigDown.record("x")).unwrap();
        for key in [
            "normalized_maneuver_name",
            "program_point",
            "description",
            "activity_phase",
            "activity_code",
            "activity_subcode",
            "duration",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["program_point"], 61);
    }

    #[test]
    fn module_order_opens_with_start_and_closes_with_finalize() {
        let all = Module::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all.first(), Some(&Module::Start));
        assert_eq!(all.last(), Some(&Module::Finalize));
    }

    #[test]
    fn substring_roles() {
        assert!(ElementRole::Rod.matches_substring());
        assert!(!ElementRole::Anchor.matches_substring());
        assert!(!ElementRole::PumpModel.matches_substring());
    }
}
