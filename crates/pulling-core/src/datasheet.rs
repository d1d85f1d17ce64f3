//! Structured view of an intervention datasheet.
//!
//! A datasheet describes one well: identity and planning metadata, plus the
//! current and final tubing and rod installations as ordered element tables.
//! Generation only ever reads it.

use crate::error::{PullingError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

pub const MAX_ANTECEDENTS: usize = 4;
pub const MAX_SPECIAL_REQUIREMENTS: usize = 4;

// ---------------------------------------------------------------------------
// ElementRow
// ---------------------------------------------------------------------------

/// One row of an installation table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRow {
    pub element: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub condition: Option<String>,
    /// Nominal diameter, inches.
    #[serde(default)]
    pub diameter: Option<f64>,
    /// Setting depth, meters.
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub steel_grade: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub coupling: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub coupling_steel: Option<String>,
}

impl ElementRow {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_steel_grade(mut self, steel: impl Into<String>) -> Self {
        self.steel_grade = Some(steel.into());
        self
    }

    pub fn with_coupling(mut self, coupling: impl Into<String>) -> Self {
        self.coupling = Some(coupling.into());
        self
    }

    /// Rows with a null or zero quantity are left out of design strings.
    pub fn is_counted(&self) -> bool {
        self.quantity.is_some_and(|q| q > 0)
    }

    /// Trimmed element name.
    pub fn name(&self) -> &str {
        self.element.trim()
    }

    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().map(str::trim).unwrap_or("")
    }

    /// Case-insensitive keyword test on the comment. Absent comments never match.
    pub fn comment_contains(&self, keyword: &str) -> bool {
        self.comment
            .as_deref()
            .is_some_and(|c| c.to_uppercase().contains(&keyword.to_uppercase()))
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    CurrentTubing,
    FinalTubing,
    CurrentRods,
    FinalRods,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::CurrentTubing,
            Section::FinalTubing,
            Section::CurrentRods,
            Section::FinalRods,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::CurrentTubing => "current_tubing",
            Section::FinalTubing => "final_tubing",
            Section::CurrentRods => "current_rods",
            Section::FinalRods => "final_rods",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Datasheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datasheet {
    pub well_id: String,
    pub battery: String,
    pub equipment: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub motive: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "non_blank_list")]
    pub antecedents: Vec<String>,
    #[serde(default, deserialize_with = "non_blank_list")]
    pub special_requirements: Vec<String>,
    pub current_tubing: Vec<ElementRow>,
    pub final_tubing: Vec<ElementRow>,
    pub current_rods: Vec<ElementRow>,
    pub final_rods: Vec<ElementRow>,
}

impl Datasheet {
    pub fn new(
        well_id: impl Into<String>,
        battery: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            well_id: well_id.into(),
            battery: battery.into(),
            equipment: equipment.into(),
            definition: None,
            motive: None,
            priority: None,
            antecedents: Vec::new(),
            special_requirements: Vec::new(),
            current_tubing: Vec::new(),
            final_tubing: Vec::new(),
            current_rods: Vec::new(),
            final_rods: Vec::new(),
        }
    }

    pub fn section(&self, section: Section) -> &[ElementRow] {
        match section {
            Section::CurrentTubing => &self.current_tubing,
            Section::FinalTubing => &self.final_tubing,
            Section::CurrentRods => &self.current_rods,
            Section::FinalRods => &self.final_rods,
        }
    }

    pub fn definition_text(&self) -> &str {
        self.definition.as_deref().unwrap_or("")
    }

    pub fn motive_text(&self) -> &str {
        self.motive.as_deref().unwrap_or("")
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    pub fn from_json(data: &str) -> Result<Self> {
        let sheet: Datasheet = serde_json::from_str(data)?;
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        let sheet: Datasheet = serde_yaml::from_str(data)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a datasheet, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self> = match ext.as_str() {
            "json" => Self::from_json,
            "yaml" | "yml" => Self::from_yaml,
            _ => {
                return Err(PullingError::InvalidDatasheet(format!(
                    "unsupported datasheet format '{}': expected .json, .yaml or .yml",
                    path.display()
                )))
            }
        };
        let data = std::fs::read_to_string(path)?;
        parse(&data)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Result<()> {
        if self.well_id.trim().is_empty() {
            return Err(PullingError::MissingField("well_id"));
        }
        if self.battery.trim().is_empty() {
            return Err(PullingError::MissingField("battery"));
        }
        if self.equipment.trim().is_empty() {
            return Err(PullingError::MissingField("equipment"));
        }
        if self.antecedents.len() > MAX_ANTECEDENTS {
            return Err(PullingError::InvalidDatasheet(format!(
                "at most {MAX_ANTECEDENTS} antecedents allowed, got {}",
                self.antecedents.len()
            )));
        }
        if self.special_requirements.len() > MAX_SPECIAL_REQUIREMENTS {
            return Err(PullingError::InvalidDatasheet(format!(
                "at most {MAX_SPECIAL_REQUIREMENTS} special requirements allowed, got {}",
                self.special_requirements.len()
            )));
        }
        for section in Section::all() {
            for (i, row) in self.section(*section).iter().enumerate() {
                if row.name().is_empty() {
                    return Err(PullingError::InvalidDatasheet(format!(
                        "{section} row {} has no element name",
                        i + 1
                    )));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn non_blank_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Option<String>>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    const MINIMAL_JSON: &str = r#"{
        "well_id": "PZ-1021",
        "battery": "BAT-7",
        "equipment": "EQ-12",
        "current_tubing": [],
        "final_tubing": [],
        "current_rods": [],
        "final_rods": []
    }"#;

    #[test]
    fn minimal_json_loads() {
        let sheet = Datasheet::from_json(MINIMAL_JSON).unwrap();
        assert_eq!(sheet.well_id, "PZ-1021");
        assert!(sheet.definition.is_none());
        assert!(sheet.antecedents.is_empty());
    }

    #[test]
    fn blank_optionals_become_none() {
        let json = r#"{
            "well_id": "PZ-1", "battery": "B", "equipment": "E",
            "motive": "  ",
            "antecedents": ["Pesca 2019", "", null],
            "current_tubing": [{"element": "TUBING", "comment": "", "quantity": 120}],
            "final_tubing": [], "current_rods": [], "final_rods": []
        }"#;
        let sheet = Datasheet::from_json(json).unwrap();
        assert!(sheet.motive.is_none());
        assert_eq!(sheet.antecedents, vec!["Pesca 2019".to_string()]);
        assert!(sheet.current_tubing[0].comment.is_none());
    }

    #[test]
    fn missing_section_is_a_validation_error() {
        let json = r#"{"well_id": "PZ-1", "battery": "B", "equipment": "E",
            "current_tubing": [], "final_tubing": [], "current_rods": []}"#;
        let err = Datasheet::from_json(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn blank_identity_field_is_rejected() {
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.battery = " ".to_string();
        assert!(matches!(
            sheet.validate(),
            Err(PullingError::MissingField("battery"))
        ));
    }

    #[test]
    fn too_many_antecedents_rejected() {
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.antecedents = (0..5).map(|i| format!("a{i}")).collect();
        assert!(matches!(
            sheet.validate(),
            Err(PullingError::InvalidDatasheet(_))
        ));
    }

    #[test]
    fn binary_spreadsheet_is_rejected_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.xlsx");
        std::fs::write(&path, [0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe, 0x00, 0x9f]).unwrap();
        let err = Datasheet::load(&path).unwrap_err();
        assert!(matches!(err, PullingError::InvalidDatasheet(_)));
        assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
    }

    #[test]
    fn unnamed_row_rejected() {
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.final_rods.push(ElementRow::new("   ").with_quantity(3));
        let err = sheet.validate().unwrap_err();
        assert!(err.to_string().contains("final_rods row 1"));
    }

    #[test]
    fn negative_quantity_fails_to_parse() {
        let json = MINIMAL_JSON.replace(
            "\"final_rods\": []",
            "\"final_rods\": [{\"element\": \"ROD\", \"quantity\": -1}]",
        );
        assert!(Datasheet::from_json(&json).is_err());
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let yaml = "well_id: PZ-9\nbattery: B\nequipment: E\ncurrent_tubing: []\n\
                    final_tubing: []\ncurrent_rods: []\nfinal_rods:\n  - element: ROD\n    quantity: 3\n";
        let path = dir.path().join("sheet.yml");
        std::fs::write(&path, yaml).unwrap();
        let sheet = Datasheet::load(&path).unwrap();
        assert_eq!(sheet.final_rods[0].quantity, Some(3));

        let other = dir.path().join("sheet.xlsx");
        std::fs::write(&other, "binary").unwrap();
        assert!(matches!(
            Datasheet::load(&other),
            Err(PullingError::InvalidDatasheet(_))
        ));
    }

    #[test]
    fn zero_quantity_is_not_counted() {
        assert!(!ElementRow::new("ROD").with_quantity(0).is_counted());
        assert!(!ElementRow::new("ROD").is_counted());
        assert!(ElementRow::new("ROD").with_quantity(1).is_counted());
    }

    #[test]
    fn comment_contains_is_case_insensitive() {
        let row = ElementRow::new("TUBING").with_comment("saca en doble");
        assert!(row.comment_contains("SACA"));
        assert!(!ElementRow::new("TUBING").comment_contains("SACA"));
    }
}
