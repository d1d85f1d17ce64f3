//! Tubing anchor setting: tension to pull on the string and the stretch it
//! produces, both quoted in the lowering maneuver.

use crate::config::Vocabulary;
use crate::datasheet::ElementRow;
use crate::error::{PullingError, Result};
use crate::format;
use crate::types::ElementRole;

/// Dynamic fluid level assumed above the anchor, meters.
pub const DYNAMIC_LEVEL_OFFSET_M: f64 = 200.0;
pub const FEET_PER_METER: f64 = 3.28084;
pub const POISSON_RATIO: f64 = 0.3;
/// psi/ft
pub const FLUID_GRADIENT: f64 = 0.5;
pub const YOUNG_MODULUS_PSI: f64 = 30_000_000.0;
/// 1/°F
pub const THERMAL_EXPANSION: f64 = 0.0000069;
pub const SURFACE_TEMPERATURE: f64 = 30.0;
pub const MEAN_TEMPERATURE: f64 = 15.0;
/// Stretch in inches per 1000 ft per 1000 lbs.
pub const STRETCH_COEFFICIENT: f64 = 0.22;

/// Tubing wall cross-section factor for the thermal term. Not yet defined by
/// the field procedure; zero keeps the thermal term out of the total.
pub const WALL_SECTION_FACTOR: f64 = 0.0;

// ---------------------------------------------------------------------------
// AnchorSetting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSetting {
    pub anchor_depth_m: f64,
    pub dynamic_level_m: f64,
    pub dynamic_level_ft: f64,
    /// Tubing cross-section, square inches. Zero when no TUBING row is found.
    pub area: f64,
    /// lbs
    pub tension: f64,
    /// inches
    pub stretch: f64,
}

impl AnchorSetting {
    pub fn compute(anchor_depth_m: f64, tubing_diameter: Option<f64>) -> Result<Self> {
        if !anchor_depth_m.is_finite() || anchor_depth_m <= 0.0 {
            return Err(PullingError::AnchorDepthUnresolved);
        }
        let dynamic_level_m = anchor_depth_m - DYNAMIC_LEVEL_OFFSET_M;
        let dynamic_level_ft = dynamic_level_m * FEET_PER_METER;

        let area = tubing_diameter
            .map(|d| std::f64::consts::PI * d.powi(2) / 4.0)
            .unwrap_or(0.0);

        let piston = area
            * dynamic_level_ft
            * FLUID_GRADIENT
            * ((POISSON_RATIO * dynamic_level_ft / anchor_depth_m) + (1.0 - 2.0 * POISSON_RATIO));
        // Thermal and wall-stress corrections evaluate to zero until their
        // inputs are defined.
        let thermal = YOUNG_MODULUS_PSI
            * THERMAL_EXPANSION
            * ((SURFACE_TEMPERATURE - MEAN_TEMPERATURE) / 2.0)
            * area
            * WALL_SECTION_FACTOR;
        let wall_stress = 0.0;
        let tension = piston + thermal - wall_stress;

        let stretch = STRETCH_COEFFICIENT * (dynamic_level_ft / 1000.0) * (tension / 1000.0);

        Ok(Self {
            anchor_depth_m,
            dynamic_level_m,
            dynamic_level_ft,
            area,
            tension,
            stretch,
        })
    }

    /// Resolve depth and tubing diameter from an installation table and compute.
    pub fn for_rows(rows: &[ElementRow], vocabulary: &Vocabulary) -> Result<Self> {
        let depth = resolve_anchor_depth(rows, vocabulary)?;
        Self::compute(depth, tubing_diameter(rows, vocabulary))
    }

    /// Tension rounded to whole pounds.
    pub fn tension_text(&self) -> String {
        format::fixed(self.tension, 0)
    }

    /// Stretch rounded to hundredths of an inch.
    pub fn stretch_text(&self) -> String {
        format::fixed(self.stretch, 2)
    }

    pub fn sentence(&self) -> String {
        format!(
            "Set anchor with {} lbs and {} in of stretch.",
            self.tension_text(),
            self.stretch_text()
        )
    }
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

fn first_depth(rows: &[ElementRow], vocabulary: &Vocabulary, role: ElementRole) -> Option<f64> {
    rows.iter()
        .filter(|r| vocabulary.matches(role, &r.element))
        .filter_map(|r| r.depth)
        .find(|d| d.is_finite() && *d > 0.0)
}

/// Anchor row depth, else shoe depth, else the first pump-bearing row's depth.
pub fn resolve_anchor_depth(rows: &[ElementRow], vocabulary: &Vocabulary) -> Result<f64> {
    [ElementRole::Anchor, ElementRole::Shoe, ElementRole::Pump]
        .into_iter()
        .find_map(|role| first_depth(rows, vocabulary, role))
        .ok_or(PullingError::AnchorDepthUnresolved)
}

/// Outer diameter of the first TUBING row carrying one.
pub fn tubing_diameter(rows: &[ElementRow], vocabulary: &Vocabulary) -> Option<f64> {
    rows.iter()
        .filter(|r| vocabulary.matches(ElementRole::Tubing, &r.element))
        .find_map(|r| r.diameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-6
    }

    #[test]
    fn reference_case_1000m_2in() {
        let s = AnchorSetting::compute(1000.0, Some(2.0)).unwrap();
        assert!(close(s.dynamic_level_ft, 2624.672));
        assert!(close(s.area, std::f64::consts::PI));
        assert!(close(s.tension, 4895.449163768235));
        assert!(close(s.stretch, 2.826768636464498));
        assert_eq!(s.tension_text(), "4895");
        assert_eq!(s.stretch_text(), "2.83");
    }

    #[test]
    fn reference_case_1500m_2_875in() {
        let s = AnchorSetting::compute(1500.0, Some(2.875)).unwrap();
        assert!(close(s.tension, 17346.8824586658));
        assert!(close(s.stretch, 16.27693091186708));
        assert_eq!(
            s.sentence(),
            "Set anchor with 17347 lbs and 16.28 in of stretch."
        );
    }

    #[test]
    fn missing_tubing_gives_zero_area_not_an_error() {
        let s = AnchorSetting::compute(1000.0, None).unwrap();
        assert_eq!(s.area, 0.0);
        assert_eq!(s.tension, 0.0);
        assert_eq!(s.tension_text(), "0");
        assert_eq!(s.stretch_text(), "0.00");
    }

    #[test]
    fn non_positive_depth_is_unresolved() {
        assert!(matches!(
            AnchorSetting::compute(0.0, Some(2.0)),
            Err(PullingError::AnchorDepthUnresolved)
        ));
    }

    #[test]
    fn depth_priority_anchor_then_shoe_then_pump() {
        let v = Vocabulary::default();
        let mut rows = vec![
            ElementRow::new("BOMBA TUBING PUMP").with_depth(1210.0),
            ElementRow::new("ZAPATO").with_depth(1250.0),
            ElementRow::new("ANCLA"),
        ];
        assert_eq!(resolve_anchor_depth(&rows, &v).unwrap(), 1250.0);

        rows[2].depth = Some(1180.0);
        assert_eq!(resolve_anchor_depth(&rows, &v).unwrap(), 1180.0);

        rows[1].depth = None;
        rows[2].depth = None;
        assert_eq!(resolve_anchor_depth(&rows, &v).unwrap(), 1210.0);
    }

    #[test]
    fn no_depth_anywhere_is_a_configuration_error() {
        let v = Vocabulary::default();
        let rows = vec![
            ElementRow::new("TUBING").with_diameter(2.875),
            ElementRow::new("ANCLA"),
        ];
        assert!(matches!(
            AnchorSetting::for_rows(&rows, &v),
            Err(PullingError::AnchorDepthUnresolved)
        ));
    }

    #[test]
    fn for_rows_uses_tubing_diameter() {
        let v = Vocabulary::default();
        let rows = vec![
            ElementRow::new("TUBING").with_diameter(2.0).with_quantity(110),
            ElementRow::new("ANCLA").with_depth(1000.0),
        ];
        let s = AnchorSetting::for_rows(&rows, &v).unwrap();
        assert_eq!(s.tension_text(), "4895");
    }
}
