use crate::error::Result;
use crate::program::EvalContext;
use crate::types::{Maneuver, ManeuverRecord};

const RIG_DOWN: &str = "Condition wellhead, leftover material and location, install rod rotator \
and surface accessories. Rig down. Notify Coordination and the Pulling Monitoring Room of the end \
of the intervention and the transport to the next location. Issue the location handover record. \
Indicate whether the production bridge remains assembled.";

pub fn generate(_ctx: &EvalContext) -> Result<Vec<ManeuverRecord>> {
    Ok(vec![
        Maneuver::Miscellaneous.record("Miscellaneous tasks."),
        Maneuver::AssembleWellhead.record("Assemble wellhead."),
        Maneuver::RigDown.record(RIG_DOWN),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Vocabulary;
    use crate::datasheet::Datasheet;

    #[test]
    fn three_fixed_records() {
        let sheet = Datasheet::new("PZ-1", "B", "E");
        let v = Vocabulary::default();
        let records = generate(&EvalContext::new(&sheet, &v)).unwrap();
        let names: Vec<&str> = records
            .iter()
            .map(|r| r.normalized_maneuver_name.as_str())
            .collect();
        assert_eq!(names, vec!["MISCELLANEOUS", "ASSEMBLE WELLHEAD", "RIG DOWN"]);
        assert_eq!(records[0].activity_subcode, "SPV");
        assert!(records[2].description.starts_with("Condition wellhead"));
    }
}
