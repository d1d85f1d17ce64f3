use crate::datasheet::{ElementRow, Section};
use crate::program::EvalContext;
use crate::tags::{text_contains, Verb};
use crate::types::ElementRole;

/// Marker that must appear in the well definition or motive for rod pulling.
pub const BEAM_PUMPING_MARKER: &str = "BM";

// ---------------------------------------------------------------------------
// Row helpers shared with the generators
// ---------------------------------------------------------------------------

pub fn rows_with_role<'a>(
    ctx: &EvalContext<'a>,
    section: Section,
    role: ElementRole,
) -> impl Iterator<Item = &'a ElementRow> + 'a {
    let vocabulary = ctx.vocabulary;
    ctx.sheet
        .section(section)
        .iter()
        .filter(move |r| vocabulary.matches(role, &r.element))
}

pub fn has_role(ctx: &EvalContext, section: Section, role: ElementRole) -> bool {
    rows_with_role(ctx, section, role).next().is_some()
}

pub fn has_role_in(ctx: &EvalContext, sections: &[Section], role: ElementRole) -> bool {
    sections.iter().any(|s| has_role(ctx, *s, role))
}

fn any_comment_contains(ctx: &EvalContext, section: Section, verb: Verb) -> bool {
    ctx.sheet
        .section(section)
        .iter()
        .any(|r| r.comment_contains(verb.keyword()))
}

// ---------------------------------------------------------------------------
// Activation predicates
// ---------------------------------------------------------------------------

/// Rods come out when the well is beam-pumped ("BM" in definition or motive)
/// and some rod, stem or rod segment in the current rod string is marked "SACA".
pub fn pull_rods_active(ctx: &EvalContext) -> bool {
    let beam_pumped = text_contains(ctx.sheet.definition_text(), BEAM_PUMPING_MARKER)
        || text_contains(ctx.sheet.motive_text(), BEAM_PUMPING_MARKER);
    if !beam_pumped {
        return false;
    }
    rows_with_role(ctx, Section::CurrentRods, ElementRole::Rod)
        .any(|r| r.comment_contains(Verb::Pull.keyword()))
}

pub fn pull_tubing_active(ctx: &EvalContext) -> bool {
    any_comment_contains(ctx, Section::CurrentTubing, Verb::Pull)
}

pub fn lower_tubing_active(ctx: &EvalContext) -> bool {
    any_comment_contains(ctx, Section::FinalTubing, Verb::Lower)
}

pub fn lower_rods_active(ctx: &EvalContext) -> bool {
    any_comment_contains(ctx, Section::FinalRods, Verb::Lower)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Vocabulary;
    use crate::datasheet::Datasheet;

    fn ctx_for<'a>(sheet: &'a Datasheet, vocabulary: &'a Vocabulary) -> EvalContext<'a> {
        EvalContext { sheet, vocabulary }
    }

    fn beam_pumped_sheet() -> Datasheet {
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.definition = Some("Productor BM".to_string());
        sheet
    }

    #[test]
    fn pull_rods_needs_beam_marker() {
        let v = Vocabulary::default();
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.current_rods =
            vec![ElementRow::new("VARILLA DE BOMBEO").with_comment("SACA EN DOBLE")];
        assert!(!pull_rods_active(&ctx_for(&sheet, &v)));

        sheet.motive = Some("cambio de bomba bm".to_string());
        assert!(pull_rods_active(&ctx_for(&sheet, &v)));
    }

    #[test]
    fn pull_rods_needs_a_marked_rod_row() {
        let v = Vocabulary::default();
        let mut sheet = beam_pumped_sheet();
        sheet.current_rods = vec![
            ElementRow::new("BOMBA CONVENCIONAL INSERTABLE BM").with_comment("SACA"),
            ElementRow::new("VARILLA DE BOMBEO").with_comment("QUEDA"),
        ];
        assert!(!pull_rods_active(&ctx_for(&sheet, &v)));

        sheet.current_rods.push(ElementRow::new("Vástago").with_comment("saca"));
        assert!(pull_rods_active(&ctx_for(&sheet, &v)));
    }

    #[test]
    fn tubing_and_rod_lowering_read_their_own_sections() {
        let v = Vocabulary::default();
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.final_rods = vec![ElementRow::new("TUBING").with_comment("BAJA EN DOBLE")];
        let ctx = ctx_for(&sheet, &v);
        assert!(!lower_tubing_active(&ctx));
        assert!(lower_rods_active(&ctx));
        assert!(!pull_tubing_active(&ctx));
    }

    #[test]
    fn absent_comments_never_activate() {
        let v = Vocabulary::default();
        let mut sheet = beam_pumped_sheet();
        sheet.current_tubing = vec![ElementRow::new("TUBING").with_quantity(100)];
        sheet.current_rods = vec![ElementRow::new("VARILLA").with_quantity(80)];
        sheet.final_tubing = vec![ElementRow::new("TUBING")];
        sheet.final_rods = vec![ElementRow::new("VARILLA")];
        let ctx = ctx_for(&sheet, &v);
        assert!(!pull_rods_active(&ctx));
        assert!(!pull_tubing_active(&ctx));
        assert!(!lower_tubing_active(&ctx));
        assert!(!lower_rods_active(&ctx));
    }

    #[test]
    fn has_role_in_checks_every_section() {
        let v = Vocabulary::default();
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        sheet.current_tubing = vec![ElementRow::new("CONECTOR ON-OFF")];
        let ctx = ctx_for(&sheet, &v);
        assert!(has_role_in(
            &ctx,
            &[Section::CurrentRods, Section::CurrentTubing],
            ElementRole::OnOff
        ));
        assert!(!has_role(&ctx, Section::CurrentRods, ElementRole::OnOff));
    }
}
