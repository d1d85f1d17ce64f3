//! Free-text tag normalization.
//!
//! Planners steer the program through keywords typed into comment, motive and
//! requirement cells ("SACA EN DOBLE", "BAJA EN SIMPLE", "PESCA DE VARILLA",
//! ...). Every branch decision reads those keywords through this module, as
//! an explicit [`Tag`], instead of re-scanning raw text.

use crate::datasheet::{Datasheet, ElementRow};
use crate::types::TripMode;
use regex::Regex;
use std::sync::OnceLock;

pub const FISHING_KEYWORD: &str = "PESCA DE VARILLA";
pub const DEWATER_KEYWORD: &str = "SACAR/BAJAR TUBING DESAGOTANDO";

// ---------------------------------------------------------------------------
// Tag / Verb
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    None,
    Simple,
    Double,
    Fishing,
    Dewater,
}

impl Tag {
    /// Trip mode carried by the tag, if any.
    pub fn trip_mode(self) -> Option<TripMode> {
        match self {
            Tag::Simple => Some(TripMode::Simple),
            Tag::Double => Some(TripMode::Double),
            Tag::None | Tag::Fishing | Tag::Dewater => None,
        }
    }

    /// Trip mode carried by the tag, or `default` when it carries none.
    pub fn trip_mode_or(self, default: TripMode) -> TripMode {
        self.trip_mode().unwrap_or(default)
    }
}

/// The operation a comment keyword refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// "SACA": the element comes out of the well.
    Pull,
    /// "BAJA": the element goes into the well.
    Lower,
}

impl Verb {
    pub fn keyword(self) -> &'static str {
        match self {
            Verb::Pull => "SACA",
            Verb::Lower => "BAJA",
        }
    }
}

// ---------------------------------------------------------------------------
// Comment scanning
// ---------------------------------------------------------------------------

static TRIP_RE: OnceLock<Regex> = OnceLock::new();

fn trip_re() -> &'static Regex {
    TRIP_RE.get_or_init(|| {
        Regex::new(r"\b(SACA|BAJA)\s+EN\s+(DOBLE|SIMPLE)\b").expect("trip tag pattern is valid")
    })
}

/// Trip tag of a single comment for `verb`.
///
/// "{VERB} EN DOBLE" gives [`Tag::Double`], "{VERB} EN SIMPLE" gives
/// [`Tag::Simple`]. When a comment names both, double wins. Absent or
/// untagged comments give [`Tag::None`].
pub fn comment_tag(comment: Option<&str>, verb: Verb) -> Tag {
    let Some(text) = comment else {
        return Tag::None;
    };
    let upper = text.to_uppercase();
    let mut tag = Tag::None;
    for caps in trip_re().captures_iter(&upper) {
        if &caps[1] != verb.keyword() {
            continue;
        }
        match &caps[2] {
            "DOBLE" => return Tag::Double,
            _ => tag = Tag::Simple,
        }
    }
    tag
}

/// First trip tag found scanning `rows` in table order.
///
/// This is the single tie-break for every simple/double decision: the first
/// row whose comment carries a trip tag decides, later rows are ignored.
pub fn first_trip_tag<'a, I>(rows: I, verb: Verb) -> Tag
where
    I: IntoIterator<Item = &'a ElementRow>,
{
    rows.into_iter()
        .map(|r| comment_tag(r.comment.as_deref(), verb))
        .find(|t| *t != Tag::None)
        .unwrap_or(Tag::None)
}

/// Trip tag of a comment read from the bare mode keywords.
///
/// Rows already selected by their verb only need "DOBLE" or "SIMPLE"
/// anywhere in the comment ("SACA DOBLE", "SACA EN TIRO DOBLE"). DOBLE is
/// checked first.
pub fn keyword_tag(comment: Option<&str>) -> Tag {
    let Some(text) = comment else {
        return Tag::None;
    };
    let upper = text.to_uppercase();
    if upper.contains("DOBLE") {
        Tag::Double
    } else if upper.contains("SIMPLE") {
        Tag::Simple
    } else {
        Tag::None
    }
}

/// First bare-keyword trip tag scanning `rows` in table order.
pub fn first_keyword_tag<'a, I>(rows: I) -> Tag
where
    I: IntoIterator<Item = &'a ElementRow>,
{
    rows.into_iter()
        .map(|r| keyword_tag(r.comment.as_deref()))
        .find(|t| *t != Tag::None)
        .unwrap_or(Tag::None)
}

// ---------------------------------------------------------------------------
// Metadata scanning
// ---------------------------------------------------------------------------

/// [`Tag::Fishing`] when the motive asks for rod fishing.
pub fn motive_tag(sheet: &Datasheet) -> Tag {
    if sheet.motive_text().to_uppercase().contains(FISHING_KEYWORD) {
        Tag::Fishing
    } else {
        Tag::None
    }
}

/// [`Tag::Dewater`] when a special requirement asks to trip tubing dewatering.
pub fn requirement_tag(sheet: &Datasheet) -> Tag {
    let dewater = sheet
        .special_requirements
        .iter()
        .any(|r| r.to_uppercase().contains(DEWATER_KEYWORD));
    if dewater {
        Tag::Dewater
    } else {
        Tag::None
    }
}

/// Case-insensitive keyword test on free text.
pub fn text_contains(text: &str, keyword: &str) -> bool {
    text.to_uppercase().contains(&keyword.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_tag_reads_verb_specific_phrase() {
        assert_eq!(comment_tag(Some("BAJA EN DOBLE"), Verb::Lower), Tag::Double);
        assert_eq!(comment_tag(Some("baja en simple"), Verb::Lower), Tag::Simple);
        assert_eq!(comment_tag(Some("BAJA EN DOBLE"), Verb::Pull), Tag::None);
        assert_eq!(comment_tag(Some("SACA  EN  DOBLE"), Verb::Pull), Tag::Double);
    }

    #[test]
    fn comment_tag_without_phrase_is_none() {
        assert_eq!(comment_tag(None, Verb::Lower), Tag::None);
        assert_eq!(comment_tag(Some("BAJA"), Verb::Lower), Tag::None);
        assert_eq!(comment_tag(Some("NUEVO"), Verb::Pull), Tag::None);
    }

    #[test]
    fn double_wins_inside_one_comment() {
        assert_eq!(
            comment_tag(Some("SACA EN SIMPLE / SACA EN DOBLE"), Verb::Pull),
            Tag::Double
        );
    }

    #[test]
    fn first_tagged_row_wins() {
        let rows = vec![
            ElementRow::new("TUBING").with_comment("BAJA"),
            ElementRow::new("TUBING").with_comment("BAJA EN SIMPLE"),
            ElementRow::new("TUBING").with_comment("BAJA EN DOBLE"),
        ];
        assert_eq!(first_trip_tag(&rows, Verb::Lower), Tag::Simple);
    }

    #[test]
    fn first_trip_tag_of_untagged_rows_is_none() {
        let rows = vec![ElementRow::new("TUBING"), ElementRow::new("ANCLA")];
        assert_eq!(first_trip_tag(&rows, Verb::Lower), Tag::None);
        assert_eq!(
            first_trip_tag(&rows, Verb::Lower).trip_mode_or(TripMode::Simple),
            TripMode::Simple
        );
    }

    #[test]
    fn keyword_tag_accepts_loose_phrasing() {
        assert_eq!(keyword_tag(Some("SACA DOBLE")), Tag::Double);
        assert_eq!(keyword_tag(Some("saca en tiro doble")), Tag::Double);
        assert_eq!(keyword_tag(Some("SACA SIMPLE")), Tag::Simple);
        assert_eq!(keyword_tag(Some("SIMPLE Y DOBLE")), Tag::Double);
        assert_eq!(keyword_tag(Some("SACA")), Tag::None);
        assert_eq!(keyword_tag(None), Tag::None);
    }

    #[test]
    fn first_keyword_tag_skips_untagged_rows() {
        let rows = vec![
            ElementRow::new("TUBING").with_comment("SACA"),
            ElementRow::new("TUBING").with_comment("SACA SIMPLE"),
            ElementRow::new("TUBING").with_comment("SACA DOBLE"),
        ];
        assert_eq!(first_keyword_tag(&rows), Tag::Simple);
    }

    #[test]
    fn motive_and_requirement_tags() {
        let mut sheet = Datasheet::new("PZ-1", "B", "E");
        assert_eq!(motive_tag(&sheet), Tag::None);
        assert_eq!(requirement_tag(&sheet), Tag::None);

        sheet.motive = Some("Pesca de varilla cortada".to_string());
        sheet.special_requirements =
            vec!["Sacar/Bajar tubing desagotando con copa".to_string()];
        assert_eq!(motive_tag(&sheet), Tag::Fishing);
        assert_eq!(requirement_tag(&sheet), Tag::Dewater);
    }

    #[test]
    fn non_trip_tags_carry_no_mode() {
        assert_eq!(Tag::Fishing.trip_mode(), None);
        assert_eq!(Tag::Dewater.trip_mode(), None);
        assert_eq!(Tag::Double.trip_mode(), Some(TripMode::Double));
    }
}
