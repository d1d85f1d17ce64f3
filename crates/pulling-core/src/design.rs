//! Equipment "design" strings: the inventory narrated inside pull and lower
//! maneuvers, e.g. `120 TUBING 2.875 (BAJA EN DOBLE) + 1 ANCLA AT 1180`.
//!
//! All four trip modules share [`build`]; what differs between them is
//! captured in [`DesignOptions`] and nowhere else.

use crate::config::Vocabulary;
use crate::datasheet::ElementRow;
use crate::format;
use crate::types::ElementRole;

pub const TOKEN_SEPARATOR: &str = " + ";
pub const DEPTH_UNIT: &str = "mts";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Table order, shallowest first. Used when narrating what comes out.
    Forward,
    /// Deepest element first. Used when narrating what goes in.
    Reverse,
}

/// Which row comments are echoed in parentheses after the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPolicy {
    Always,
    /// Only comments containing the keyword (case-insensitive).
    Containing(&'static str),
}

/// Per-element replacement of the default attribute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Quantity and name only, no attributes and no comment.
    Bare,
    /// Depth in whole meters instead of the attributes, when a depth is known.
    DepthOnly,
    /// Default attributes plus "AT {depth}" after the diameter.
    AppendDepth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignOptions {
    pub order: RowOrder,
    /// Move the designated pump's token to the end, wherever its row sits.
    pub relocate_pump: bool,
    pub comments: CommentPolicy,
    /// First matching role wins.
    pub overrides: Vec<(ElementRole, Override)>,
}

impl DesignOptions {
    /// Rod string coming out: pump listed last and bare.
    pub fn pull_rods() -> Self {
        Self {
            order: RowOrder::Forward,
            relocate_pump: true,
            comments: CommentPolicy::Containing("SACA"),
            overrides: vec![(ElementRole::PumpModel, Override::Bare)],
        }
    }

    pub fn pull_tubing() -> Self {
        Self {
            order: RowOrder::Forward,
            relocate_pump: false,
            comments: CommentPolicy::Containing("SACA"),
            overrides: Vec::new(),
        }
    }

    /// Tubing going in: deepest first, anchor narrated with its setting depth.
    pub fn lower_tubing() -> Self {
        Self {
            order: RowOrder::Reverse,
            relocate_pump: false,
            comments: CommentPolicy::Containing("BAJA"),
            overrides: vec![(ElementRole::Anchor, Override::AppendDepth)],
        }
    }

    /// Rods going in: deepest first, pump narrated by depth only.
    pub fn lower_rods() -> Self {
        Self {
            order: RowOrder::Reverse,
            relocate_pump: false,
            comments: CommentPolicy::Always,
            overrides: vec![(ElementRole::PumpModel, Override::DepthOnly)],
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Render the inventory of `rows`. Uncounted rows are skipped; no rows gives "".
pub fn build<'a, I>(rows: I, vocabulary: &Vocabulary, opts: &DesignOptions) -> String
where
    I: IntoIterator<Item = &'a ElementRow>,
{
    let mut rows: Vec<&ElementRow> = rows.into_iter().filter(|r| r.is_counted()).collect();
    if opts.order == RowOrder::Reverse {
        rows.reverse();
    }

    let mut tokens = Vec::with_capacity(rows.len());
    let mut relocated = Vec::new();
    for row in rows {
        let token = render_row(row, vocabulary, opts);
        if opts.relocate_pump && vocabulary.matches(ElementRole::PumpModel, &row.element) {
            relocated.push(token);
        } else {
            tokens.push(token);
        }
    }
    tokens.extend(relocated);
    tokens.join(TOKEN_SEPARATOR)
}

fn override_for(row: &ElementRow, vocabulary: &Vocabulary, opts: &DesignOptions) -> Option<Override> {
    opts.overrides
        .iter()
        .find(|(role, _)| vocabulary.matches(*role, &row.element))
        .map(|(_, o)| *o)
}

fn render_row(row: &ElementRow, vocabulary: &Vocabulary, opts: &DesignOptions) -> String {
    let quantity = row.quantity.unwrap_or_default();
    let mut token = format!("{quantity} {}", row.name());

    match (override_for(row, vocabulary, opts), row.depth) {
        (Some(Override::Bare), _) => return token,
        (Some(Override::DepthOnly), Some(depth)) => {
            token.push_str(&format!(" {} {DEPTH_UNIT}", format::whole(depth)));
        }
        (o, _) => {
            let with_depth = o == Some(Override::AppendDepth);
            push_attributes(&mut token, row, with_depth);
        }
    }

    let comment = row.comment_text();
    let echo = match opts.comments {
        CommentPolicy::Always => true,
        CommentPolicy::Containing(keyword) => row.comment_contains(keyword),
    };
    if echo && !comment.is_empty() {
        token.push_str(&format!(" ({comment})"));
    }
    token
}

/// Condition, diameter, depth (when asked), steel grade, coupling, coupling steel.
fn push_attributes(token: &mut String, row: &ElementRow, with_depth: bool) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(c) = &row.condition {
        parts.push(c.trim().to_string());
    }
    if let Some(d) = row.diameter {
        parts.push(format::number(d));
    }
    if with_depth {
        if let Some(depth) = row.depth {
            parts.push(format!("AT {}", format::whole(depth)));
        }
    }
    for text in [&row.steel_grade, &row.coupling, &row.coupling_steel]
        .into_iter()
        .flatten()
    {
        parts.push(text.trim().to_string());
    }
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        token.push(' ');
        token.push_str(&part);
    }
}
