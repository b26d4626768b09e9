//! Keyword tables for natural-language requests.
//!
//! A request such as `"make the border thinner"` is interpreted with two
//! static, ordered tables: one maps element words to a selector, the other
//! maps action words to a [`TransformAction`] and the properties worth trying.
//! Matching is a case-insensitive substring test and the first row wins, so
//! table order matters (`"timeline border"` resolves to the border).

use crate::value::TransformAction;

/// An element word and the selector it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementKeyword {
    pub keyword: &'static str,
    pub selector: &'static str,
}

/// An action word, how it scales values, and the properties it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionKeyword {
    pub keyword: &'static str,
    pub action: TransformAction,
    /// Candidate properties, tried in order.
    pub properties: &'static [&'static str],
}

/// Element words, in match order.
pub const ELEMENTS: &[ElementKeyword] = &[
    ElementKeyword {
        keyword: "border",
        selector: ".timeline-border-container",
    },
    ElementKeyword {
        keyword: "timeline",
        selector: ".timeline-container",
    },
    ElementKeyword {
        keyword: "filter",
        selector: ".new-filter-btn",
    },
    ElementKeyword {
        keyword: "arrow",
        selector: ".nav-arrow",
    },
    ElementKeyword {
        keyword: "event",
        selector: ".timeline-event",
    },
    ElementKeyword {
        keyword: "viewport",
        selector: ".timeline-viewport",
    },
];

const THICKNESS: &[&str] = &["padding", "border-width", "height"];
const BREADTH: &[&str] = &["width", "padding-left", "padding-right"];
const OFFSET: &[&str] = &["top", "margin-top", "transform"];
const SIZE: &[&str] = &["font-size", "width", "height", "scale"];
const SHADE: &[&str] = &["opacity", "background-color", "filter"];
const GLOW: &[&str] = &["box-shadow", "filter", "text-shadow"];

/// Action words, in match order.
pub const ACTIONS: &[ActionKeyword] = &[
    ActionKeyword {
        keyword: "thinner",
        action: TransformAction::Shrink,
        properties: THICKNESS,
    },
    ActionKeyword {
        keyword: "thicker",
        action: TransformAction::Grow,
        properties: THICKNESS,
    },
    ActionKeyword {
        keyword: "wider",
        action: TransformAction::Grow,
        properties: BREADTH,
    },
    ActionKeyword {
        keyword: "narrower",
        action: TransformAction::Shrink,
        properties: BREADTH,
    },
    ActionKeyword {
        keyword: "down",
        action: TransformAction::Grow,
        properties: OFFSET,
    },
    ActionKeyword {
        keyword: "up",
        action: TransformAction::Shrink,
        properties: OFFSET,
    },
    ActionKeyword {
        keyword: "bigger",
        action: TransformAction::Grow,
        properties: SIZE,
    },
    ActionKeyword {
        keyword: "smaller",
        action: TransformAction::Shrink,
        properties: SIZE,
    },
    ActionKeyword {
        keyword: "darker",
        action: TransformAction::None,
        properties: SHADE,
    },
    ActionKeyword {
        keyword: "lighter",
        action: TransformAction::None,
        properties: SHADE,
    },
    ActionKeyword {
        keyword: "glow",
        action: TransformAction::None,
        properties: GLOW,
    },
];

/// What a request resolved to. Either half may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest {
    pub element: Option<&'static ElementKeyword>,
    pub action: Option<&'static ActionKeyword>,
}

/// Matches a free-text request against [`ELEMENTS`] and [`ACTIONS`].
///
/// # Example
///
/// ```rust
/// use tweak_css::{parse_request, TransformAction};
///
/// let parsed = parse_request("Make the border THINNER please");
/// assert_eq!(parsed.element.unwrap().selector, ".timeline-border-container");
/// assert_eq!(parsed.action.unwrap().action, TransformAction::Shrink);
/// ```
pub fn parse_request(request: &str) -> ParsedRequest {
    let request = request.to_lowercase();
    ParsedRequest {
        element: ELEMENTS.iter().find(|row| request.contains(row.keyword)),
        action: ACTIONS.iter().find(|row| request.contains(row.keyword)),
    }
}

/// Element words, for "try one of" hints.
pub fn element_keywords() -> Vec<&'static str> {
    ELEMENTS.iter().map(|row| row.keyword).collect()
}

/// Action words, for "try one of" hints.
pub fn action_keywords() -> Vec<&'static str> {
    ACTIONS.iter().map(|row| row.keyword).collect()
}
