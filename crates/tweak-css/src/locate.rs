//! Text search for a property inside a selector's rule block.
//!
//! Matching is purely textual: the selector is an escaped literal that must be
//! followed by `{`, the block runs to the next `}`, and the property must start
//! a declaration inside that block. Only the first rule block for a selector
//! is ever considered, so later duplicate rules are invisible here.
//!
//! # Example
//!
//! ```rust
//! use tweak_css::{apply, locate};
//!
//! let css = ".card { padding: 10px 20px; }\n.card { padding: 3px; }\n";
//!
//! assert_eq!(locate(".card", "padding", css).unwrap().as_deref(), Some("10px 20px"));
//!
//! let updated = apply(".card", "padding", "5px 10px", css).unwrap();
//! assert_eq!(updated, ".card { padding: 5px 10px; }\n.card { padding: 3px; }\n");
//! ```

use std::ops::Range;

use regex::Regex;

use crate::error::Result;

/// A located property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatch<'a> {
    /// Byte range of the rule block body (between the braces).
    pub block: Range<usize>,
    /// Byte range of the trimmed value.
    pub span: Range<usize>,
    /// The trimmed value text.
    pub value: &'a str,
}

fn block_pattern(selector: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"{}\s*\{{([^}}]*)\}}",
        regex::escape(selector)
    ))?)
}

fn declaration_pattern(property: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"(?:^|[^\w-]){}\s*:\s*([^;]*)",
        regex::escape(property)
    ))?)
}

/// Finds the first `property: value` inside the first `selector { ... }` block.
///
/// The value ends at the next `;` or at the end of the block. Returns `None`
/// if the selector has no block, the block has no such declaration, or the
/// value is blank.
pub fn find_property<'a>(
    source: &'a str,
    selector: &str,
    property: &str,
) -> Result<Option<PropertyMatch<'a>>> {
    let Some(block) = block_pattern(selector)?
        .captures(source)
        .and_then(|caps| caps.get(1))
    else {
        return Ok(None);
    };

    let Some(value) = declaration_pattern(property)?
        .captures(block.as_str())
        .and_then(|caps| caps.get(1))
    else {
        return Ok(None);
    };

    let trimmed = value.as_str().trim_end();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let start = block.start() + value.start();
    Ok(Some(PropertyMatch {
        block: block.range(),
        span: start..start + trimmed.len(),
        value: trimmed,
    }))
}

/// Returns the trimmed value of `property` in the first `selector` block.
pub fn locate(selector: &str, property: &str, source: &str) -> Result<Option<String>> {
    Ok(find_property(source, selector, property)?.map(|found| found.value.to_string()))
}

/// Replaces the value of `property` in the first `selector` block.
///
/// Only the value text up to (not including) the terminating `;` changes;
/// every other byte of `source` is kept. If nothing matches, `source` is
/// returned as is.
pub fn apply(selector: &str, property: &str, new_value: &str, source: &str) -> Result<String> {
    let mut updated = source.to_string();
    if let Some(found) = find_property(source, selector, property)? {
        updated.replace_range(found.span, new_value);
    }
    Ok(updated)
}
