//! Locating an element by its opening tag and matching its close by depth.
//!
//! The scanner only understands what it needs to: opening and closing tags of
//! one element name, self-closing tags, and `<!-- -->` comments. Everything
//! else is skipped as text.

use std::ops::Range;

use crate::error::{Result, SpliceError};

/// Byte ranges of an element's opening and matching closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    pub tag: String,
    pub open: Range<usize>,
    pub close: Range<usize>,
}

impl BlockSpan {
    /// The content between the two tags.
    pub fn inner(&self) -> Range<usize> {
        self.open.end..self.close.start
    }
}

/// Extracts the element name from a marker like `<div class="x">`.
pub fn tag_name(marker: &str) -> Result<String> {
    let invalid = || SpliceError::InvalidMarker {
        marker: marker.to_string(),
    };
    let rest = marker.trim_start().strip_prefix('<').ok_or_else(invalid)?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    Ok(name.to_ascii_lowercase())
}

/// 1-based line number of a byte offset.
pub fn line_of(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

fn find_from(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

fn is_name_boundary(byte: Option<&u8>) -> bool {
    matches!(byte, None | Some(b'>' | b'/')) || byte.is_some_and(u8::is_ascii_whitespace)
}

fn starts_with_tag(bytes: &[u8], at: usize, prefix: &[u8], name: &[u8]) -> bool {
    let end = at + prefix.len() + name.len();
    bytes.len() >= end
        && &bytes[at..at + prefix.len()] == prefix
        && bytes[at + prefix.len()..end].eq_ignore_ascii_case(name)
        && is_name_boundary(bytes.get(end))
}

/// Finds the first element opened by `marker` and its matching closing tag.
///
/// # Example
///
/// ```rust
/// use tweak_splice::find_block;
///
/// let html = "<div class=\"a\"><div>inner</div></div><div>after</div>";
/// let block = find_block(html, "<div class=\"a\">").unwrap();
///
/// assert_eq!(&html[block.inner()], "<div>inner</div>");
/// ```
pub fn find_block(text: &str, marker: &str) -> Result<BlockSpan> {
    let tag = tag_name(marker)?;
    let marker = marker.trim();
    let open_start = text.find(marker).ok_or_else(|| SpliceError::MarkerNotFound {
        marker: marker.to_string(),
    })?;

    let bytes = text.as_bytes();
    let name = tag.as_bytes();
    let unbalanced = || SpliceError::Unbalanced {
        tag: tag.clone(),
        line: line_of(text, open_start),
    };

    let open_end = find_from(bytes, open_start + marker.len().saturating_sub(1), b">")
        .ok_or_else(unbalanced)?
        + 1;

    let mut depth = 1usize;
    let mut pos = open_end;
    while let Some(lt) = find_from(bytes, pos, b"<") {
        if bytes[lt..].starts_with(b"<!--") {
            pos = find_from(bytes, lt + 4, b"-->").ok_or_else(unbalanced)? + 3;
            continue;
        }

        // A `<` not followed by a tag start is text, as in `x < 3`.
        let starts_markup = bytes
            .get(lt + 1)
            .is_some_and(|&b| b == b'/' || b == b'!' || b.is_ascii_alphabetic());
        if !starts_markup {
            pos = lt + 1;
            continue;
        }

        let Some(gt) = find_from(bytes, lt, b">") else {
            break;
        };

        if starts_with_tag(bytes, lt, b"</", name) {
            depth -= 1;
            if depth == 0 {
                return Ok(BlockSpan {
                    tag: tag.clone(),
                    open: open_start..open_end,
                    close: lt..gt + 1,
                });
            }
        } else if starts_with_tag(bytes, lt, b"<", name) && bytes[gt - 1] != b'/' {
            depth += 1;
        }
        pos = gt + 1;
    }

    Err(unbalanced())
}
