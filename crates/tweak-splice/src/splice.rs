//! Replacing the inner content of a block.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SpliceError};
use crate::scan::{find_block, line_of};

/// A spliced document and the lines the replaced block spanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    /// 1-based line of the opening tag.
    pub open_line: usize,
    /// 1-based line of the closing tag in the original document.
    pub close_line: usize,
}

fn skip_leading_comments(mut text: &str) -> &str {
    loop {
        let trimmed = text.trim_start();
        let after_comment = trimmed
            .strip_prefix("<!--")
            .and_then(|rest| rest.find("-->").map(|end| &rest[end + 3..]));
        match after_comment {
            Some(rest) => text = rest,
            None => return trimmed,
        }
    }
}

/// Strips the wrapping element from `content` if it is opened by `marker`.
///
/// Leading whitespace and comments are ignored when checking. Content that
/// does not start with the marker is returned as is.
///
/// # Errors
///
/// [`SpliceError::TrailingContent`] if anything other than whitespace or
/// comments follows the wrapper's closing tag.
///
/// # Example
///
/// ```rust
/// use tweak_splice::unwrap_block;
///
/// let content = "<!-- New layout -->\n<ol class=\"m\">\n<li>a</li>\n</ol>\n";
/// assert_eq!(unwrap_block(content, "<ol class=\"m\">").unwrap(), "\n<li>a</li>\n");
/// assert_eq!(unwrap_block("<li>b</li>", "<ol class=\"m\">").unwrap(), "<li>b</li>");
/// ```
pub fn unwrap_block<'a>(content: &'a str, marker: &str) -> Result<&'a str> {
    let body = skip_leading_comments(content);
    if !body.starts_with(marker.trim()) {
        return Ok(content);
    }
    let block = find_block(body, marker)?;
    if !skip_leading_comments(&body[block.close.end..]).is_empty() {
        let offset = content.len() - body.len() + block.close.end;
        return Err(SpliceError::TrailingContent {
            tag: block.tag,
            line: line_of(content, offset),
        });
    }
    debug!(tag = %block.tag, "unwrapped replacement content");
    Ok(&body[block.inner()])
}

fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map_or(0, |nl| nl + 1)
}

/// Replaces the inside of the first block opened by `marker`.
///
/// The opening-tag line and the closing-tag line are kept; everything between
/// them becomes `replacement` (unwrapped and stripped of surrounding blank
/// lines), followed by a newline.
pub fn splice(target: &str, marker: &str, replacement: &str) -> Result<Splice> {
    let block = find_block(target, marker)?;
    let body = unwrap_block(replacement, marker)?.trim_matches(|c| c == '\n' || c == '\r');

    let after_open = &target[block.open.end..];
    let head_end = match after_open.find('\n') {
        Some(nl)
            if block.open.end + nl < block.close.start && after_open[..nl].trim().is_empty() =>
        {
            block.open.end + nl + 1
        }
        _ => block.open.end,
    };

    let close_line_start = line_start(target, block.close.start);
    let tail_start = if close_line_start >= head_end
        && target[close_line_start..block.close.start].trim().is_empty()
    {
        close_line_start
    } else {
        block.close.start
    };

    let mut text = String::with_capacity(target.len() + body.len());
    text.push_str(&target[..head_end]);
    text.push_str(body);
    if !body.is_empty() && tail_start == close_line_start {
        text.push('\n');
    }
    text.push_str(&target[tail_start..]);

    Ok(Splice {
        text,
        open_line: line_of(target, block.open.start),
        close_line: line_of(target, block.close.start),
    })
}

/// The default output path: `<stem>-new.<ext>` next to `target`.
pub fn default_output_path(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match target.extension() {
        Some(ext) => format!("{}-new.{}", stem, ext.to_string_lossy()),
        None => format!("{}-new", stem),
    };
    target.with_file_name(name)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SpliceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Splices `source` into `target` and writes the result to `output`.
///
/// `output` may be the target itself for an in-place edit.
pub fn splice_files(target: &Path, source: &Path, marker: &str, output: &Path) -> Result<Splice> {
    let target_text = read(target)?;
    let source_text = read(source)?;
    let spliced = splice(&target_text, marker, &source_text)?;

    fs::write(output, &spliced.text).map_err(|source| SpliceError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        output = %output.display(),
        open_line = spliced.open_line,
        close_line = spliced.close_line,
        "wrote spliced document"
    );
    Ok(spliced)
}
