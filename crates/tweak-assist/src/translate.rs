//! Turning a free-text request into a narrowly scoped prompt.
//!
//! Known phrases map to hand-written prompts that name the exact selector and
//! forbid touching anything else. Anything unrecognized is wrapped in a
//! generic "change only this" prompt. Prompts are MiniJinja templates so they
//! can refer to the configured file names.

use minijinja::Environment;
use serde::Serialize;

use crate::error::Result;

/// The project files the assistant may be pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub css: String,
    pub html: String,
}

impl Default for ProjectFiles {
    fn default() -> Self {
        Self {
            css: "timeline-aider-practice.css".to_string(),
            html: "timeline-aider-practice.html".to_string(),
        }
    }
}

/// A known phrase and the prompt template it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub phrase: &'static str,
    pub template: &'static str,
}

/// Known phrases, in match order.
pub const TRANSLATIONS: &[Translation] = &[
    Translation {
        phrase: "change border padding",
        template: "In {{ css_file }}, find the .timeline-border-container class and change ONLY the padding value. Do not modify any other properties.",
    },
    Translation {
        phrase: "make filter button blue",
        template: "In {{ css_file }}, find .new-filter-btn and change ONLY the background color to blue. Do not modify other properties.",
    },
    Translation {
        phrase: "add test button",
        template: "In {{ html_file }}, add a button with class 'test-btn' containing text 'Test' after .timeline-container. Do not modify existing elements.",
    },
];

/// Prompt used when no phrase matches.
pub const DEFAULT_TEMPLATE: &str =
    "Make this specific change only: {{ request }}. Do not modify any other code.";

#[derive(Serialize)]
struct PromptContext<'a> {
    request: &'a str,
    css_file: &'a str,
    html_file: &'a str,
}

/// Returns the first known phrase contained in `request`, ignoring case.
pub fn find_translation(request: &str) -> Option<&'static Translation> {
    let request = request.to_lowercase();
    TRANSLATIONS
        .iter()
        .find(|translation| request.contains(translation.phrase))
}

/// Builds the prompt for `request`.
///
/// # Example
///
/// ```rust
/// use tweak_assist::{translate, ProjectFiles};
///
/// let files = ProjectFiles::default();
/// let prompt = translate("rename the nav arrows", &files).unwrap();
/// assert_eq!(
///     prompt,
///     "Make this specific change only: rename the nav arrows. Do not modify any other code."
/// );
/// ```
pub fn translate(request: &str, files: &ProjectFiles) -> Result<String> {
    let template = find_translation(request)
        .map(|translation| translation.template)
        .unwrap_or(DEFAULT_TEMPLATE);

    let env = Environment::new();
    let prompt = env.render_str(
        template,
        PromptContext {
            request,
            css_file: &files.css,
            html_file: &files.html,
        },
    )?;
    Ok(prompt)
}

/// Picks which files to hand over based on words in the request.
///
/// "css" or "style" selects the stylesheet, "html" or "button" the page. A
/// request mentioning neither gets both.
pub fn select_files(request: &str, files: &ProjectFiles) -> Vec<String> {
    let request = request.to_lowercase();
    let mut selected = Vec::new();
    if request.contains("css") || request.contains("style") {
        selected.push(files.css.clone());
    }
    if request.contains("html") || request.contains("button") {
        selected.push(files.html.clone());
    }
    if selected.is_empty() {
        selected = vec![files.css.clone(), files.html.clone()];
    }
    selected
}
