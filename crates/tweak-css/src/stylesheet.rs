//! Stylesheet files and the nudge workflow.
//!
//! [`Stylesheet`] holds the whole file in memory. Edits rewrite the in-memory
//! text; [`Stylesheet::save`] writes it back in one go. The write is a plain
//! overwrite, not an atomic replace.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{CssError, Result};
use crate::locate::{apply, find_property, locate};
use crate::request::parse_request;
use crate::value::{PropertyValue, TransformAction};

/// The result of a nudge against one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub selector: String,
    pub property: String,
    pub action: TransformAction,
    pub old_value: String,
    pub new_value: String,
}

impl Edit {
    /// Returns `true` if the value text actually changed.
    pub fn changed(&self) -> bool {
        self.old_value != self.new_value
    }
}

/// A natural-language fix: the matched words plus the edit they produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub element_keyword: &'static str,
    pub action_keyword: &'static str,
    pub candidates: &'static [&'static str],
    pub edit: Edit,
}

/// A stylesheet loaded into memory.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    path: PathBuf,
    source: String,
    dirty: bool,
}

impl Stylesheet {
    /// Reads the stylesheet at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let source = fs::read_to_string(&path).map_err(|source| CssError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read stylesheet");
        Ok(Self::from_source(path, source))
    }

    /// Wraps text that is already in memory.
    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if an edit changed the text since it was read.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the current value of `property` in the first `selector` block.
    pub fn get(&self, selector: &str, property: &str) -> Result<Option<String>> {
        locate(selector, property, &self.source)
    }

    /// Scales the first scalable property among `candidates`.
    ///
    /// Candidates are tried in order. A candidate that is missing is skipped;
    /// one that is present but has no numeric token is skipped too. With
    /// [`TransformAction::None`] the first present candidate is reported
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`CssError::NoNumericValue`] if candidates were found but none could be
    /// scaled, [`CssError::NotFound`] if none was found at all.
    pub fn nudge(
        &mut self,
        selector: &str,
        candidates: &[&str],
        action: TransformAction,
    ) -> Result<Edit> {
        let mut unscalable: Option<(String, String)> = None;

        for &property in candidates {
            let Some(found) = find_property(&self.source, selector, property)? else {
                debug!(selector, property, "property not present");
                continue;
            };
            let old_value = found.value.to_string();
            let value = PropertyValue::parse(found.value);

            if action == TransformAction::None {
                return Ok(Edit {
                    selector: selector.to_string(),
                    property: property.to_string(),
                    action,
                    new_value: old_value.clone(),
                    old_value,
                });
            }

            if !value.has_numeric() {
                debug!(selector, property, value = %old_value, "no numeric token, skipping");
                unscalable.get_or_insert((property.to_string(), old_value));
                continue;
            }

            let new_value = value.scaled(action);
            self.source = apply(selector, property, &new_value, &self.source)?;
            self.dirty |= new_value != old_value;
            info!(selector, property, old = %old_value, new = %new_value, "scaled property");

            return Ok(Edit {
                selector: selector.to_string(),
                property: property.to_string(),
                action,
                old_value,
                new_value,
            });
        }

        Err(match unscalable {
            Some((property, value)) => CssError::NoNumericValue {
                selector: selector.to_string(),
                property,
                value,
            },
            None => CssError::NotFound {
                selector: selector.to_string(),
                properties: candidates.iter().map(|p| p.to_string()).collect(),
            },
        })
    }

    /// Interprets a free-text request and nudges the matching property.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweak_css::Stylesheet;
    ///
    /// let mut sheet = Stylesheet::from_source(
    ///     "timeline-dev.css",
    ///     ".timeline-border-container { padding: 1px 100px; }",
    /// );
    /// let fix = sheet.fix("make the border thinner").unwrap();
    ///
    /// assert_eq!(fix.edit.property, "padding");
    /// assert_eq!(fix.edit.new_value, "1px 50px");
    /// ```
    pub fn fix(&mut self, request: &str) -> Result<Fix> {
        let parsed = parse_request(request);
        let element = parsed
            .element
            .ok_or_else(|| CssError::UnrecognizedElement {
                request: request.to_string(),
            })?;
        let action = parsed.action.ok_or_else(|| CssError::UnrecognizedAction {
            request: request.to_string(),
        })?;
        debug!(
            selector = element.selector,
            action = action.keyword,
            "interpreted request"
        );

        let edit = self.nudge(element.selector, action.properties, action.action)?;
        Ok(Fix {
            element_keyword: element.keyword,
            action_keyword: action.keyword,
            candidates: action.properties,
            edit,
        })
    }

    /// Writes the text back if an edit changed it. Returns whether it wrote.
    pub fn save(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        fs::write(&self.path, &self.source).map_err(|source| CssError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "wrote stylesheet");
        self.dirty = false;
        Ok(true)
    }
}
