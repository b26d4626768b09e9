//! Optional YAML configuration.
//!
//! Looked up as `--config PATH` (which must exist) or `tweak.yaml` in the
//! working directory (which may be absent). Every key is optional and
//! command-line flags win over the file.
//!
//! ```yaml
//! stylesheet: timeline-dev.css
//! preview_url: http://localhost:8000/timeline-dev.html
//! splice:
//!   target: timeline-test-dev.html
//!   marker: '<div class="timeline-milestones">'
//! assistant:
//!   program: aider
//!   args: [--no-auto-commits, --yes, --map-tokens, "2048"]
//!   working_dir: .
//!   css_file: timeline-aider-practice.css
//!   html_file: timeline-aider-practice.html
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use tweak_assist::{Assistant, ProjectFiles};

/// File name looked up in the working directory.
pub const DEFAULT_FILE: &str = "tweak.yaml";
pub const DEFAULT_STYLESHEET: &str = "timeline-dev.css";
pub const DEFAULT_SPLICE_TARGET: &str = "timeline-test-dev.html";
pub const DEFAULT_MARKER: &str = "<div class=\"timeline-milestones\">";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub stylesheet: Option<PathBuf>,
    pub preview_url: Option<String>,
    pub splice: SpliceConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpliceConfig {
    pub target: Option<PathBuf>,
    pub marker: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub working_dir: Option<PathBuf>,
    pub css_file: Option<String>,
    pub html_file: Option<String>,
}

impl Config {
    /// Parses configuration text. Blank text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Loads `explicit` if given, else `tweak.yaml` from `dir` if present.
    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_FILE);
                if !candidate.is_file() {
                    debug!("no {} found, using defaults", DEFAULT_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads configuration relative to the current directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Path::new("."), explicit)
    }

    pub fn stylesheet(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.stylesheet.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEET))
    }

    pub fn splice_target(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.splice.target.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SPLICE_TARGET))
    }

    pub fn splice_marker(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.splice.marker.clone())
            .unwrap_or_else(|| DEFAULT_MARKER.to_string())
    }

    /// The assistant invocation, with defaults for anything unset.
    pub fn assistant(&self) -> Assistant {
        let defaults = Assistant::default();
        Assistant {
            program: self.assistant.program.clone().unwrap_or(defaults.program),
            args: self.assistant.args.clone().unwrap_or(defaults.args),
            working_dir: self.assistant.working_dir.clone(),
        }
    }

    /// The file names prompts refer to, with defaults for anything unset.
    pub fn project_files(&self) -> ProjectFiles {
        let defaults = ProjectFiles::default();
        ProjectFiles {
            css: self.assistant.css_file.clone().unwrap_or(defaults.css),
            html: self.assistant.html_file.clone().unwrap_or(defaults.html),
        }
    }
}
