//! Command handlers.
//!
//! Each handler reports to a [`Report`] and returns the process exit code.
//! Expected failures (nothing matched, an unrecognized request, a missing
//! marker) are reported as status lines and exit 1. Anything else, like an
//! unreadable file, propagates as an error.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, info};
use tweak_assist::{select_files, translate, AssistError};
use tweak_css::request::{action_keywords, element_keywords};
use tweak_css::{parse_request, CssError, Edit, Stylesheet, TransformAction};
use tweak_splice::{default_output_path, splice_files, SpliceError};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::report::Report;

pub fn run<W: Write>(cli: Cli, report: &mut Report<W>) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    dispatch(cli.command, &config, report)
}

pub fn dispatch<W: Write>(
    command: Command,
    config: &Config,
    report: &mut Report<W>,
) -> Result<ExitCode> {
    match command {
        Command::Fix {
            request,
            file,
            dry_run,
        } => fix(report, config, &request.join(" "), config.stylesheet(file), dry_run),
        Command::Get {
            selector,
            property,
            file,
        } => get(report, &config.stylesheet(file), &selector, &property),
        Command::Nudge {
            selector,
            property,
            action,
            file,
            dry_run,
        } => nudge(
            report,
            config,
            config.stylesheet(file),
            &selector,
            &property,
            action,
            dry_run,
        ),
        Command::Splice {
            source,
            target,
            marker,
            output,
            in_place,
        } => {
            let target = config.splice_target(target);
            let output = if in_place {
                target.clone()
            } else {
                output.unwrap_or_else(|| default_output_path(&target))
            };
            splice(report, &target, &source, &config.splice_marker(marker), &output)
        }
        Command::Ask { request, dry_run } => ask(report, config, &request.join(" "), dry_run),
    }
}

fn fix<W: Write>(
    report: &mut Report<W>,
    config: &Config,
    request: &str,
    path: PathBuf,
    dry_run: bool,
) -> Result<ExitCode> {
    report.field("Processing", request)?;
    let mut sheet = Stylesheet::open(&path)?;

    let parsed = parse_request(request);
    let Some(element) = parsed.element else {
        let request = request.to_string();
        return css_failure(report, CssError::UnrecognizedElement { request });
    };
    report.field("Target", element.selector)?;

    let Some(action) = parsed.action else {
        let request = request.to_string();
        return css_failure(report, CssError::UnrecognizedAction { request });
    };
    report.field("Action", action.keyword)?;
    report.field("Checking properties", action.properties.join(", "))?;

    match sheet.nudge(element.selector, action.properties, action.action) {
        Ok(edit) => finish_edit(report, config, &mut sheet, &edit, dry_run),
        Err(err) => css_failure(report, err),
    }
}

fn get<W: Write>(
    report: &mut Report<W>,
    path: &Path,
    selector: &str,
    property: &str,
) -> Result<ExitCode> {
    let sheet = Stylesheet::open(path)?;
    match sheet.get(selector, property)? {
        Some(value) => {
            report.raw(&value)?;
            Ok(ExitCode::SUCCESS)
        }
        None => css_failure(
            report,
            CssError::NotFound {
                selector: selector.to_string(),
                properties: vec![property.to_string()],
            },
        ),
    }
}

fn nudge<W: Write>(
    report: &mut Report<W>,
    config: &Config,
    path: PathBuf,
    selector: &str,
    property: &str,
    action: TransformAction,
    dry_run: bool,
) -> Result<ExitCode> {
    let mut sheet = Stylesheet::open(&path)?;
    report.field("Target", selector)?;
    report.field("Action", action)?;

    match sheet.nudge(selector, &[property], action) {
        Ok(edit) => finish_edit(report, config, &mut sheet, &edit, dry_run),
        Err(err) => css_failure(report, err),
    }
}

/// Reports an edit and saves the stylesheet unless this is a dry run.
fn finish_edit<W: Write>(
    report: &mut Report<W>,
    config: &Config,
    sheet: &mut Stylesheet,
    edit: &Edit,
    dry_run: bool,
) -> Result<ExitCode> {
    report.field("Found", format!("{}: {}", edit.property, edit.old_value))?;

    if !edit.changed() {
        if edit.action == TransformAction::None {
            report.note("Action 'none' leaves values as they are; nothing written")?;
        } else {
            report.note("Value is already at its limit; nothing written")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    if dry_run {
        report.field("Would change to", &edit.new_value)?;
        report.note(format!("Dry run: {} not written", sheet.path().display()))?;
        return Ok(ExitCode::SUCCESS);
    }

    sheet.save()?;
    report.success(format!("Changed to: {}", edit.new_value))?;
    if let Some(url) = &config.preview_url {
        report.note(format!("Check {}", url))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Turns expected stylesheet failures into status lines.
fn css_failure<W: Write>(report: &mut Report<W>, err: CssError) -> Result<ExitCode> {
    match &err {
        CssError::UnrecognizedElement { .. } => {
            report.failure(&err)?;
            report.note(format!("Try: {}", element_keywords().join(", ")))?;
        }
        CssError::UnrecognizedAction { .. } => {
            report.failure(&err)?;
            report.note(format!("Try: {}", action_keywords().join(", ")))?;
        }
        CssError::NotFound { .. }
        | CssError::NoNumericValue { .. }
        | CssError::InvalidAction(_) => report.failure(&err)?,
        CssError::Pattern(_) | CssError::Io { .. } => return Err(err.into()),
    }
    debug!(error = %err, "request not applied");
    Ok(ExitCode::FAILURE)
}

fn splice<W: Write>(
    report: &mut Report<W>,
    target: &Path,
    source: &Path,
    marker: &str,
    output: &Path,
) -> Result<ExitCode> {
    report.field("Marker", marker)?;
    match splice_files(target, source, marker, output) {
        Ok(spliced) => {
            report.field(
                "Replaced",
                format!(
                    "{} lines {}-{}",
                    target.display(),
                    spliced.open_line,
                    spliced.close_line
                ),
            )?;
            report.success(format!("Wrote {}", output.display()))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ SpliceError::Io { .. }) => Err(err.into()),
        Err(err) => {
            report.failure(&err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn ask<W: Write>(
    report: &mut Report<W>,
    config: &Config,
    request: &str,
    dry_run: bool,
) -> Result<ExitCode> {
    let files = config.project_files();
    let prompt = translate(request, &files)?;
    let selected = select_files(request, &files);
    let assistant = config.assistant();

    report.field("Request", request)?;
    report.field("Prompt", &prompt)?;
    report.field("Files", selected.join(", "))?;

    if dry_run {
        report.field("Command", assistant.command_line(&selected).join(" "))?;
        return Ok(ExitCode::SUCCESS);
    }

    info!(program = %assistant.program, "running assistant");
    match assistant.run(&prompt, &selected) {
        Ok(output) => {
            report.success("Assistant finished")?;
            report.raw(&output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ (AssistError::Spawn { .. } | AssistError::Failed { .. })) => {
            report.failure(&err)?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn plain() -> Report<Vec<u8>> {
        Report::new(Vec::new(), false)
    }

    fn output(report: Report<Vec<u8>>) -> String {
        String::from_utf8(report.into_inner()).unwrap()
    }

    fn sheet_in(dir: &Path, css: &str) -> PathBuf {
        let path = dir.join("timeline-dev.css");
        fs::write(&path, css).unwrap();
        path
    }

    #[test]
    fn test_fix_writes_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = sheet_in(dir.path(), ".timeline-border-container { padding: 10px 100px; }");
        let config = Config {
            preview_url: Some("http://localhost:8000/".to_string()),
            ..Config::default()
        };

        let mut report = plain();
        let code = fix(&mut report, &config, "make the border thinner", path.clone(), false).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ".timeline-border-container { padding: 5px 50px; }"
        );
        let out = output(report);
        assert!(out.contains("Target: .timeline-border-container"));
        assert!(out.contains("Found: padding: 10px 100px"));
        assert!(out.contains("Changed to: 5px 50px"));
        assert!(out.contains("Check http://localhost:8000/"));
    }

    #[test]
    fn test_fix_dry_run_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let css = ".timeline-border-container { padding: 10px 100px; }";
        let path = sheet_in(dir.path(), css);

        let mut report = plain();
        let code = fix(&mut report, &Config::default(), "border thinner", path.clone(), true).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(fs::read_to_string(&path).unwrap(), css);
        assert!(output(report).contains("Would change to: 5px 50px"));
    }

    #[test]
    fn test_fix_missing_property_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let css = ".timeline-border-container { color: red; }";
        let path = sheet_in(dir.path(), css);

        let mut report = plain();
        let code = fix(&mut report, &Config::default(), "border thinner", path.clone(), false).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(fs::read_to_string(&path).unwrap(), css);
        let out = output(report);
        assert!(out.contains("Target: .timeline-border-container"));
        assert!(out.contains("Action: thinner"));
        assert!(out.contains("Checking properties: padding, border-width, height"));
        assert!(out.contains("no matching property"));
    }

    #[test]
    fn test_fix_unknown_action_still_reports_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = sheet_in(dir.path(), ".nav-arrow { font-size: 24px; }");

        let mut report = plain();
        let code = fix(&mut report, &Config::default(), "arrow sparkle", path, false).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        let out = output(report);
        assert!(out.contains("Target: .nav-arrow"));
        assert!(!out.contains("Action:"));
        assert!(out.contains("could not identify an action"));
    }

    #[test]
    fn test_fix_unknown_element_suggests_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = sheet_in(dir.path(), ".a { width: 1px; }");

        let mut report = plain();
        let code = fix(&mut report, &Config::default(), "make it nicer", path, false).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        let out = output(report);
        assert!(out.contains("could not identify an element"));
        assert!(out.contains("Try: border, timeline, filter"));
    }

    #[test]
    fn test_fix_missing_stylesheet_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = plain();
        let result = fix(
            &mut report,
            &Config::default(),
            "border thinner",
            dir.path().join("absent.css"),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_get_prints_raw_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = sheet_in(dir.path(), ".nav-arrow { font-size: 24px; }");

        let mut report = plain();
        let code = get(&mut report, &path, ".nav-arrow", "font-size").unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(output(report), "24px\n");
    }

    #[test]
    fn test_nudge_none_reports_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let css = ".nav-arrow { font-size: 24px; }";
        let path = sheet_in(dir.path(), css);

        let mut report = plain();
        let code = nudge(
            &mut report,
            &Config::default(),
            path.clone(),
            ".nav-arrow",
            "font-size",
            TransformAction::None,
            false,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(fs::read_to_string(&path).unwrap(), css);
        assert!(output(report).contains("nothing written"));
    }

    #[test]
    fn test_splice_reports_missing_marker() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("page.html");
        let source = dir.path().join("block.html");
        fs::write(&target, "<body><p>hi</p></body>\n").unwrap();
        fs::write(&source, "<ul>\n<li>x</li>\n</ul>\n").unwrap();

        let mut report = plain();
        let code = splice(
            &mut report,
            &target,
            &source,
            "<ul>",
            &dir.path().join("out.html"),
        )
        .unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn test_ask_dry_run_shows_command() {
        let config = Config::default();
        let mut report = plain();
        let code = ask(&mut report, &config, "change border padding to 5px", true).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let out = output(report);
        assert!(out.contains("Prompt: "));
        assert!(out.contains("Command: aider --no-auto-commits"));
    }
}
