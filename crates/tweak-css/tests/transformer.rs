use std::fs;

use tweak_css::{apply, locate, transform, CssError, Stylesheet, TransformAction};

const DEV_CSS: &str = "\
.timeline-container {
    width: 1200px;
    padding-left: 40px;
}

.timeline-border-container {
    border-width: 2px;
}

.new-filter-btn {
    top: 35px;
    font-size: 14px;
}

.timeline-container {
    width: 1200px;
}
";

#[test]
fn test_documented_examples() {
    assert_eq!(transform("10px", TransformAction::Shrink), "5px");
    assert_eq!(transform("1px", TransformAction::Shrink), "1px");
    assert_eq!(transform("10px 20px", TransformAction::Grow), "15px 30px");
}

#[test]
fn test_missing_padding_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline-dev.css");
    fs::write(&path, DEV_CSS).unwrap();

    assert_eq!(
        locate(".timeline-border-container", "padding", DEV_CSS).unwrap(),
        None
    );

    let mut sheet = Stylesheet::open(&path).unwrap();
    let err = sheet
        .nudge(
            ".timeline-border-container",
            &["padding"],
            TransformAction::Shrink,
        )
        .unwrap_err();
    assert!(matches!(err, CssError::NotFound { .. }));
    assert!(!sheet.save().unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), DEV_CSS);
}

#[test]
fn test_second_identical_block_is_byte_for_byte_unchanged() {
    let updated = apply(".timeline-container", "width", "1800px", DEV_CSS).unwrap();

    let second = ".timeline-container {\n    width: 1200px;\n}\n";
    assert!(DEV_CSS.ends_with(second));
    assert!(updated.ends_with(second));
    assert!(updated.starts_with(".timeline-container {\n    width: 1800px;\n"));
    assert_eq!(updated.len(), DEV_CSS.len());
}

#[test]
fn test_fix_widens_timeline_and_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline-dev.css");
    fs::write(&path, DEV_CSS).unwrap();

    let mut sheet = Stylesheet::open(&path).unwrap();
    let fix = sheet.fix("make timeline wider").unwrap();
    assert_eq!(fix.edit.property, "width");
    assert_eq!(fix.edit.old_value, "1200px");
    assert_eq!(fix.edit.new_value, "1800px");
    assert!(sheet.save().unwrap());

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("1800px").count(), 1);
    assert_eq!(written.matches("1200px").count(), 1);
}

#[test]
fn test_fix_smaller_filter_font() {
    let mut sheet = Stylesheet::from_source("dev.css", DEV_CSS);
    let fix = sheet.fix("make the filter smaller").unwrap();

    assert_eq!(fix.edit.selector, ".new-filter-btn");
    assert_eq!(fix.edit.property, "font-size");
    assert_eq!(fix.edit.new_value, "7px");
    assert!(sheet.source().contains("top: 35px;"));
}
