// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, create_test_file, setup_build_directory};
use anyhow::Result;
use std::fs;
use unhash::{FixOptions, fix_build, load_ignore_patterns};

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_build_directory()?;
    create_ignore_file(
        temp_dir.path(),
        &[
            "# vendored assets keep their names",
            "vendor/",
            "!vendor/shim.js",
            "*.{map,txt}",
            "/static/media/*.svg",
        ],
    )?;

    let patterns = load_ignore_patterns(temp_dir.path())?;

    assert!(patterns.matches("vendor/jquery.0a1b2c3d.js"));
    assert!(!patterns.matches("vendor/shim.js"), "Should respect negation");
    assert!(patterns.matches("static/js/app.a1b2c3d4.js.map"));
    assert!(patterns.matches("robots.txt"));
    assert!(patterns.matches("static/media/logo.1234abcd.svg"));
    assert!(!patterns.matches("other/static/media/logo.svg"));
    assert!(!patterns.matches("static/js/app.a1b2c3d4.js"));
    Ok(())
}

#[test]
fn test_ignored_files_are_neither_renamed_nor_rewritten() -> Result<()> {
    let temp_dir = setup_build_directory()?;
    create_test_file(temp_dir.path(), "vendor/jquery.0a1b2c3d.js", "jq")?;
    create_test_file(
        temp_dir.path(),
        "vendor/demo.html",
        "<script src=\"jquery.0a1b2c3d.js\"></script>",
    )?;
    create_ignore_file(temp_dir.path(), &["vendor/"])?;

    let report = fix_build(temp_dir.path(), &FixOptions::default())?;

    assert_eq!(report.renamed.len(), 3);
    assert!(temp_dir.path().join("vendor/jquery.0a1b2c3d.js").is_file());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("vendor/demo.html"))?,
        "<script src=\"jquery.0a1b2c3d.js\"></script>"
    );
    Ok(())
}
