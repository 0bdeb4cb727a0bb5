// tests/integration_tests/full_pass_test.rs
use super::common::{create_test_file, list_files, setup_build_directory};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use unhash::{FixOptions, Policy, contains_hash, fix_build};

#[test]
fn test_app_bundle_reference_is_fixed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "app.a1b2c3d4.js", "console.log(1)")?;
    create_test_file(
        temp_dir.path(),
        "index.html",
        "<script src=\"app.a1b2c3d4.js\"></script>\n",
    )?;

    fix_build(temp_dir.path(), &FixOptions::default())?;

    assert!(temp_dir.path().join("app.js").is_file());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("index.html"))?,
        "<script src=\"app.js\"></script>\n"
    );
    Ok(())
}

#[test]
fn test_double_hashed_asset_matches_its_reference() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "vendor.a1b2c3d4.0a0b0c0d.js", "lib")?;
    create_test_file(
        temp_dir.path(),
        "index.html",
        "<script src=\"vendor.a1b2c3d4.0a0b0c0d.js\"></script>\n",
    )?;

    let report = fix_build(temp_dir.path(), &FixOptions::default())?;

    assert_eq!(report.references_stripped, 2);
    assert_eq!(list_files(temp_dir.path())?, vec!["index.html", "vendor.js"]);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("index.html"))?,
        "<script src=\"vendor.js\"></script>\n"
    );

    let second = fix_build(temp_dir.path(), &FixOptions::default())?;
    assert!(second.is_unchanged());
    Ok(())
}

#[test]
fn test_full_pass_leaves_no_hashes() -> Result<()> {
    let temp_dir = setup_build_directory()?;

    let report = fix_build(temp_dir.path(), &FixOptions::default())?;

    assert_eq!(report.files_scanned, 6);
    assert_eq!(report.renamed.len(), 3);
    assert_eq!(report.references_stripped, 3);
    for name in list_files(temp_dir.path())? {
        assert!(!contains_hash(&name), "{name} still carries a hash");
    }
    let html = fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert!(!contains_hash(&html));
    Ok(())
}

#[test]
fn test_full_pass_twice_is_idempotent() -> Result<()> {
    let temp_dir = setup_build_directory()?;
    fix_build(temp_dir.path(), &FixOptions::default())?;
    let files = list_files(temp_dir.path())?;
    let html = fs::read_to_string(temp_dir.path().join("index.html"))?;

    let second = fix_build(temp_dir.path(), &FixOptions::default())?;

    assert!(second.is_unchanged());
    assert_eq!(list_files(temp_dir.path())?, files);
    assert_eq!(fs::read_to_string(temp_dir.path().join("index.html"))?, html);
    Ok(())
}

#[test]
fn test_hashed_page_is_renamed_then_fixed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "app.a1b2c3d4.js", "1")?;
    create_test_file(
        temp_dir.path(),
        "offline.0a1b2c3d.html",
        "<script src=\"app.a1b2c3d4.js\"></script>",
    )?;

    let report = fix_build(temp_dir.path(), &FixOptions::default())?;

    let page = temp_dir.path().join("offline.html");
    assert_eq!(report.html_fixed, vec![page.clone()]);
    assert_eq!(fs::read_to_string(page)?, "<script src=\"app.js\"></script>");
    Ok(())
}

#[test]
fn test_best_effort_reports_every_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "app.a1b2c3d4.js", "new")?;
    create_test_file(temp_dir.path(), "app.js", "old")?;
    create_test_file(temp_dir.path(), "main.0f1e2d3c.css", "css")?;
    create_test_file(
        temp_dir.path(),
        "index.html",
        "<link href=\"main.0f1e2d3c.css\">",
    )?;
    let options = FixOptions {
        policy: Policy::BestEffort,
        ..FixOptions::default()
    };

    let report = fix_build(temp_dir.path(), &options)?;

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.renamed.len(), 1);
    assert!(temp_dir.path().join("main.css").is_file());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("index.html"))?,
        "<link href=\"main.css\">"
    );
    Ok(())
}
