use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_select_current_interface_language() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["select"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    article
      3  Hallo
    page
      6  Impressum
    ✓ 2 referenceable entities (language: de)
    ");

    Ok(())
}

#[test]
fn test_select_authors_default() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["select", "--restriction", "authors_default"])?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r"
    article
      2  Bonjour
    page
      5  A propos
    ✓ 2 referenceable entities (language: fr)
    ");

    Ok(())
}

#[test]
fn test_select_unrestricted_lists_everything() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["select", "--restriction", ""])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("6 referenceable entities (any language)"));

    Ok(())
}

#[test]
fn test_select_with_match_and_limit() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&[
        "select",
        "--restriction",
        "",
        "--match",
        "a",
        "--operator",
        "STARTS_WITH",
        "--limit",
        "1",
    ])?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r"
    page
      4  About
    ✓ 1 of 2 referenceable entities (any language)
    ");

    Ok(())
}

#[test]
fn test_select_locked_language_matches_nothing() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["select", "--restriction", "und"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "✘ 0 referenceable entities (language: und)"
    );

    Ok(())
}

#[test]
fn test_select_type_without_language_key_is_not_filtered() -> Result<()> {
    let test = CliTest::new()?;
    let config = crate::SITE_CONFIG.replace(r#""targetType": "node""#, r#""targetType": "user""#);
    test.write_file(".reflangrc.json", &config)?;

    let output = test.run(&["select", "--restriction", "fr"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    user
      10  admin
      11  editor
    ✓ 2 referenceable entities (language: fr)
    ");

    Ok(())
}

#[test]
fn test_select_unknown_operator() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["select", "--operator", "LIKE"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown match operator"));

    Ok(())
}
