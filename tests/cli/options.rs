use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_options_lists_modes_then_languages() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["options"])?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r#"
      ""                 No restrictions
      site_default       Site's default language (English)
    * current_interface  Interface text language selected for page
      authors_default    Author's preferred language
      en                 English
      fr                 French
      de                 German
      und                - Not specified -
      zxx                - Not applicable -
    "#);

    Ok(())
}

#[test]
fn test_options_json_keeps_order() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["options", "--json"])?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let keys: Vec<&str> = parsed
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(
        keys,
        vec![
            "",
            "site_default",
            "current_interface",
            "authors_default",
            "en",
            "fr",
            "de",
            "und",
            "zxx"
        ]
    );

    Ok(())
}

#[test]
fn test_form_json_ends_with_restriction_select() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["form", "--json"])?;
    assert!(output.status.success());

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let elements = parsed.as_array().cloned().unwrap_or_default();
    let names: Vec<&str> = elements
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names, vec!["target_bundles", "sort", "language_restriction"]);

    let restriction = &elements[2];
    assert_eq!(restriction["type"], "select");
    assert_eq!(restriction["title"], "Restrict available items by language");
    assert_eq!(restriction["default_value"], "current_interface");
    assert_eq!(restriction["options"]["zxx"], "- Not applicable -");

    Ok(())
}

#[test]
fn test_form_text_marks_selected_restriction() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["form", "--restriction", "fr"])?;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Restrict available items by language [language_restriction]  select"));
    assert!(text.contains("* fr "));

    Ok(())
}

#[test]
fn test_query_shows_language_condition() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["query", "--restriction", "fr", "--match", "bon"])?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r#"
    FROM node
      WHERE title CONTAINS "bon"
      AND langcode = "fr"
    "#);

    Ok(())
}

#[test]
fn test_query_without_restriction_has_no_language_condition() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["query", "--restriction", ""])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "FROM node");

    Ok(())
}
