use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

/// The language line of `resolve` output for a restriction.
fn resolved(test: &CliTest, extra: &[&str]) -> Result<String> {
    let mut args = vec!["resolve"];
    args.extend_from_slice(extra);
    let output = test.run(&args)?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(stdout(&output).lines().last().unwrap_or_default().to_string())
}

#[test]
fn test_resolve_each_mode() -> Result<()> {
    let test = CliTest::site()?;

    assert_eq!(resolved(&test, &["--restriction", ""])?, "✓ no language filter");
    assert_eq!(
        resolved(&test, &["--restriction", "site_default"])?,
        "✓ language: en"
    );
    assert_eq!(
        resolved(&test, &["--restriction", "current_interface"])?,
        "✓ language: de"
    );
    assert_eq!(
        resolved(&test, &["--restriction", "authors_default"])?,
        "✓ language: fr"
    );

    Ok(())
}

#[test]
fn test_authors_default_without_preference_uses_interface_language() -> Result<()> {
    let test = CliTest::site()?;

    assert_eq!(
        resolved(&test, &["--restriction", "authors_default", "--user", "newbie"])?,
        "✓ language: de"
    );
    assert_eq!(
        resolved(
            &test,
            &[
                "--restriction",
                "authors_default",
                "--user",
                "newbie",
                "--interface-language",
                "fr"
            ]
        )?,
        "✓ language: fr"
    );

    Ok(())
}

#[test]
fn test_unknown_values_pass_through() -> Result<()> {
    let test = CliTest::site()?;

    assert_eq!(resolved(&test, &["--restriction", "zxx"])?, "✓ language: zxx");
    assert_eq!(
        resolved(&test, &["--restriction", "Site_Default"])?,
        "✓ language: Site_Default"
    );

    Ok(())
}

#[test]
fn test_resolve_verbose_shows_context() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["resolve", "--verbose", "--user", "newbie"])?;
    assert!(output.status.success());

    assert_snapshot!(stdout(&output), @r#"
    interface language: de
    site default language: en
    preferred language: ""
    restriction: current_interface
    ✓ language: de
    "#);

    Ok(())
}

#[test]
fn test_unknown_user_is_an_error() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["resolve", "--user", "ghost"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown user: \"ghost\""));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".reflangrc.json", r#"{ "defaultLanguage": "pt" }"#)?;

    let output = test.run(&["resolve"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("defaultLanguage"));

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("conf/site.json", crate::SITE_CONFIG)?;

    assert_eq!(
        resolved(&test, &["--config", "conf/site.json"])?,
        "✓ language: de"
    );

    Ok(())
}
