use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("languages").is_some(),
        "Config should have 'languages' field"
    );
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["selection"]["targetType"], "node");
    assert_eq!(parsed["selection"]["languageRestriction"], "");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .reflangrc.json"));

    assert!(test.root().join(".reflangrc.json").exists());
    let content = test.read_file(".reflangrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".reflangrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".reflangrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".reflangrc.json", "{}")?;

    let output = test.run(&["init", "--force"])?;
    assert!(output.status.success());
    assert_config_content(&test.read_file(".reflangrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;

    let output = test.run(&["resolve"])?;
    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("no language filter"));

    Ok(())
}
