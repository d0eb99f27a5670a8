use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_validate_accepts_ids_in_language() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["validate", "3", "6"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ 3\n✓ 6\n");

    Ok(())
}

#[test]
fn test_validate_rejects_ids_in_other_languages() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["validate", "1", "3", "42"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ 1 is not referenceable\n✓ 3\n✘ 42 is not referenceable\n"
    );

    Ok(())
}

#[test]
fn test_validate_follows_restriction_override() -> Result<()> {
    let test = CliTest::site()?;

    let output = test.run(&["validate", "1", "--restriction", "site_default"])?;
    assert!(output.status.success());

    Ok(())
}
