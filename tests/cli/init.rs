use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, THEME_CSS, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["input"], "tokens.css");
    assert_eq!(parsed["store"], "tokens.store.json");
    assert_eq!(parsed["aliasScope"], "global");
    assert_eq!(parsed["mergeCollections"], false);

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .tokensyncrc.json\n");
    let content = test.read_file(".tokensyncrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tokensyncrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".tokensyncrc.json already exists"));
    assert_eq!(test.read_file(".tokensyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("tokens.css", THEME_CSS)?;

    let output = test.sync_command().output()?;

    assert!(
        output.status.success(),
        "Sync should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("tokens.store.json").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
