use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, THEME_CSS, stderr, stdout};

#[test]
fn test_parse_prints_tree() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;

    let output = test.parse_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Theme
  Light (3 variables)
    --base: #000000  [color]
    --alias: var(--base)  [color]
    --gap: 12px  [number]
  Dark (3 variables)
    --base: #ffffff  [color]
    --alias: var(--base)  [color]
    --gap: 12  [number]
"
    );
    // Parsing never touches the store.
    assert!(!test.root().join("tokens.store.json").exists());

    Ok(())
}

#[test]
fn test_parse_json_output() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;

    let output = test.parse_command().arg("--json").output()?;
    let parsed: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(parsed[0]["name"], "Theme");
    assert_eq!(parsed[0]["modes"][1]["name"], "Dark");
    assert_eq!(parsed[0]["modes"][1]["variables"][1]["name"], "alias");
    assert_eq!(
        parsed[0]["modes"][1]["variables"][1]["rawValue"],
        "var(--base)"
    );

    Ok(())
}

#[test]
fn test_parse_merge_collections() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.css",
        "/* Collection name: A */\n/* Mode: M */\n--a: 1;\n/* Collection name: A */\n/* Mode: M */\n--b: 2;\n",
    )?;

    let split: Value = serde_json::from_str(&stdout(
        &test.parse_command().arg("--json").output()?,
    ))?;
    assert_eq!(split.as_array().unwrap().len(), 2);

    let merged: Value = serde_json::from_str(&stdout(
        &test
            .parse_command()
            .args(["--json", "--merge-collections"])
            .output()?,
    ))?;
    assert_eq!(merged.as_array().unwrap().len(), 1);
    assert_eq!(
        merged[0]["modes"][0]["variables"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    Ok(())
}

#[test]
fn test_parse_without_annotations_warns() -> Result<()> {
    let test = CliTest::with_file("tokens.css", ":root { --a: 1; }\n")?;

    let output = test.parse_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "warning: no collections found in tokens.css\n"
    );

    Ok(())
}
