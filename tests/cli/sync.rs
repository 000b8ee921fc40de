use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, THEME_CSS, stderr, stdout};

const STORE: &str = "tokens.store.json";

fn mode_names(store: &Value, collection: usize) -> Vec<String> {
    store["collections"][collection]["modes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

fn variable<'a>(store: &'a Value, name: &str) -> &'a Value {
    store["variables"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"] == name)
        .unwrap()
}

#[test]
fn test_sync_creates_store() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Synchronized 1 collection (1 created), 2 modes created, 3 variables created, 6 values set\n"
    );

    let store = test.read_json(STORE)?;
    assert_eq!(store["collections"][0]["name"], "Theme");
    assert_eq!(mode_names(&store, 0), vec!["Light", "Dark"]);
    assert_eq!(store["variables"].as_array().unwrap().len(), 3);

    Ok(())
}

#[test]
fn test_sync_writes_alias_not_color_copy() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;
    test.sync_command().output()?;

    let store = test.read_json(STORE)?;
    let base_id = variable(&store, "base")["id"].clone();
    let alias = variable(&store, "alias");

    let values = alias["valuesByMode"].as_object().unwrap();
    assert_eq!(values.len(), 2);
    for value in values.values() {
        assert_eq!(value["kind"], "alias");
        assert_eq!(value["value"], base_id);
    }

    let gap = variable(&store, "gap");
    assert_eq!(gap["resolvedType"], "number");
    for value in gap["valuesByMode"].as_object().unwrap().values() {
        assert_eq!(value["value"], 12.0);
    }

    Ok(())
}

#[test]
fn test_sync_twice_creates_nothing_new() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;
    test.sync_command().output()?;
    let first = test.read_file(STORE)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Synchronized 1 collection (0 created), 0 modes created, 0 variables created, 6 values set\n"
    );
    assert_eq!(test.read_file(STORE)?, first);

    Ok(())
}

#[test]
fn test_sync_unresolved_alias_is_not_an_error() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.css",
        "/* Collection name: A */\n/* Mode: M */\n--x: var(--missing);\n",
    )?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with(", 1 unresolved alias\n"));

    let store = test.read_json(STORE)?;
    assert!(
        variable(&store, "x")["valuesByMode"]
            .as_object()
            .unwrap()
            .is_empty()
    );

    Ok(())
}

#[test]
fn test_sync_strict_fails_on_unresolved_alias() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.css",
        "/* Collection name: A */\n/* Mode: M */\n--x: var(--missing);\n",
    )?;

    let output = test.sync_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_sync_alias_scope_collection() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.css",
        "/* Collection name: Primitives */\n/* Mode: Value */\n--blue: #0000ff;\n/* Collection name: Brand */\n/* Mode: Light */\n--accent: var(--blue);\n",
    )?;

    let global = test.sync_command().output()?;
    assert!(!stdout(&global).contains("unresolved"));

    let scoped = test
        .sync_command()
        .args(["--alias-scope", "collection", "--store", "scoped.json"])
        .output()?;
    assert!(stdout(&scoped).ends_with(", 1 unresolved alias\n"));
    assert!(test.root().join("scoped.json").exists());

    Ok(())
}

#[test]
fn test_sync_uses_config_paths() -> Result<()> {
    let test = CliTest::with_file("design/theme.css", THEME_CSS)?;
    test.write_file(
        ".tokensyncrc.json",
        r#"{ "input": "design/theme.css", "store": "variables.json" }"#,
    )?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("variables.json").exists());
    assert!(!test.root().join(STORE).exists());

    Ok(())
}

#[test]
fn test_sync_input_argument_overrides_config() -> Result<()> {
    let test = CliTest::with_file("other.css", THEME_CSS)?;

    let output = test.sync_command().arg("other.css").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join(STORE).exists());

    Ok(())
}

#[test]
fn test_sync_missing_input_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read token source: tokens.css"));
    assert!(!test.root().join(STORE).exists());

    Ok(())
}

#[test]
fn test_sync_invalid_store_file_is_error() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;
    test.write_file(STORE, "{ broken")?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid store file"));
    assert_eq!(test.read_file(STORE)?, "{ broken");

    Ok(())
}

#[test]
fn test_sync_verbose_prints_paths() -> Result<()> {
    let test = CliTest::with_file("tokens.css", THEME_CSS)?;

    let output = test.sync_command().arg("-v").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--> tokens.css => tokens.store.json"));

    Ok(())
}
