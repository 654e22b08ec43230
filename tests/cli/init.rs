use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .nestcommentrc.json"));

    let content = test.read_file(".nestcommentrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed["extensions"].is_object());
    assert_eq!(parsed["perLine"], Value::Bool(false));
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".nestcommentrc.json", "{}")?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".nestcommentrc.json already exists"));
    assert_eq!(test.read_file(".nestcommentrc.json")?, "{}");

    Ok(())
}
