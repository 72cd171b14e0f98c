use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .translocrc.json\n");

    let content = test.read_file(".translocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceRoot"], "./lang");
    assert_eq!(parsed["outputRoot"], "./public/locales");
    assert_eq!(parsed["versions"], true);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".translocrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: .translocrc.json already exists\n");
    assert_eq!(test.read_file(".translocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("lang/en/auth.json", r#"{ "failed": "Nope." }"#)?;

    let output = test.export_command().output()?;
    assert!(
        output.status.success(),
        "Export should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("public/locales/en/auth.json").exists());

    Ok(())
}
