use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const EN_AUTH: &str = r#"{
    "failed": "These credentials do not match.",
    "throttle": "Too many attempts. Try again in :seconds seconds.",
    "apples": "{0} none|{1} one apple|[2,*] :count apples"
}"#;

const FR_AUTH: &str = r#"{ "failed": "Identifiants incorrects." }"#;

fn two_locales() -> Result<CliTest> {
    let test = CliTest::with_file("lang/en/auth.json", EN_AUTH)?;
    test.write_file("lang/fr/auth.json", FR_AUTH)?;
    Ok(test)
}

#[test]
fn test_export_all_locales() -> Result<()> {
    let test = two_locales()?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
→ Exporting locale: en
   • auth.json
→ Exporting locale: fr
   • auth.json
✓ Exported 2 files across 2 locales
");
    assert_eq!(stderr(&output), "");

    assert_eq!(
        test.read_file("public/locales/en/auth.json")?,
        r#"{
  "failed": "These credentials do not match.",
  "throttle": "Too many attempts. Try again in {{seconds}} seconds.",
  "apples_zero": "none",
  "apples_one": "one apple",
  "apples_other": "{{count}} apples"
}
"#
    );
    assert_eq!(
        test.read_json("public/locales/fr/auth.json")?,
        json!({ "failed": "Identifiants incorrects." })
    );

    Ok(())
}

#[test]
fn test_export_single_locale() -> Result<()> {
    let test = two_locales()?;

    let output = test.export_command().arg("fr").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("public/locales/fr/auth.json").exists());
    assert!(!test.root().join("public/locales/en").exists());

    let versions = test.read_json("public/locales/versions.json")?;
    assert!(versions.get("fr").is_some());
    assert!(versions.get("en").is_none());

    Ok(())
}

#[test]
fn test_export_unknown_locale() -> Result<()> {
    let test = two_locales()?;

    let output = test.export_command().arg("de").output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Locale [de] does not exist in"), "stderr: {}", err);
    assert!(err.contains("(available: en, fr)"));
    assert!(!test.root().join("public").exists());

    Ok(())
}

#[test]
fn test_export_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Source directory"), "stderr: {}", err);
    assert!(err.contains("does not exist"));
    assert!(!test.root().join("public").exists());

    Ok(())
}

#[test]
fn test_export_nested_files_keep_their_path() -> Result<()> {
    let test = CliTest::with_file(
        "lang/en/nested/validation.json",
        r#"{ "required": "The :attribute field is required." }"#,
    )?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("   • nested/validation.json\n"));

    assert_eq!(
        test.read_json("public/locales/en/nested/validation.json")?,
        json!({ "required": "The {{attribute}} field is required." })
    );

    Ok(())
}

#[test]
fn test_export_toml_source() -> Result<()> {
    let test = CliTest::with_file(
        "lang/en/messages.toml",
        r#"
welcome = "Welcome, :Name"

[orders]
count = ":count order|:count orders"
"#,
    )?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("public/locales/en/messages.json")?,
        json!({
            "welcome": "Welcome, {{name, capitalize}}",
            "orders": {
                "count_one": "{{count}} order",
                "count_other": "{{count}} orders"
            }
        })
    );

    Ok(())
}

#[test]
fn test_export_skips_broken_file() -> Result<()> {
    let test = CliTest::with_file("lang/en/auth.json", FR_AUTH)?;
    test.write_file("lang/en/broken.json", "{ not json")?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let err = stderr(&output);
    assert!(err.starts_with("warning: skipped "), "stderr: {}", err);
    assert!(err.contains("broken.json (invalid JSON:"));
    assert!(err.contains("skipped-file"));
    assert!(
        stdout(&output).ends_with("✘ Exported 1 file across 1 locale, 1 problem\n"),
        "stdout: {}",
        stdout(&output)
    );

    assert!(test.root().join("public/locales/en/auth.json").exists());
    assert!(!test.root().join("public/locales/en/broken.json").exists());

    Ok(())
}

#[test]
fn test_export_reports_unsupported_file() -> Result<()> {
    let test = CliTest::with_file("lang/en/auth.json", FR_AUTH)?;
    test.write_file("lang/en/README.md", "# notes")?;

    let output = test.export_command().output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("README.md (unsupported file type"), "stderr: {}", err);
    assert!(err.contains("= hint:"));

    Ok(())
}

#[test]
fn test_strict_fails_on_issues() -> Result<()> {
    let test = CliTest::with_file("lang/en/auth.json", FR_AUTH)?;
    test.write_file("lang/en/broken.json", "[1, 2")?;

    let output = test.export_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));
    // Valid files are still written.
    assert!(test.root().join("public/locales/en/auth.json").exists());

    Ok(())
}

#[test]
fn test_strict_succeeds_without_issues() -> Result<()> {
    let test = CliTest::with_file("lang/en/auth.json", FR_AUTH)?;
    test.write_file("lang/en/.DS_Store", "binary")?;

    let output = test.export_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_versions_ledger_created_and_stable() -> Result<()> {
    let test = two_locales()?;

    test.export_command().output()?;
    let first = test.read_json("public/locales/versions.json")?;

    let en_hash = first["en"]["hash"].as_str().unwrap_or_default();
    assert_eq!(en_hash.len(), 64);
    assert!(en_hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(
        first["en"]["last_updated"]
            .as_str()
            .is_some_and(|ts| ts.ends_with('Z'))
    );
    assert_ne!(first["en"]["hash"], first["fr"]["hash"]);

    let output = test.export_command().output()?;
    assert!(output.status.success());
    let second = test.read_json("public/locales/versions.json")?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_versions_hash_changes_with_content() -> Result<()> {
    let test = two_locales()?;

    test.export_command().output()?;
    let before = test.read_json("public/locales/versions.json")?;

    test.write_file("lang/en/auth.json", r#"{ "failed": "Changed." }"#)?;
    test.export_command().output()?;
    let after = test.read_json("public/locales/versions.json")?;

    assert_ne!(before["en"]["hash"], after["en"]["hash"]);
    assert_eq!(before["fr"], after["fr"]);

    Ok(())
}

#[test]
fn test_no_versions_flag() -> Result<()> {
    let test = two_locales()?;

    let output = test.export_command().arg("--no-versions").output()?;
    assert!(output.status.success());
    assert!(test.root().join("public/locales/en/auth.json").exists());
    assert!(!test.root().join("public/locales/versions.json").exists());

    Ok(())
}

#[test]
fn test_verbose_shows_stats_and_version() -> Result<()> {
    let test = CliTest::with_file("lang/en/auth.json", EN_AUTH)?;

    let output = test.export_command().arg("-v").output()?;
    let out = stdout(&output);
    assert!(out.contains("• auth.json  2 strings, 1 choice"), "stdout: {}", out);
    assert!(out.contains("= version: "));
    assert!(out.contains("(created)"));

    let output = test.export_command().arg("-v").output()?;
    assert!(stdout(&output).contains("(unchanged)"));

    Ok(())
}

#[test]
fn test_cli_roots_override_defaults() -> Result<()> {
    let test = CliTest::with_file("resources/lang/en/auth.json", FR_AUTH)?;

    let output = test
        .export_command()
        .args(["--source-root", "resources/lang", "--output-root", "dist"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("dist/en/auth.json").exists());
    assert!(test.root().join("dist/versions.json").exists());
    assert!(!test.root().join("public").exists());

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::with_file(
        ".translocrc.json",
        r#"{
            "sourceRoot": "./resources/lang",
            "outputRoot": "./dist",
            "ignores": ["legacy/**"],
            "dropEmptyBuckets": true
        }"#,
    )?;
    test.write_file(
        "resources/lang/en/app.json",
        r#"{ "items": "{1} one item|[2,*] :count items" }"#,
    )?;
    test.write_file("resources/lang/en/legacy/old.json", r#"{ "a": "b" }"#)?;

    let output = test.export_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("dist/en/app.json")?,
        json!({ "items_one": "one item", "items_other": "{{count}} items" })
    );
    assert!(!test.root().join("dist/en/legacy").exists());
    assert!(test.root().join("dist/versions.json").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".translocrc.json", r#"{ "ignores": ["[oops"] }"#)?;
    test.write_file("lang/en/auth.json", FR_AUTH)?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
