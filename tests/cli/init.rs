use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["package"], "@shopify/react-i18n");
    assert_eq!(parsed["mode"], "from-translation-files");
    assert_eq!(parsed["translationDir"], "translations");
    assert_eq!(parsed["fallbackLocale"], "en");
    assert!(parsed["callNames"].is_array());
    assert!(parsed["ignores"].is_array());

    // 2-space indentation, trailing newline
    assert!(content.contains("\n  \"ignores\""));
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .i18ninjectrc.json\n");
    assert!(test.root().join(".i18ninjectrc.json").exists());

    let content = test.read_file(".i18ninjectrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18ninjectrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".i18ninjectrc.json already exists"));
    assert_eq!(test.read_file(".i18ninjectrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "src/App.tsx",
        "export function App() { return <div>Test</div>; }\n",
    )?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
