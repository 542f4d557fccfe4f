use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BROKEN, CARD, CliTest, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_card(&["en", "fr"])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 source file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_does_not_write() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;

    run(&mut test.check_command())?;

    assert_eq!(test.read_file("src/Card.tsx")?, CARD);

    Ok(())
}

#[test]
fn test_multiple_usage() -> Result<()> {
    let test = CliTest::with_file(
        "src/Card.tsx",
        r#"import {useI18n} from '@shopify/react-i18n';

export function Card() {
  const [i18n] = useI18n();
  const [other] = useI18n();
  return null;
}
"#,
    )?;
    test.write_file("src/translations/en.json", "{}")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"useI18n\"  multiple-usage"));
    assert!(output.stdout.contains("--> ./src/Card.tsx:5:19"));
    assert!(
        output
            .stdout
            .contains("5 |   const [other] = useI18n();")
    );
    assert!(output.stdout.contains("= note: called without arguments 2 times"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_missing_translations_is_a_warning() -> Result<()> {
    let test = CliTest::with_card(&[])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("warning: \"useI18n\"  missing-translations")
    );
    assert!(
        output
            .stdout
            .contains("= note: no translations/*.json next to this file")
    );
    assert!(output.stdout.contains("(0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", BROKEN)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> ./src/broken.tsx"));
    assert!(output.stderr.contains("1 file could not be parsed"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;
    test.write_file(
        ".i18ninjectrc.json",
        r#"{
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file("generated/broken.tsx", BROKEN)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_config_source_root() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;
    test.write_file(".i18ninjectrc.json", r#"{ "sourceRoot": "./lib" }"#)?;
    test.write_file("lib/Other.tsx", "export const x = 1;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;
    test.write_file(".i18ninjectrc.json", r#"{ "callNames": [] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("callNames"));

    Ok(())
}

#[test]
fn test_explicit_files() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;
    test.write_file("src/broken.tsx", BROKEN)?;

    let output = run(test.check_command().arg("src/Card.tsx"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file"));

    Ok(())
}
