use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CARD, CliTest, run};

#[test]
fn test_dry_run_lists_rewrites() -> Result<()> {
    let test = CliTest::with_card(&["en", "fr"])?;

    let output = run(&mut test.transform_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--> ./src/Card.tsx:4:18 useI18n (id Card_"));
    assert!(output.stdout.contains("Would rewrite 1 call in 1 file."));
    assert!(output.stdout.contains("Run with --apply to write these files."));
    // Nothing written
    assert_eq!(test.read_file("src/Card.tsx")?, CARD);

    Ok(())
}

#[test]
fn test_apply_writes_files() -> Result<()> {
    let test = CliTest::with_card(&["en", "fr"])?;

    let output = run(test.transform_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Rewrote 1 call in 1 file."));

    let code = test.read_file("src/Card.tsx")?;
    assert!(code.starts_with("import _en from \"./translations/en.json\";\n"));
    assert!(code.contains("  const [i18n] = useI18n({\n    id: \"Card_"));
    assert!(code.contains("    fallback: _en,\n"));
    assert!(code.contains("if ([\"fr\"].indexOf(locale) < 0)"));

    // A second run finds nothing left to rewrite
    let output = run(&mut test.transform_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Nothing to rewrite"));

    Ok(())
}

#[test]
fn test_stdout_prints_code_only() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;

    let output = run(test.transform_command().args(["--stdout", "src/Card.tsx"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("import _en from \"./translations/en.json\";\n"));
    assert!(output.stdout.contains("translations(locale) {"));
    assert!(!output.stdout.contains("Would rewrite"));
    assert_eq!(test.read_file("src/Card.tsx")?, CARD);

    Ok(())
}

#[test]
fn test_stdout_needs_one_file() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;

    let output = run(test.transform_command().arg("--stdout"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("--stdout needs exactly one file, got 0"));

    Ok(())
}

#[test]
fn test_stdout_conflicts_with_apply() -> Result<()> {
    let test = CliTest::with_card(&["en"])?;

    let output = run(
        test.transform_command()
            .args(["--stdout", "--apply", "src/Card.tsx"]),
    )?;

    assert_eq!(output.code, Some(2));
    assert_eq!(test.read_file("src/Card.tsx")?, CARD);

    Ok(())
}

#[test]
fn test_generated_index_mode() -> Result<()> {
    let test = CliTest::with_card(&[])?;
    test.write_file("src/translations/index.js", "export default {};\n")?;

    let output = run(test.transform_command().args([
        "--mode",
        "from-generated-index",
        "--stdout",
        "src/Card.tsx",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with(
        "import __shopify__i18n_translations from \"./translations\";\nimport _en from \"./translations/en.json\";\n"
    ));
    assert!(
        output
            .stdout
            .contains("return Promise.resolve(__shopify__i18n_translations[locale]);")
    );

    Ok(())
}

#[test]
fn test_multiple_usage_blocks_apply() -> Result<()> {
    let source = r#"import {useI18n} from '@shopify/react-i18n';

export function Card() {
  const [i18n] = useI18n();
  const [other] = useI18n();
  return null;
}
"#;
    let test = CliTest::with_file("src/Card.tsx", source)?;
    test.write_file("src/translations/en.json", "{}")?;

    let output = run(test.transform_command().arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("multiple-usage"));
    assert!(output.stdout.contains("Nothing to rewrite"));
    assert_eq!(test.read_file("src/Card.tsx")?, source);

    Ok(())
}
