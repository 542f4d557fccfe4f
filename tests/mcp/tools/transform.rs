use i18n_inject::core::TransformMode;
use i18n_inject::mcp::{I18nInjectMcpServer, types::TransformSourceParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{CARD, McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, source: Option<&str>) -> Parameters<TransformSourceParams> {
    Parameters(TransformSourceParams {
        project_root_path: fixture.root(),
        file_path: "src/Card.tsx".to_string(),
        source: source.map(String::from),
        mode: None,
    })
}

#[tokio::test]
async fn test_transform_file_on_disk() {
    let fixture = McpTestFixture::with_card(&["en", "fr"]).unwrap();
    let server = I18nInjectMcpServer::new();

    let result = server
        .transform_source(params(&fixture, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], true);
    let code = json_result["code"].as_str().unwrap();
    assert!(code.starts_with("import _en from \"./translations/en.json\";\n"));
    assert!(code.contains("if ([\"fr\"].indexOf(locale) < 0)"));

    let rewrites = json_result["rewrites"].as_array().unwrap();
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0]["bindingName"], "useI18n");
    assert_eq!(rewrites[0]["importedName"], "useI18n");
    assert_eq!(rewrites[0]["line"], 4);
    assert_eq!(rewrites[0]["col"], 18);
    assert!(rewrites[0]["id"].as_str().unwrap().starts_with("Card_"));

    assert!(json_result["issues"].as_array().unwrap().is_empty());
    // The file itself is untouched
    assert_eq!(fixture.read_file("src/Card.tsx").unwrap(), CARD);
}

#[tokio::test]
async fn test_transform_supplied_source() {
    let fixture = McpTestFixture::with_card(&["en"]).unwrap();
    let server = I18nInjectMcpServer::new();

    let source = r#"import {withI18n as translate} from '@shopify/react-i18n';

class Page extends React.Component {}
export default translate()(Page);
"#;
    let result = server
        .transform_source(params(&fixture, Some(source)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], true);
    let rewrites = json_result["rewrites"].as_array().unwrap();
    assert_eq!(rewrites[0]["bindingName"], "translate");
    assert_eq!(rewrites[0]["importedName"], "withI18n");
    assert!(
        json_result["code"]
            .as_str()
            .unwrap()
            .contains("export default translate({\n")
    );
}

#[tokio::test]
async fn test_transform_reports_multiple_usage() {
    let fixture = McpTestFixture::with_card(&["en"]).unwrap();
    let server = I18nInjectMcpServer::new();

    let source = r#"import {useI18n} from '@shopify/react-i18n';

function A() { useI18n(); }
function B() { useI18n(); }
"#;
    let result = server
        .transform_source(params(&fixture, Some(source)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], false);
    let issues = json_result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["rule"], "multiple-usage");
    assert_eq!(issues[0]["severity"], "error");
    assert_eq!(issues[0]["line"], 4);
    assert_eq!(issues[0]["col"], 16);
    assert_eq!(issues[0]["sourceLine"], "function B() { useI18n(); }");
}

#[tokio::test]
async fn test_transform_mode_override() {
    let fixture = McpTestFixture::with_card(&[]).unwrap();
    fixture
        .write_file("src/translations/index.js", "export default {};\n")
        .unwrap();
    let server = I18nInjectMcpServer::new();

    let mut params = params(&fixture, None);
    params.0.mode = Some(TransformMode::FromGeneratedDictionary);
    let result = server.transform_source(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let code = json_result["code"].as_str().unwrap();
    assert!(code.starts_with("import __shopify__i18n_dictionary from \"./translations\";\n"));
    assert!(!code.contains("fallback"));
}

#[tokio::test]
async fn test_transform_missing_translations() {
    let fixture = McpTestFixture::with_card(&[]).unwrap();
    let server = I18nInjectMcpServer::new();

    let result = server
        .transform_source(params(&fixture, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["changed"], false);
    assert_eq!(json_result["code"], CARD);
    let issues = json_result["issues"].as_array().unwrap();
    assert_eq!(issues[0]["rule"], "missing-translations");
    assert_eq!(issues[0]["severity"], "warning");
}
