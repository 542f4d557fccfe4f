use i18n_inject::mcp::{I18nInjectMcpServer, types::ScanProjectParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{CARD, McpTestFixture, assert_pagination, extract_tool_result_json};

fn params(
    fixture: &McpTestFixture,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanProjectParams> {
    Parameters(ScanProjectParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

/// A project with `count` components, each with an English translation.
fn fixture_with_components(count: usize) -> McpTestFixture {
    let fixture = McpTestFixture::new().unwrap();
    for i in 0..count {
        let dir = format!("src/Component{}", i);
        fixture
            .write_file(&format!("{}/index.tsx", dir), CARD)
            .unwrap();
        fixture
            .write_file(&format!("{}/translations/en.json", dir), "{}")
            .unwrap();
    }
    fixture
}

#[tokio::test]
async fn test_scan_project() {
    let fixture = McpTestFixture::with_card(&["en", "de"]).unwrap();
    fixture
        .write_file("src/util.ts", "export const answer = 42;\n")
        .unwrap();
    let server = I18nInjectMcpServer::new();

    let result = server
        .scan_project(params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filesChecked"], 2);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["stats"]["rewriteCount"], 1);

    let items = json_result["items"].as_array().unwrap();
    assert!(items[0]["filePath"].as_str().unwrap().ends_with("src/Card.tsx"));
    assert_eq!(items[0]["rewrites"][0]["bindingName"], "useI18n");
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_project_issues() {
    let fixture = McpTestFixture::with_card(&[]).unwrap();
    fixture
        .write_file(
            "src/broken.tsx",
            "import {useI18n} from '@shopify/react-i18n';\nexport const = ;\n",
        )
        .unwrap();
    let server = I18nInjectMcpServer::new();

    let result = server
        .scan_project(params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["stats"]["missingTranslationsCount"], 1);
    assert_eq!(json_result["stats"]["parseErrorCount"], 1);

    let issues = json_result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    // Sorted by file path
    assert_eq!(issues[0]["rule"], "missing-translations");
    assert_eq!(issues[1]["rule"], "parse-error");
    assert!(issues[1]["line"].is_null());
}

#[tokio::test]
async fn test_scan_project_pagination() {
    let fixture = fixture_with_components(5);
    let server = I18nInjectMcpServer::new();

    let result = server
        .scan_project(params(&fixture, Some(2), Some(0)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_pagination(&json_result, 0, 2, true);

    let result = server
        .scan_project(params(&fixture, Some(2), Some(4)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_pagination(&json_result, 4, 2, false);
}

#[tokio::test]
async fn test_scan_project_limit_is_capped() {
    let fixture = fixture_with_components(1);
    let server = I18nInjectMcpServer::new();

    let result = server
        .scan_project(params(&fixture, Some(500), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}
