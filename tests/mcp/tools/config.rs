use i18n_inject::mcp::{I18nInjectMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nInjectMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["package"], "@shopify/react-i18n");
    assert_eq!(json_result["config"]["mode"], "from-translation-files");
    assert_eq!(json_result["config"]["translationDir"], "translations");
    assert_eq!(json_result["config"]["fallbackLocale"], "en");
    assert_eq!(json_result["config"]["callNames"], json!(["useI18n", "withI18n"]));
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "mode": "from-generated-dictionary",
            "package": "@acme/i18n",
            "translationDirectory": "locales"
        }))
        .unwrap();

    let server = I18nInjectMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["mode"], "from-generated-dictionary");
    assert_eq!(json_result["config"]["package"], "@acme/i18n");
    assert_eq!(json_result["config"]["translationDir"], "locales");
    // Unspecified fields keep their defaults
    assert_eq!(json_result["config"]["fallbackLocale"], "en");
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignores": ["[invalid"] }))
        .unwrap();

    let server = I18nInjectMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
