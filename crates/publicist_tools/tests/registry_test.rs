//! Tests for the tool registry.

use publicist_error::ToolErrorKind;
use publicist_tools::{PUBLISHER_TOOL_NAME, SocialMediaPublisherTool, Tool, ToolRegistry};
use serde_json::{Value, json};

struct EchoTool;

impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Returns its input"
    }

    fn input_schema(&self) -> Value {
        json!({ "type": "object" })
    }

    fn execute(&self, input: Value) -> Value {
        input
    }
}

#[test]
fn test_defaults_hold_publisher() {
    let registry = ToolRegistry::with_defaults();
    assert!(registry.contains(PUBLISHER_TOOL_NAME));
    assert_eq!(registry.names(), vec![PUBLISHER_TOOL_NAME]);
}

#[test]
fn test_register_and_execute() {
    let mut registry = ToolRegistry::with_publisher(SocialMediaPublisherTool::seeded(1));
    registry.register(EchoTool).unwrap();

    assert_eq!(registry.names(), vec!["echo", PUBLISHER_TOOL_NAME]);
    let out = registry.execute("echo", json!({ "a": 1 })).unwrap();
    assert_eq!(out, json!({ "a": 1 }));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool).unwrap();
    let err = registry.register(EchoTool).unwrap_err();
    assert_eq!(err.kind, ToolErrorKind::DuplicateTool("echo".to_string()));
}

#[test]
fn test_unknown_tool() {
    let registry = ToolRegistry::with_defaults();
    let err = registry.execute("serper_search", json!({})).unwrap_err();
    assert_eq!(
        err.kind,
        ToolErrorKind::UnknownTool("serper_search".to_string())
    );
}

#[test]
fn test_error_documents_are_not_registry_errors() {
    let registry = ToolRegistry::with_publisher(SocialMediaPublisherTool::seeded(1));
    let out = registry
        .execute(
            PUBLISHER_TOOL_NAME,
            json!({ "platform": "Myspace", "content": "x" }),
        )
        .unwrap();
    assert!(out["error"].as_str().unwrap().contains("Myspace"));
}

#[test]
fn test_execute_to_string_is_indented() {
    let registry = ToolRegistry::with_publisher(SocialMediaPublisherTool::seeded(1));
    let rendered = registry
        .execute_to_string(
            PUBLISHER_TOOL_NAME,
            json!({ "platform": "LinkedIn", "content": "Hello network" }),
        )
        .unwrap();
    assert!(rendered.starts_with("{\n  \"post_id\": \"linkedin_"));
}

#[test]
fn test_infos() {
    let registry = ToolRegistry::with_defaults();
    let infos = registry.infos();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].name(), PUBLISHER_TOOL_NAME);
    assert_eq!(infos[0].input_schema()["type"], "object");
}
