use clap::Parser;
use publicist::cli::{
    Cli, Commands, CrewCommand, InputOverrides, ValidationOutputFormat, handle_crew_show,
    handle_crew_validate, handle_publish_command, handle_tools_command,
};
use publicist::{LogFormat, PublicistErrorKind};
use publicist::social::PostRequest;
use serde_json::Value;
use std::io::Write;

fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write manifest");
    file
}

#[test]
fn test_parse_publish_command() {
    let cli = Cli::try_parse_from([
        "publicist",
        "publish",
        "--platform",
        "Twitter",
        "--content",
        "Hello world",
        "--scheduled-time",
        "2030-01-01 09:00:00",
        "--seed",
        "7",
    ])
    .expect("valid arguments");

    assert_eq!(cli.log_format, LogFormat::Human);
    match cli.command {
        Commands::Publish {
            platform,
            content,
            image_url,
            scheduled_time,
            seed,
        } => {
            assert_eq!(platform, "Twitter");
            assert_eq!(content, "Hello world");
            assert_eq!(image_url, None);
            assert_eq!(scheduled_time.as_deref(), Some("2030-01-01 09:00:00"));
            assert_eq!(seed, Some(7));
        }
        other => panic!("Expected publish, got {other:?}"),
    }
}

#[test]
fn test_parse_requires_platform_and_content() {
    assert!(Cli::try_parse_from(["publicist", "publish", "--content", "hi"]).is_err());
    assert!(Cli::try_parse_from(["publicist", "publish", "--platform", "Twitter"]).is_err());
}

#[test]
fn test_parse_crew_validate_json() {
    let cli = Cli::try_parse_from([
        "publicist",
        "--log-format",
        "json",
        "crew",
        "validate",
        "--format",
        "json",
        "--strict",
    ])
    .expect("valid arguments");

    assert_eq!(cli.log_format, LogFormat::Json);
    match cli.command {
        Commands::Crew {
            command: CrewCommand::Validate { format, strict, .. },
        } => {
            assert_eq!(format, ValidationOutputFormat::Json);
            assert!(strict);
        }
        other => panic!("Expected crew validate, got {other:?}"),
    }
}

#[test]
fn test_publish_prints_result_document() {
    let request = PostRequest::new("linkedin", "Quarterly update from the team.");
    let output = handle_publish_command(&request, Some(42)).expect("publish runs");
    assert_eq!(output.exit_code, 0);

    let doc: Value = serde_json::from_str(&output.text).expect("json output");
    assert_eq!(doc["platform"], "LinkedIn");
    assert!(doc["post_id"].as_str().is_some_and(|id| id.starts_with("linkedin_")));
    assert_eq!(doc["status"], "published");
}

#[test]
fn test_publish_is_reproducible_with_seed() {
    let request = PostRequest::new("Facebook", "Same seed, same numbers");
    let first = handle_publish_command(&request, Some(9)).expect("publish runs");
    let second = handle_publish_command(&request, Some(9)).expect("publish runs");

    let first: Value = serde_json::from_str(&first.text).expect("json output");
    let second: Value = serde_json::from_str(&second.text).expect("json output");
    assert_eq!(first["post_id"], second["post_id"]);
    assert_eq!(first["estimated_reach"], second["estimated_reach"]);
}

#[test]
fn test_publish_unsupported_platform_is_not_fatal() {
    let request = PostRequest::new("MySpace", "Top 8 update");
    let output = handle_publish_command(&request, Some(1)).expect("publish runs");
    assert_eq!(output.exit_code, 0);

    let doc: Value = serde_json::from_str(&output.text).expect("json output");
    assert!(doc.get("post_id").is_none());
    assert!(
        doc["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("Platform 'MySpace' is not supported."))
    );
}

#[test]
fn test_tools_lists_publisher() {
    let output = handle_tools_command().expect("tools runs");
    let doc: Value = serde_json::from_str(&output.text).expect("json output");
    let names: Vec<&str> = doc
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|tool| tool["name"].as_str())
        .collect();
    assert_eq!(names, vec!["social_media_publisher"]);
}

#[test]
fn test_crew_show_default_manifest() {
    let output = handle_crew_show(
        None,
        InputOverrides {
            company_name: Some("Acme Robotics".to_string()),
            ..Default::default()
        },
    )
    .expect("show runs");

    assert_eq!(output.exit_code, 0);
    assert!(output.text.starts_with("Crew: social_media_management_automation (sequential process)"));
    assert!(output.text.contains("company_name: Acme Robotics"));
    assert!(output.text.contains("industry: Artificial Intelligence"));
    assert!(output.text.contains("tools: social_media_publisher"));
    assert!(output.text.contains("publishing to: LinkedIn, Twitter"));
    assert!(output.text.contains("1. "));
}

#[test]
fn test_crew_show_rejects_unsupported_platforms() {
    let result = handle_crew_show(
        None,
        InputOverrides {
            target_platforms: Some("Mastodon, Bluesky".to_string()),
            ..Default::default()
        },
    );
    let err = result.expect_err("no supported platform");
    match err.kind() {
        PublicistErrorKind::Config(config) => {
            assert_eq!(config.input.as_deref(), Some("target_platforms"));
            assert!(config.message.contains("Mastodon, Bluesky"));
        }
        other => panic!("Expected config error, got {other:?}"),
    }
}

#[test]
fn test_crew_validate_default_manifest() {
    let output =
        handle_crew_validate(None, ValidationOutputFormat::Human, true).expect("validate runs");
    assert_eq!(output.exit_code, 0);
    assert!(output.text.ends_with("is valid"));
}

#[test]
fn test_crew_validate_reports_errors() {
    let file = write_manifest(
        r#"
[crew]
name = "broken"

[[agents]]
name = "writer"
role = "Writer"
goal = "Write"
backstory = "Writes"

[[tasks]]
name = "draft"
agent = "ghost"
description = "Draft a post"
expected_output = "A post"
"#,
    );

    let output = handle_crew_validate(Some(file.path()), ValidationOutputFormat::Json, false)
        .expect("validate runs");
    assert_eq!(output.exit_code, 1);

    let doc: Value = serde_json::from_str(&output.text).expect("json output");
    assert_eq!(doc["valid"], false);
    assert_eq!(doc["errors"][0]["kind"], "UnknownAgent");
}

#[test]
fn test_crew_validate_strict_warnings() {
    let file = write_manifest(
        r#"
[crew]
name = "warned"

[[agents]]
name = "writer"
role = "Writer"
goal = "Write"
backstory = "Writes"
tools = ["mystery_tool"]

[[tasks]]
name = "draft"
agent = "writer"
description = "Draft a post"
expected_output = "A post"
"#,
    );

    let lenient = handle_crew_validate(Some(file.path()), ValidationOutputFormat::Human, false)
        .expect("validate runs");
    assert_eq!(lenient.exit_code, 0);
    assert!(lenient.text.contains("mystery_tool"));

    let strict = handle_crew_validate(Some(file.path()), ValidationOutputFormat::Human, true)
        .expect("validate runs");
    assert_eq!(strict.exit_code, 2);
}

#[test]
fn test_crew_missing_manifest_is_error() {
    let result = handle_crew_validate(
        Some(std::path::Path::new("/nonexistent/crew.toml")),
        ValidationOutputFormat::Human,
        false,
    );
    assert!(result.is_err());
}
