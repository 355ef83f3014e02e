//! Crew command handlers.

use publicist_crew::{CrewManifest, ValidationResult, validate_manifest};
use publicist_error::{ConfigError, PublicistResult, ToolError, ToolErrorKind};
use publicist_tools::ToolRegistry;
use serde_json::json;
use std::path::Path;

use super::{CommandOutput, ValidationOutputFormat};

/// Input overrides for `crew show`.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    /// Company name
    pub company_name: Option<String>,
    /// Target platforms
    pub target_platforms: Option<String>,
    /// Industry
    pub industry: Option<String>,
}

fn load_manifest(path: Option<&Path>) -> PublicistResult<CrewManifest> {
    let manifest = match path {
        Some(path) => CrewManifest::from_file(path)?,
        None => CrewManifest::default_manifest()?,
    };
    Ok(manifest)
}

/// Handles the crew show command.
///
/// # Errors
///
/// Fails when the manifest cannot be loaded or when the resolved
/// `target_platforms` names no platform the publisher can simulate.
#[tracing::instrument(skip(overrides))]
pub fn handle_crew_show(
    manifest: Option<&Path>,
    overrides: InputOverrides,
) -> PublicistResult<CommandOutput> {
    let manifest = load_manifest(manifest)?;

    let mut inputs = manifest.inputs().clone();
    if let Some(company_name) = overrides.company_name {
        inputs.set("company_name", company_name);
    }
    if let Some(target_platforms) = overrides.target_platforms {
        inputs.set("target_platforms", target_platforms);
    }
    if let Some(industry) = overrides.industry {
        inputs.set("industry", industry);
    }

    let (platforms, unknown) = inputs.platforms();
    if platforms.is_empty() {
        return Err(ConfigError::invalid_input(
            "target_platforms",
            inputs.target_platforms(),
            "names no platform the publisher can simulate",
        )
        .into());
    }
    for name in &unknown {
        tracing::warn!(platform = %name, "Ignoring unsupported target platform");
    }

    let mut lines = vec![
        format!(
            "Crew: {} ({} process)",
            manifest.crew().name(),
            manifest.crew().process()
        ),
        String::new(),
        "Inputs:".to_string(),
    ];
    lines.extend(
        inputs
            .entries()
            .into_iter()
            .map(|(name, value)| format!("  {name}: {value}")),
    );
    let names: Vec<&str> = platforms.iter().map(|p| p.name()).collect();
    lines.push(format!("  publishing to: {}", names.join(", ")));

    lines.push(String::new());
    lines.push("Agents:".to_string());
    for agent in manifest.agents() {
        lines.push(format!(
            "  {} - {} [{} @ {}]",
            agent.name(),
            agent.role(),
            agent.llm().model(),
            agent.llm().temperature()
        ));
        if !agent.tools().is_empty() {
            lines.push(format!("    tools: {}", agent.tools().join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Tasks:".to_string());
    for (i, (task, agent)) in manifest.schedule().into_iter().enumerate() {
        lines.push(format!("  {}. {} -> {}", i + 1, task.name(), agent.name()));
    }

    Ok(CommandOutput::success(lines.join("\n")))
}

/// Handles the crew validate command.
///
/// Exit code 1 means errors; 2 means warnings under `--strict`.
#[tracing::instrument]
pub fn handle_crew_validate(
    manifest: Option<&Path>,
    format: ValidationOutputFormat,
    strict: bool,
) -> PublicistResult<CommandOutput> {
    let manifest = load_manifest(manifest)?;
    let registry = ToolRegistry::with_defaults();
    let result = validate_manifest(&manifest, &registry.names());

    let exit_code = if !result.is_valid() {
        1
    } else if strict && !result.warnings.is_empty() {
        2
    } else {
        0
    };

    let text = match format {
        ValidationOutputFormat::Human => render_human(manifest.crew().name(), &result, strict),
        ValidationOutputFormat::Json => render_json(&result)?,
    };

    Ok(CommandOutput { text, exit_code })
}

fn render_human(name: &str, result: &ValidationResult, strict: bool) -> String {
    let mut out = String::new();
    if !result.errors.is_empty() {
        out.push_str(&format!("{}\n\n", result.format_errors()));
    }
    if !result.warnings.is_empty() {
        out.push_str(&format!("{}\n\n", result.format_warnings()));
    }

    let verdict = if !result.is_valid() {
        format!("❌ Crew '{name}' is invalid")
    } else if !result.warnings.is_empty() && strict {
        format!("⚠️  Crew '{name}' has warnings (strict mode)")
    } else if !result.warnings.is_empty() {
        format!("⚠️  Crew '{name}' is valid with warnings")
    } else {
        format!("✅ Crew '{name}' is valid")
    };
    out.push_str(&verdict);
    out
}

fn render_json(result: &ValidationResult) -> PublicistResult<String> {
    let doc = json!({
        "valid": result.is_valid(),
        "errors": result.errors.iter().map(|e| json!({
            "kind": format!("{:?}", e.kind),
            "message": e.message,
            "suggestion": e.suggestion,
        })).collect::<Vec<_>>(),
        "warnings": result.warnings.iter().map(|w| json!({
            "kind": format!("{:?}", w.kind),
            "message": w.message,
        })).collect::<Vec<_>>(),
    });
    let text = serde_json::to_string_pretty(&doc)
        .map_err(|e| ToolError::new(ToolErrorKind::Serialization(e.to_string())))?;
    Ok(text)
}
