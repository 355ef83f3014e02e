//! Crew manifest validation with actionable messages.
//!
//! Errors make a manifest unusable. Warnings point at things that are
//! probably mistakes but will not stop the agent runtime.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::{CrewManifest, Process};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Result of validating a crew manifest.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationError>,
    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a new validation result with no errors or warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, kind: ValidationErrorKind, message: String, suggestion: Option<&str>) {
        self.errors.push(ValidationError {
            kind,
            message,
            suggestion: suggestion.map(str::to_string),
        });
    }

    fn warn(&mut self, kind: ValidationWarningKind, message: String) {
        self.warnings.push(ValidationWarning { kind, message });
    }

    /// Formats errors as a human-readable string.
    pub fn format_errors(&self) -> String {
        let mut output = String::new();

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n");
            }
            output.push_str(&format!("Error {}: {}", i + 1, error.message));

            if let Some(suggestion) = &error.suggestion {
                output.push_str(&format!("\n\n  Suggestion: {}", suggestion));
            }
        }

        output
    }

    /// Formats warnings as a human-readable string.
    pub fn format_warnings(&self) -> String {
        self.warnings
            .iter()
            .enumerate()
            .map(|(i, warning)| format!("Warning {}: {}", i + 1, warning.message))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A validation error with a fix suggestion.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Suggestion on how to fix the error
    pub suggestion: Option<String>,
}

/// A validation warning that should be reviewed.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Type of validation warning
    pub kind: ValidationWarningKind,
    /// Human-readable warning message
    pub message: String,
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No agents defined
    EmptyAgents,
    /// No tasks defined
    EmptyTasks,
    /// Two agents share a name
    DuplicateAgent,
    /// Two tasks share a name
    DuplicateTask,
    /// Task names an agent that does not exist
    UnknownAgent,
    /// Task context names a task that does not run earlier
    UnknownContext,
    /// Process cannot be run by this crew
    UnsupportedProcess,
    /// Temperature outside 0.0..=2.0
    InvalidTemperature,
    /// Agent allowed zero iterations
    ZeroMaxIter,
    /// Required prompt text is blank
    EmptyField,
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarningKind {
    /// Tool is neither registered nor declared external
    UnknownTool,
    /// Agent has no tasks
    UnusedAgent,
    /// Placeholder has no matching input
    UnknownInput,
    /// Target platform the publisher cannot simulate
    UnknownTargetPlatform,
}

/// Validate `manifest` against the tools registered in this process.
///
/// `registered_tools` are the names a local tool registry resolves; the
/// manifest's `external_tools` are accepted as provided by the runtime.
#[instrument(skip_all, fields(crew = %manifest.crew().name()))]
pub fn validate_manifest(manifest: &CrewManifest, registered_tools: &[&str]) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_process(manifest, &mut result);
    check_agents(manifest, registered_tools, &mut result);
    check_tasks(manifest, &mut result);
    check_inputs(manifest, &mut result);

    debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated crew manifest"
    );
    result
}

fn check_process(manifest: &CrewManifest, result: &mut ValidationResult) {
    if *manifest.crew().process() == Process::Hierarchical {
        result.error(
            ValidationErrorKind::UnsupportedProcess,
            "Process 'hierarchical' requires a manager agent, which this crew does not define"
                .to_string(),
            Some("Set process = \"sequential\" under [crew]"),
        );
    }
}

fn check_agents(manifest: &CrewManifest, registered_tools: &[&str], result: &mut ValidationResult) {
    if manifest.agents().is_empty() {
        result.error(
            ValidationErrorKind::EmptyAgents,
            "Crew defines no agents".to_string(),
            Some("Add at least one [[agents]] table"),
        );
    }

    let mut seen = HashSet::new();
    for agent in manifest.agents() {
        let name = agent.name();
        if !seen.insert(name.as_str()) {
            result.error(
                ValidationErrorKind::DuplicateAgent,
                format!("Agent '{}' is defined more than once", name),
                Some("Give every agent a unique name"),
            );
        }

        for (field, value) in [
            ("role", agent.role()),
            ("goal", agent.goal()),
            ("backstory", agent.backstory()),
        ] {
            if value.trim().is_empty() {
                result.error(
                    ValidationErrorKind::EmptyField,
                    format!("Agent '{}' has an empty {}", name, field),
                    None,
                );
            }
        }

        let temperature = *agent.llm().temperature();
        if !(0.0..=2.0).contains(&temperature) {
            result.error(
                ValidationErrorKind::InvalidTemperature,
                format!(
                    "Agent '{}' has temperature {}, expected 0.0 to 2.0",
                    name, temperature
                ),
                None,
            );
        }

        if *agent.max_iter() == 0 {
            result.error(
                ValidationErrorKind::ZeroMaxIter,
                format!("Agent '{}' allows zero iterations", name),
                Some("Remove max_iter to use the default of 25"),
            );
        }

        for tool in agent.tools() {
            let known = registered_tools.contains(&tool.as_str())
                || manifest.crew().external_tools().contains(tool);
            if !known {
                result.warn(
                    ValidationWarningKind::UnknownTool,
                    format!(
                        "Agent '{}' uses tool '{}', which is not registered or listed in crew.external_tools",
                        name, tool
                    ),
                );
            }
        }

        if !manifest.tasks().iter().any(|task| task.agent() == name) {
            result.warn(
                ValidationWarningKind::UnusedAgent,
                format!("Agent '{}' is not assigned any task", name),
            );
        }
    }
}

fn check_tasks(manifest: &CrewManifest, result: &mut ValidationResult) {
    if manifest.tasks().is_empty() {
        result.error(
            ValidationErrorKind::EmptyTasks,
            "Crew defines no tasks".to_string(),
            Some("Add at least one [[tasks]] table"),
        );
    }

    let mut earlier: HashSet<&str> = HashSet::new();
    for task in manifest.tasks() {
        let name = task.name().as_str();

        if manifest.agent(task.agent()).is_none() {
            result.error(
                ValidationErrorKind::UnknownAgent,
                format!("Task '{}' is assigned to unknown agent '{}'", name, task.agent()),
                Some("Use the name of an agent defined in [[agents]]"),
            );
        }

        for (field, value) in [
            ("description", task.description()),
            ("expected_output", task.expected_output()),
        ] {
            if value.trim().is_empty() {
                result.error(
                    ValidationErrorKind::EmptyField,
                    format!("Task '{}' has an empty {}", name, field),
                    None,
                );
            }
        }

        for dependency in task.context() {
            if !earlier.contains(dependency.as_str()) {
                result.error(
                    ValidationErrorKind::UnknownContext,
                    format!(
                        "Task '{}' uses context from '{}', which does not run before it",
                        name, dependency
                    ),
                    Some("Context may only name tasks listed earlier"),
                );
            }
        }

        if !earlier.insert(name) {
            result.error(
                ValidationErrorKind::DuplicateTask,
                format!("Task '{}' is defined more than once", name),
                Some("Give every task a unique name"),
            );
        }
    }
}

fn check_inputs(manifest: &CrewManifest, result: &mut ValidationResult) {
    let inputs = manifest.inputs();

    let (_, unknown_platforms) = inputs.platforms();
    for platform in unknown_platforms {
        result.warn(
            ValidationWarningKind::UnknownTargetPlatform,
            format!("Target platform '{}' cannot be simulated by the publisher", platform),
        );
    }

    let agent_texts = manifest.agents().iter().flat_map(|agent| {
        [agent.role(), agent.goal(), agent.backstory()]
            .map(|text| (format!("agent '{}'", agent.name()), text))
    });
    let task_texts = manifest.tasks().iter().flat_map(|task| {
        [task.description(), task.expected_output()]
            .map(|text| (format!("task '{}'", task.name()), text))
    });

    let mut reported = HashSet::new();
    for (owner, text) in agent_texts.chain(task_texts) {
        for capture in PLACEHOLDER.captures_iter(text) {
            let placeholder = &capture[1];
            if inputs.get(placeholder).is_none() && reported.insert((owner.clone(), placeholder.to_string())) {
                result.warn(
                    ValidationWarningKind::UnknownInput,
                    format!(
                        "Placeholder '{{{}}}' in {} has no matching input",
                        placeholder, owner
                    ),
                );
            }
        }
    }
}
