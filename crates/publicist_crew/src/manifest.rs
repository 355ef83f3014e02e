//! Crew manifest types and loading.

use derive_getters::Getters;
use publicist_error::{CrewError, CrewErrorKind, CrewResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

use crate::CrewInputs;

const DEFAULT_MANIFEST: &str = include_str!("../manifests/social_media_crew.toml");

/// How tasks are handed to agents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks run one after another in manifest order.
    #[default]
    #[display("sequential")]
    Sequential,
    /// A manager agent delegates tasks.
    #[display("hierarchical")]
    Hierarchical,
}

/// Crew-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CrewSettings {
    /// Crew name
    name: String,
    /// Task hand-off strategy
    #[serde(default)]
    process: Process,
    /// Verbose runtime logging
    #[serde(default)]
    verbose: bool,
    /// Tools supplied by the agent runtime rather than this workspace
    #[serde(default)]
    external_tools: Vec<String>,
}

/// Model settings for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct LlmSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

/// One agent in the crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AgentConfig {
    /// Identifier tasks refer to
    name: String,
    /// Role prompt
    role: String,
    /// Goal prompt
    goal: String,
    /// Backstory prompt
    backstory: String,
    /// Tool names available to the agent
    #[serde(default)]
    tools: Vec<String>,
    /// Model settings
    #[serde(default)]
    llm: LlmSettings,
    /// Maximum reasoning iterations per task
    #[serde(default = "default_max_iter")]
    max_iter: u32,
    /// Whether the agent may delegate to others
    #[serde(default)]
    allow_delegation: bool,
    /// Whether the current date is added to prompts
    #[serde(default = "default_true")]
    inject_date: bool,
    /// Whether the agent plans before acting
    #[serde(default)]
    reasoning: bool,
    /// Requests-per-minute cap
    #[serde(default)]
    max_rpm: Option<u32>,
    /// Wall-clock limit per task, in seconds
    #[serde(default)]
    max_execution_time: Option<u64>,
}

/// One task in the crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TaskConfig {
    /// Task identifier
    name: String,
    /// Agent that performs the task
    agent: String,
    /// Task prompt
    description: String,
    /// Description of the expected result
    expected_output: String,
    /// Earlier tasks whose output feeds this one
    #[serde(default)]
    context: Vec<String>,
    /// Whether output is requested as Markdown
    #[serde(default)]
    markdown: bool,
}

/// A whole crew: settings, default inputs, agents and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CrewManifest {
    /// Crew-level settings
    crew: CrewSettings,
    /// Default inputs
    #[serde(default)]
    inputs: CrewInputs,
    /// Agents
    #[serde(default)]
    agents: Vec<AgentConfig>,
    /// Tasks, in execution order
    #[serde(default)]
    tasks: Vec<TaskConfig>,
}

impl CrewManifest {
    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CrewErrorKind::TomlParse`] when the text is not a valid manifest.
    #[track_caller]
    pub fn from_toml_str(toml: &str) -> CrewResult<Self> {
        toml::from_str(toml).map_err(|e| CrewError::new(CrewErrorKind::TomlParse(e.to_string())))
    }

    /// Load a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid manifest.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CrewResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CrewError::new(CrewErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        let manifest = Self::from_toml_str(&contents)?;
        debug!(
            agents = manifest.agents.len(),
            tasks = manifest.tasks.len(),
            "Loaded crew manifest"
        );
        Ok(manifest)
    }

    /// The built-in social media management crew.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled manifest is malformed.
    pub fn default_manifest() -> CrewResult<Self> {
        Self::from_toml_str(DEFAULT_MANIFEST)
    }

    /// Bundled manifest source.
    pub fn default_manifest_source() -> &'static str {
        DEFAULT_MANIFEST
    }

    /// Look up an agent by name.
    pub fn agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Replace the default inputs.
    pub fn with_inputs(mut self, inputs: CrewInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Tasks paired with the agent that runs them, in execution order.
    ///
    /// Tasks naming a missing agent are skipped; validation reports them.
    pub fn schedule(&self) -> Vec<(&TaskConfig, &AgentConfig)> {
        self.tasks
            .iter()
            .filter_map(|task| self.agent(&task.agent).map(|agent| (task, agent)))
            .collect()
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_iter() -> u32 {
    25
}

fn default_true() -> bool {
    true
}
