//! Tool registry.

use derive_getters::Getters;
use publicist_error::{ToolError, ToolErrorKind, ToolResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{SocialMediaPublisherTool, Tool};

/// Name, description and schema of a registered tool.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ToolInfo {
    name: String,
    description: String,
    input_schema: Value,
}

/// Tools available to the crew, keyed by name.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in publisher tool.
    pub fn with_defaults() -> Self {
        Self::with_publisher(SocialMediaPublisherTool::new())
    }

    /// Registry holding the given publisher tool.
    pub fn with_publisher(publisher: impl Tool + 'static) -> Self {
        let mut registry = Self::new();
        registry.tools.insert(publisher.name().to_string(), Arc::new(publisher));
        registry
    }

    /// Add a tool.
    ///
    /// # Errors
    ///
    /// Fails if a tool with the same name is already registered.
    #[instrument(skip(self, tool), fields(tool = tool.name()))]
    pub fn register(&mut self, tool: impl Tool + 'static) -> ToolResult<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::new(ToolErrorKind::DuplicateTool(name)));
        }
        debug!("Registering tool");
        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Whether a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Descriptions of every registered tool, sorted by name.
    pub fn infos(&self) -> Vec<ToolInfo> {
        self.tools
            .values()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Call a tool by name.
    ///
    /// # Errors
    ///
    /// Fails only when no tool has that name; tool-level problems come back
    /// as error documents.
    #[instrument(skip(self, input))]
    pub fn execute(&self, name: &str, input: Value) -> ToolResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::new(ToolErrorKind::UnknownTool(name.to_string())))?;
        let output = tool.execute(input);
        info!(is_error = output.get("error").is_some(), "Tool executed");
        Ok(output)
    }

    /// Call a tool and render its document as indented JSON.
    ///
    /// # Errors
    ///
    /// Fails when no tool has that name or the document cannot be rendered.
    pub fn execute_to_string(&self, name: &str, input: Value) -> ToolResult<String> {
        let output = self.execute(name, input)?;
        serde_json::to_string_pretty(&output)
            .map_err(|e| ToolError::new(ToolErrorKind::Serialization(e.to_string())))
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
