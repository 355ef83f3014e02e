//! Tool registry error types.

use std::fmt;

/// Error conditions for tool registration and dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolErrorKind {
    /// No tool registered under the requested name.
    UnknownTool(String),
    /// A tool with the same name is already registered.
    DuplicateTool(String),
    /// Tool output could not be rendered.
    Serialization(String),
}

impl fmt::Display for ToolErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "Unknown tool: {name}"),
            Self::DuplicateTool(name) => write!(f, "Tool already registered: {name}"),
            Self::Serialization(msg) => write!(f, "Serialization failed: {msg}"),
        }
    }
}

/// Tool error with source location tracking.
#[derive(Debug, Clone)]
pub struct ToolError {
    /// The specific error condition
    pub kind: ToolErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ToolError {
    /// Create a new ToolError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ToolErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool Error: {} at line {} in {}", self.kind, self.line, self.file)
    }
}

impl std::error::Error for ToolError {}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
