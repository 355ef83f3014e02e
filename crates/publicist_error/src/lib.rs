//! Error types for the Publicist workspace.
//!
//! Every domain error records the file and line where it was raised. The
//! crate-level [`PublicistError`] wraps them all so binaries can use a
//! single result type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod crew;
mod publish;
mod tool;

pub use config::ConfigError;
pub use crew::{CrewError, CrewErrorKind, CrewResult};
pub use publish::{PublishError, PublishErrorKind, PublishResult};
pub use tool::{ToolError, ToolErrorKind, ToolResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PublicistErrorKind {
    /// Post simulation error
    Publish(PublishError),
    /// Tool registry error
    Tool(ToolError),
    /// Crew manifest error
    Crew(CrewError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for PublicistErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicistErrorKind::Publish(e) => write!(f, "{}", e),
            PublicistErrorKind::Tool(e) => write!(f, "{}", e),
            PublicistErrorKind::Crew(e) => write!(f, "{}", e),
            PublicistErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Publicist error with kind discrimination.
#[derive(Debug)]
pub struct PublicistError(Box<PublicistErrorKind>);

impl PublicistError {
    /// Create a new error from a kind.
    pub fn new(kind: PublicistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PublicistErrorKind {
        &self.0
    }
}

impl std::fmt::Display for PublicistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Publicist Error: {}", self.0)
    }
}

impl std::error::Error for PublicistError {}

impl<T> From<T> for PublicistError
where
    T: Into<PublicistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Publicist operations.
pub type PublicistResult<T> = std::result::Result<T, PublicistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_error_records_location() {
        let err = PublishError::new(PublishErrorKind::InvalidScheduledTime("soon".into()));
        let rendered = err.to_string();
        assert!(rendered.contains("soon"));
        assert!(rendered.contains("lib.rs"));
    }

    #[test]
    fn test_crate_error_wraps_domain_errors() {
        let err: PublicistError = ToolError::new(ToolErrorKind::UnknownTool("search".into())).into();
        assert!(matches!(err.kind(), PublicistErrorKind::Tool(_)));
        assert!(err.to_string().starts_with("Publicist Error: Tool Error: Unknown tool: search"));
    }
}
