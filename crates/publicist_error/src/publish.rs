//! Error types for simulated post publishing.

/// Error conditions raised while simulating a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishErrorKind {
    /// Platform name did not match any supported platform.
    #[display("Unsupported platform: {_0}")]
    UnsupportedPlatform(String),
    /// Scheduled time could not be parsed as an ISO timestamp.
    #[display("Invalid scheduled time: {_0}")]
    InvalidScheduledTime(String),
    /// Tool input did not match the request schema.
    #[display("Invalid input: {_0}")]
    InvalidInput(String),
    /// Result document could not be serialized.
    #[display("Serialization failed: {_0}")]
    Serialization(String),
}

/// Publishing error with location tracking.
///
/// # Examples
///
/// ```
/// use publicist_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::UnsupportedPlatform("TikTok".into()));
/// assert!(err.to_string().contains("TikTok"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    kind: PublishErrorKind,
    line: u32,
    file: &'static str,
}

impl PublishError {
    /// Create a new publishing error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PublishErrorKind {
        &self.kind
    }
}

impl From<PublishErrorKind> for PublishError {
    #[track_caller]
    fn from(kind: PublishErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for publishing operations.
pub type PublishResult<T> = Result<T, PublishError>;
