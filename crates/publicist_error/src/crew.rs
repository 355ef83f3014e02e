//! Crew manifest error types.

/// Specific error conditions for crew manifest operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrewErrorKind {
    /// Failed to read manifest file
    FileRead(String),
    /// Failed to parse TOML content
    TomlParse(String),
    /// Manifest failed validation
    Invalid(String),
}

impl std::fmt::Display for CrewErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrewErrorKind::FileRead(msg) => write!(f, "Failed to read crew manifest: {}", msg),
            CrewErrorKind::TomlParse(msg) => write!(f, "Failed to parse TOML: {}", msg),
            CrewErrorKind::Invalid(msg) => write!(f, "Invalid crew manifest: {}", msg),
        }
    }
}

/// Error type for crew manifest operations.
///
/// # Examples
///
/// ```
/// use publicist_error::{CrewError, CrewErrorKind};
///
/// let err = CrewError::new(CrewErrorKind::TomlParse("expected `=`".into()));
/// assert!(format!("{}", err).contains("TOML"));
/// ```
#[derive(Debug, Clone)]
pub struct CrewError {
    /// The specific error condition
    pub kind: CrewErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CrewError {
    /// Create a new CrewError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CrewErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CrewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Crew Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CrewError {}

/// Result type for crew manifest operations.
pub type CrewResult<T> = Result<T, CrewError>;
