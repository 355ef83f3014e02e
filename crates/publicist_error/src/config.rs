//! Configuration error types.

/// Configuration error with source location.
///
/// Raised when flags, environment or crew inputs resolve to something the
/// crew cannot run with.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Crew input or setting at fault, when one is known
    pub input: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use publicist_error::ConfigError;
    ///
    /// let err = ConfigError::new("PUBLICIST_MANIFEST points at a directory");
    /// assert!(err.input.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            input: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error for a crew input whose value cannot be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use publicist_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_input("target_platforms", "Mastodon", "no supported platform");
    /// assert_eq!(err.input.as_deref(), Some("target_platforms"));
    /// assert!(err.to_string().contains("input 'target_platforms' = 'Mastodon'"));
    /// ```
    #[track_caller]
    pub fn invalid_input(input: &str, value: &str, reason: &str) -> Self {
        let mut err = Self::new(format!("input '{input}' = '{value}' {reason}"));
        err.input = Some(input.to_string());
        err
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
