//! Command-line interface module.
//!
//! Handlers build their output as text and report an exit code; the
//! binary does the printing.

mod commands;
mod crew;
mod publish;

pub use commands::{Cli, Commands, CrewCommand, ValidationOutputFormat};
pub use crew::{InputOverrides, handle_crew_show, handle_crew_validate};
pub use publish::{handle_publish_command, handle_tools_command};

/// Text to print and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout
    pub text: String,
    /// Process exit code
    pub exit_code: i32,
}

impl CommandOutput {
    /// Successful output.
    pub fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}
