//! Simulated social media publishing for agent crews.
//!
//! Facade over the workspace crates:
//!
//! - [`publicist_social`] formats posts and fabricates reach numbers
//! - [`publicist_tools`] exposes that as an agent-callable JSON tool
//! - [`publicist_crew`] loads and validates crew manifests
//!
//! The `publicist` binary wraps all three.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod observability;

pub use observability::{LogFormat, init_tracing};

pub use publicist_crew as crew;
pub use publicist_error as error;
pub use publicist_social as social;
pub use publicist_tools as tools;

pub use publicist_error::{PublicistError, PublicistErrorKind, PublicistResult};
