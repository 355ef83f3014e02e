//! Declarative crew manifests for the Publicist workflow.
//!
//! A crew is a set of agents (role, goal, backstory, tools, model
//! settings) and an ordered list of tasks. This crate loads manifests from
//! TOML and checks them; running the agents is the job of an external
//! agent runtime.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod inputs;
mod manifest;
pub mod validator;

pub use inputs::CrewInputs;
pub use manifest::{AgentConfig, CrewManifest, CrewSettings, LlmSettings, Process, TaskConfig};
pub use validator::{ValidationResult, validate_manifest};
