//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::LogFormat;

/// Publicist: rehearse a social media publishing crew without posting anything.
#[derive(Parser, Debug)]
#[command(name = "publicist")]
#[command(about = "Simulated social media publishing for agent crews")]
#[command(version)]
pub struct Cli {
    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    pub log_format: LogFormat,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a post and print the result document
    Publish {
        /// Target platform (Twitter, LinkedIn, Facebook, Instagram)
        #[arg(short, long)]
        platform: String,

        /// Text to post
        #[arg(short, long)]
        content: String,

        /// Image to attach
        #[arg(long)]
        image_url: Option<String>,

        /// Schedule for later (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        scheduled_time: Option<String>,

        /// Seed for reproducible numbers
        #[arg(long, env = "PUBLICIST_SEED")]
        seed: Option<u64>,
    },

    /// List the tools agents can call
    Tools,

    /// Inspect crew manifests
    Crew {
        /// Crew subcommand
        #[command(subcommand)]
        command: CrewCommand,
    },
}

/// Crew manifest commands.
#[derive(Subcommand, Debug)]
pub enum CrewCommand {
    /// Show agents and tasks in execution order
    Show {
        /// Manifest file (defaults to the built-in crew)
        #[arg(short, long, env = "PUBLICIST_MANIFEST")]
        manifest: Option<PathBuf>,

        /// Name of the company
        #[arg(long)]
        company_name: Option<String>,

        /// Target social media platforms
        #[arg(long)]
        target_platforms: Option<String>,

        /// Industry of the company
        #[arg(long)]
        industry: Option<String>,
    },

    /// Check a manifest for mistakes
    Validate {
        /// Manifest file (defaults to the built-in crew)
        #[arg(short, long, env = "PUBLICIST_MANIFEST")]
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ValidationOutputFormat::Human)]
        format: ValidationOutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationOutputFormat {
    /// Human-readable text
    Human,
    /// JSON document
    Json,
}
