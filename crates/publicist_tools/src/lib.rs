//! Agent-callable tools for the Publicist crew.
//!
//! A [`Tool`] takes JSON arguments and returns a JSON document. The
//! [`ToolRegistry`] resolves tools by name; [`SocialMediaPublisherTool`] is
//! the one tool implemented here. Other tools a crew manifest mentions
//! (web search, spreadsheet rows) belong to the agent runtime.
//!
//! # Example
//!
//! ```
//! use publicist_tools::{PUBLISHER_TOOL_NAME, SocialMediaPublisherTool, ToolRegistry};
//! use serde_json::json;
//!
//! let registry = ToolRegistry::with_publisher(SocialMediaPublisherTool::seeded(7));
//! let doc = registry
//!     .execute(PUBLISHER_TOOL_NAME, json!({ "platform": "Facebook", "content": "Hi" }))
//!     .unwrap();
//! assert_eq!(doc["status"], "published");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod publisher;
mod registry;
mod tool;

pub use publisher::{PUBLISHER_TOOL_NAME, SocialMediaPublisherTool, error_document};
pub use registry::{ToolInfo, ToolRegistry};
pub use tool::Tool;
