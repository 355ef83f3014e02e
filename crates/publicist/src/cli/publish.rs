//! Publish and tools command handlers.

use publicist_error::PublicistResult;
use publicist_social::PostRequest;
use publicist_tools::{PUBLISHER_TOOL_NAME, SocialMediaPublisherTool, ToolRegistry};
use serde_json::json;

use super::CommandOutput;

/// Handles the publish command.
///
/// Unsupported platforms and bad timestamps still exit successfully; the
/// problem is reported in the printed document, as an agent would see it.
#[tracing::instrument(skip_all, fields(platform = %request.platform()))]
pub fn handle_publish_command(
    request: &PostRequest,
    seed: Option<u64>,
) -> PublicistResult<CommandOutput> {
    let tool = match seed {
        Some(seed) => SocialMediaPublisherTool::seeded(seed),
        None => SocialMediaPublisherTool::new(),
    };
    let registry = ToolRegistry::with_publisher(tool);

    let input = json!({
        "platform": request.platform(),
        "content": request.content(),
        "image_url": request.image_url(),
        "scheduled_time": request.scheduled_time(),
    });
    let text = registry.execute_to_string(PUBLISHER_TOOL_NAME, input)?;
    Ok(CommandOutput::success(text))
}

/// Handles the tools command.
pub fn handle_tools_command() -> PublicistResult<CommandOutput> {
    let registry = ToolRegistry::with_defaults();
    let text = serde_json::to_string_pretty(&registry.infos()).map_err(|e| {
        publicist_error::ToolError::new(publicist_error::ToolErrorKind::Serialization(
            e.to_string(),
        ))
    })?;
    Ok(CommandOutput::success(text))
}
