//! Social media publisher tool.

use parking_lot::Mutex;
use publicist_error::{PublishError, PublishErrorKind};
use publicist_social::{Clock, Platform, PostRequest, Publisher, SystemClock};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use tracing::{instrument, warn};

use crate::Tool;

/// Name the publisher tool is registered under.
pub const PUBLISHER_TOOL_NAME: &str = "social_media_publisher";

const SCHEDULE_HINT: &str =
    "Invalid scheduled_time format. Please use ISO format: YYYY-MM-DD HH:MM:SS";

/// Simulates posting to Twitter, LinkedIn, Facebook and Instagram.
///
/// Wraps a [`Publisher`] with its own random generator so each call only
/// needs the JSON arguments.
pub struct SocialMediaPublisherTool<C: Clock = SystemClock> {
    publisher: Publisher<C>,
    rng: Mutex<StdRng>,
}

impl SocialMediaPublisherTool<SystemClock> {
    /// Tool with an entropy-seeded generator and the system clock.
    pub fn new() -> Self {
        Self::with_parts(Publisher::new(), StdRng::from_entropy())
    }

    /// Tool with a fixed seed and the system clock.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(Publisher::new(), StdRng::seed_from_u64(seed))
    }
}

impl Default for SocialMediaPublisherTool<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SocialMediaPublisherTool<C> {
    /// Tool from an explicit publisher and generator.
    pub fn with_parts(publisher: Publisher<C>, rng: StdRng) -> Self {
        Self {
            publisher,
            rng: Mutex::new(rng),
        }
    }

    /// Simulate `request` and render the outcome as a JSON document.
    #[instrument(skip(self, request), fields(platform = %request.platform()))]
    pub fn publish(&self, request: &PostRequest) -> Value {
        let outcome = {
            let mut rng = self.rng.lock();
            self.publisher.publish(request, &mut *rng)
        };

        let rendered = outcome.and_then(|post| {
            serde_json::to_value(&post).map_err(|e| {
                PublishError::new(PublishErrorKind::Serialization(e.to_string()))
            })
        });

        rendered.unwrap_or_else(|err| {
            warn!(error = %err, "Post simulation failed");
            error_document(&err)
        })
    }
}

impl<C: Clock> Tool for SocialMediaPublisherTool<C> {
    fn name(&self) -> &str {
        PUBLISHER_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Simulates posting content to social media platforms (Twitter, LinkedIn, Facebook, Instagram) \
         with platform-specific formatting, character limits, and optimization rules. \
         Returns structured response with simulated post details including post ID, formatted content, \
         and estimated reach metrics."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "platform": {
                    "type": "string",
                    "description": "Target social media platform (Twitter, LinkedIn, Facebook, Instagram)"
                },
                "content": {
                    "type": "string",
                    "description": "The content to be posted"
                },
                "image_url": {
                    "type": "string",
                    "description": "Optional URL of image to attach to the post"
                },
                "scheduled_time": {
                    "type": "string",
                    "description": "Optional scheduled time in ISO format (YYYY-MM-DD HH:MM:SS)"
                }
            },
            "required": ["platform", "content"]
        })
    }

    fn execute(&self, input: Value) -> Value {
        match serde_json::from_value::<PostRequest>(input) {
            Ok(request) => self.publish(&request),
            Err(e) => {
                let err = PublishError::new(PublishErrorKind::InvalidInput(e.to_string()));
                warn!(error = %err, "Rejected publisher input");
                error_document(&err)
            }
        }
    }
}

/// Render a publishing failure as the tool's error document.
pub fn error_document(err: &PublishError) -> Value {
    match err.kind() {
        PublishErrorKind::UnsupportedPlatform(name) => {
            let supported = Platform::supported_names();
            json!({
                "error": format!(
                    "Platform '{}' is not supported. Supported platforms: {}",
                    name,
                    supported.join(", ")
                ),
                "supported_platforms": supported,
            })
        }
        PublishErrorKind::InvalidScheduledTime(_) => json!({ "error": SCHEDULE_HINT }),
        PublishErrorKind::InvalidInput(cause) | PublishErrorKind::Serialization(cause) => json!({
            "error": format!("An error occurred while processing the post: {cause}")
        }),
    }
}
