//! Post request and result types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::{EstimatedReach, FormattingDetails, Platform, PlatformInsights, Timestamp};

/// A post to simulate.
///
/// The platform is kept as given so that unsupported names can be echoed
/// back in error reports.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PostRequest {
    /// Target platform name, any case.
    platform: String,

    /// Text to post.
    content: String,

    /// Image to attach.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    image_url: Option<String>,

    /// ISO timestamp to schedule the post for.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    scheduled_time: Option<String>,
}

impl PostRequest {
    /// Request an immediate text-only post.
    pub fn new(platform: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            content: content.into(),
            image_url: None,
            scheduled_time: None,
        }
    }

    /// Start a builder.
    pub fn builder() -> PostRequestBuilder {
        PostRequestBuilder::default()
    }

    /// Whether a non-empty image reference is attached.
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Scheduled time, treating an empty string as absent.
    pub fn schedule(&self) -> Option<&str> {
        self.scheduled_time.as_deref().filter(|s| !s.is_empty())
    }
}

/// Whether a simulated post went out now or later.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostStatus {
    /// Posted immediately.
    Published,
    /// Queued for the scheduled time.
    Scheduled,
}

/// Outcome of a simulated post.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct PostResult {
    /// Fabricated post identifier, `<platform>_<6 digits>`.
    post_id: String,
    /// Canonical platform.
    platform: Platform,
    /// Content after platform formatting.
    formatted_content: String,
    /// Content as submitted.
    original_content: String,
    /// Image reference as submitted.
    image_url: Option<String>,
    /// Scheduled time, or the time the post was published.
    scheduled_time: Timestamp,
    /// Published or scheduled.
    status: PostStatus,
    /// Fabricated reach metrics.
    estimated_reach: EstimatedReach,
    /// Best-practice metadata.
    platform_insights: PlatformInsights,
    /// Formatting report.
    formatting_applied: FormattingDetails,
}

impl PostResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        post_id: String,
        platform: Platform,
        formatted_content: String,
        original_content: String,
        image_url: Option<String>,
        scheduled_time: Timestamp,
        status: PostStatus,
        estimated_reach: EstimatedReach,
        platform_insights: PlatformInsights,
        formatting_applied: FormattingDetails,
    ) -> Self {
        Self {
            post_id,
            platform,
            formatted_content,
            original_content,
            image_url,
            scheduled_time,
            status,
            estimated_reach,
            platform_insights,
            formatting_applied,
        }
    }
}
