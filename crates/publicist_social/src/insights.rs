//! Per-platform best-practice insights.

use derive_getters::Getters;
use serde::Serialize;

use crate::Platform;
use crate::format::char_len;

const PERFORMANCE_BOOST: &str = "+50% estimated reach";
const IMAGE_SUGGESTION: &str = "Consider adding an image to increase engagement";

/// Best-practice metadata for a post.
///
/// Fields a platform does not define are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PlatformInsights {
    character_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    character_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimal_length: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimal_hashtags: Option<&'static str>,
    best_posting_time: &'static str,
    recommendation: &'static str,
    image_attached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    performance_boost: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'static str>,
}

/// Look up insights for `platform` and annotate them for `content`.
pub fn platform_insights(platform: Platform, content: &str, has_image: bool) -> PlatformInsights {
    let table = platform.profile().insights;
    PlatformInsights {
        character_count: char_len(content),
        character_limit: table.character_limit,
        caption_limit: table.caption_limit,
        optimal_length: table.optimal_length,
        optimal_hashtags: table.optimal_hashtags,
        best_posting_time: table.best_posting_time,
        recommendation: table.recommendation,
        image_attached: has_image,
        performance_boost: has_image.then_some(PERFORMANCE_BOOST),
        suggestion: (!has_image).then_some(IMAGE_SUGGESTION),
    }
}
