//! Simulated social media publishing.
//!
//! Nothing here talks to a network. The crate formats content the way each
//! platform prefers and fabricates reach numbers so that an agent crew can
//! rehearse a publishing workflow end to end.
//!
//! - [`format_content`] applies the platform's formatting rule
//! - [`estimate_reach`] fabricates impressions, engagements and clicks
//! - [`platform_insights`] looks up best-practice metadata
//! - [`Publisher`] ties the three together for a [`PostRequest`]
//!
//! Randomness and the wall clock are injected, so a seeded
//! [`rand::rngs::StdRng`] and a [`FixedClock`] make results reproducible.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod format;
mod insights;
mod platform;
mod post;
mod profile;
mod publisher;
mod reach;
mod schedule;

pub use format::{FormattedContent, FormattingDetails, Modification, format_content};
pub use insights::{PlatformInsights, platform_insights};
pub use platform::Platform;
pub use post::{PostRequest, PostRequestBuilder, PostResult, PostStatus};
pub use profile::{
    FormatRule, INSTAGRAM_HASHTAGS, InsightTable, LengthBand, PlatformProfile, ReachProfile,
};
pub use publisher::{POST_ID_RANGE, Publisher};
pub use reach::{
    CLICK_RATE, CONFIDENCE_RANGE, ENGAGEMENT_RATE, EstimatedReach, IMAGE_BOOST, estimate_reach,
};
pub use schedule::{Clock, FixedClock, SystemClock, Timestamp, parse_scheduled_time};
