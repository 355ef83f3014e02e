//! Synthetic reach estimation.
//!
//! The numbers are fabricated. They only look plausible: a random base
//! drawn from the platform's range, scaled up for images and for content
//! whose length falls in the platform's sweet spot.

use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::Platform;

/// Multiplier applied when an image is attached.
pub const IMAGE_BOOST: f64 = 1.5;

/// Share of impressions that turn into engagements.
pub const ENGAGEMENT_RATE: f64 = 0.05;

/// Share of impressions that turn into clicks.
pub const CLICK_RATE: f64 = 0.02;

/// Bounds of the fabricated confidence score.
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<f64> = 0.7..=0.95;

/// Fabricated reach metrics for one post.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Getters)]
pub struct EstimatedReach {
    /// Impressions
    estimated_impressions: u64,
    /// `floor(impressions * 0.05)`
    estimated_engagements: u64,
    /// `floor(impressions * 0.02)`
    estimated_clicks: u64,
    /// Two-decimal score in `[0.7, 0.95]`
    confidence_score: f64,
}

/// Estimate reach for a post of `content_length` characters.
///
/// Draws twice from `rng`: once for the base impressions and once for the
/// confidence score.
///
/// # Examples
///
/// ```
/// use publicist_social::{Platform, estimate_reach};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let reach = estimate_reach(Platform::Instagram, 40, true, &mut rng);
/// assert!(*reach.estimated_impressions() >= 450);
/// ```
#[instrument(skip(rng))]
pub fn estimate_reach<R: Rng + ?Sized>(
    platform: Platform,
    content_length: usize,
    has_image: bool,
    rng: &mut R,
) -> EstimatedReach {
    let profile = platform.profile().reach;

    let mut impressions = rng.gen_range(profile.base_min..=profile.base_max);
    if has_image {
        impressions = scale(impressions, IMAGE_BOOST);
    }
    if profile.optimal_band.contains(content_length) {
        impressions = scale(impressions, profile.length_bonus);
    }

    let confidence_score = round_to_hundredths(rng.gen_range(CONFIDENCE_RANGE));

    debug!(impressions, confidence_score, "Estimated reach");

    EstimatedReach {
        estimated_impressions: impressions,
        estimated_engagements: scale(impressions, ENGAGEMENT_RATE),
        estimated_clicks: scale(impressions, CLICK_RATE),
        confidence_score,
    }
}

/// Multiply and truncate toward zero.
fn scale(value: u64, factor: f64) -> u64 {
    (value as f64 * factor) as u64
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
