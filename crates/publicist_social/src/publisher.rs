//! Simulated publishing.

use rand::Rng;
use tracing::{debug, info, instrument};

use publicist_error::PublishResult;

use crate::format::char_len;
use crate::{
    Clock, FormattingDetails, Platform, PostRequest, PostResult, PostStatus, SystemClock,
    Timestamp, estimate_reach, format_content, parse_scheduled_time, platform_insights,
};

/// Range of the numeric suffix in generated post identifiers.
pub const POST_ID_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Runs a [`PostRequest`] through formatting, scheduling and reach estimation.
///
/// Holds no state besides its clock; randomness is supplied per call.
#[derive(Debug, Clone, Default)]
pub struct Publisher<C: Clock = SystemClock> {
    clock: C,
}

impl Publisher<SystemClock> {
    /// Publisher reading the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Publisher<C> {
    /// Publisher reading the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Simulate posting `request`.
    ///
    /// # Errors
    ///
    /// Fails when the platform is unsupported or the scheduled time does not
    /// parse. Nothing is formatted for an unsupported platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use publicist_social::{PostRequest, PostStatus, Publisher};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let publisher = Publisher::new();
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let request = PostRequest::builder()
    ///     .platform("twitter")
    ///     .content("Launch day!")
    ///     .scheduled_time("2025-05-01 09:00:00")
    ///     .build()
    ///     .unwrap();
    ///
    /// let post = publisher.publish(&request, &mut rng).unwrap();
    /// assert_eq!(*post.status(), PostStatus::Scheduled);
    /// assert!(post.post_id().starts_with("twitter_"));
    /// ```
    #[instrument(skip(self, request, rng), fields(platform = %request.platform()))]
    pub fn publish<R: Rng + ?Sized>(
        &self,
        request: &PostRequest,
        rng: &mut R,
    ) -> PublishResult<PostResult> {
        let platform = Platform::resolve(request.platform())?;
        let content = request.content();

        let post_id = format!(
            "{}_{}",
            platform.name().to_lowercase(),
            rng.gen_range(POST_ID_RANGE)
        );

        let formatted = format_content(platform, content);

        let (scheduled_time, status) = match request.schedule() {
            Some(raw) => (parse_scheduled_time(raw)?, PostStatus::Scheduled),
            None => (Timestamp::Naive(self.clock.now()), PostStatus::Published),
        };
        debug!(%scheduled_time, %status, "Resolved post time");

        let has_image = request.has_image();
        let estimated_reach = estimate_reach(platform, char_len(content), has_image, rng);
        let platform_insights = platform_insights(platform, content, has_image);
        let formatting_applied =
            FormattingDetails::new(platform, content, formatted.modifications());

        info!(
            %post_id,
            %status,
            impressions = estimated_reach.estimated_impressions(),
            "Simulated post"
        );

        Ok(PostResult::new(
            post_id,
            platform,
            formatted.into_content(),
            content.clone(),
            request.image_url().clone(),
            scheduled_time,
            status,
            estimated_reach,
            platform_insights,
            formatting_applied,
        ))
    }
}
