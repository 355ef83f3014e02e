//! Per-platform rule tables.
//!
//! Each [`Platform`](crate::Platform) maps to one [`PlatformProfile`]. The
//! formatter, reach estimator and insight generator read these records
//! instead of branching on platform names.

/// How content is adjusted before posting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatRule {
    /// Cut overlong content and tag untagged content.
    TruncateAndTag {
        /// Maximum length before truncation kicks in
        limit: usize,
        /// Characters kept when truncating
        keep: usize,
        /// Appended after the kept characters
        ellipsis: &'static str,
        /// Appended when the original content has no `#`
        hashtag: &'static str,
    },
    /// Append a call-to-action to short content.
    CallToAction {
        /// Content shorter than this gets the suffix
        below: usize,
        /// Appended text
        suffix: &'static str,
    },
    /// Append a question when the content asks none.
    EngagementQuestion {
        /// Appended text
        suffix: &'static str,
    },
    /// Append hashtags when the content has none.
    Hashtags {
        /// Candidate hashtags, in preference order
        pool: &'static [&'static str],
        /// How many of the pool to append
        take: usize,
    },
}

/// Inclusive content-length band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBand {
    /// Lower bound
    pub min: usize,
    /// Upper bound, unbounded when `None`
    pub max: Option<usize>,
}

impl LengthBand {
    /// Whether `length` falls inside the band.
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && self.max.is_none_or(|max| length <= max)
    }
}

/// Parameters of the synthetic reach model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachProfile {
    /// Smallest base impression count
    pub base_min: u64,
    /// Largest base impression count
    pub base_max: u64,
    /// Lengths that earn the bonus
    pub optimal_band: LengthBand,
    /// Multiplier for content inside the band
    pub length_bonus: f64,
}

/// Static best-practice metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTable {
    /// Hard character limit
    pub character_limit: Option<usize>,
    /// Caption length limit
    pub caption_limit: Option<usize>,
    /// Length guidance
    pub optimal_length: Option<&'static str>,
    /// Hashtag count guidance
    pub optimal_hashtags: Option<&'static str>,
    /// Posting windows
    pub best_posting_time: &'static str,
    /// General advice
    pub recommendation: &'static str,
}

/// Everything the simulator knows about one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProfile {
    /// Formatting rule
    pub format: FormatRule,
    /// Reach model
    pub reach: ReachProfile,
    /// Best-practice table
    pub insights: InsightTable,
}

/// Hashtags offered to untagged Instagram captions.
pub const INSTAGRAM_HASHTAGS: &[&str] = &[
    "#instagram",
    "#content",
    "#social",
    "#engagement",
    "#community",
];

pub(crate) const TWITTER: PlatformProfile = PlatformProfile {
    format: FormatRule::TruncateAndTag {
        limit: 280,
        keep: 277,
        ellipsis: "...",
        hashtag: " #SocialMedia",
    },
    reach: ReachProfile {
        base_min: 50,
        base_max: 500,
        optimal_band: LengthBand {
            min: 100,
            max: Some(280),
        },
        length_bonus: 1.2,
    },
    insights: InsightTable {
        character_limit: Some(280),
        caption_limit: None,
        optimal_length: None,
        optimal_hashtags: Some("1-2"),
        best_posting_time: "9 AM - 10 AM, 7 PM - 9 PM",
        recommendation: "Keep it concise and engaging. Add relevant hashtags.",
    },
};

pub(crate) const LINKEDIN: PlatformProfile = PlatformProfile {
    format: FormatRule::CallToAction {
        below: 100,
        suffix: "\n\nWhat are your thoughts on this? Share your experience in the comments!",
    },
    reach: ReachProfile {
        base_min: 100,
        base_max: 1000,
        optimal_band: LengthBand {
            min: 150,
            max: Some(300),
        },
        length_bonus: 1.3,
    },
    insights: InsightTable {
        character_limit: None,
        caption_limit: None,
        optimal_length: Some("150-300 characters for high engagement"),
        optimal_hashtags: None,
        best_posting_time: "Tuesday - Thursday, 8 AM - 10 AM",
        recommendation: "Professional tone works best. Ask questions to drive engagement.",
    },
};

pub(crate) const FACEBOOK: PlatformProfile = PlatformProfile {
    format: FormatRule::EngagementQuestion {
        suffix: "\n\nWhat do you think? Let us know in the comments!",
    },
    reach: ReachProfile {
        base_min: 200,
        base_max: 1500,
        optimal_band: LengthBand {
            min: 100,
            max: None,
        },
        length_bonus: 1.2,
    },
    insights: InsightTable {
        character_limit: None,
        caption_limit: None,
        optimal_length: Some("40-80 characters for highest engagement"),
        optimal_hashtags: None,
        best_posting_time: "1 PM - 4 PM, 6 PM - 9 PM",
        recommendation: "Visual content performs 2.3x better. Ask questions to boost engagement.",
    },
};

pub(crate) const INSTAGRAM: PlatformProfile = PlatformProfile {
    format: FormatRule::Hashtags {
        pool: INSTAGRAM_HASHTAGS,
        take: 3,
    },
    reach: ReachProfile {
        base_min: 300,
        base_max: 2000,
        optimal_band: LengthBand {
            min: 100,
            max: None,
        },
        length_bonus: 1.2,
    },
    insights: InsightTable {
        character_limit: None,
        caption_limit: Some(2200),
        optimal_length: None,
        optimal_hashtags: Some("5-10"),
        best_posting_time: "6 AM - 9 AM, 7 PM - 8 PM",
        recommendation: "High-quality visuals are essential. Use relevant hashtags strategically.",
    },
};
