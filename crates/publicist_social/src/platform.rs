//! Supported social media platforms.

use publicist_error::{PublishError, PublishErrorKind, PublishResult};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::profile::{self, PlatformProfile};

/// Social media platforms the publisher can simulate.
///
/// Display and serialized names are the canonical capitalized names
/// (`"LinkedIn"`, not `"Linkedin"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Platform {
    /// Twitter / X
    Twitter,
    /// LinkedIn
    LinkedIn,
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
}

impl Platform {
    /// Resolve a platform from a user-supplied name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`PublishErrorKind::UnsupportedPlatform`] carrying the name as
    /// given when no platform matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use publicist_social::Platform;
    ///
    /// assert_eq!(Platform::resolve("linkedin").unwrap(), Platform::LinkedIn);
    /// assert!(Platform::resolve("TikTok").is_err());
    /// ```
    #[track_caller]
    pub fn resolve(name: &str) -> PublishResult<Self> {
        Self::iter()
            .find(|platform| platform.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                PublishError::new(PublishErrorKind::UnsupportedPlatform(name.to_string()))
            })
    }

    /// Canonical platform name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Canonical names of every supported platform, in declaration order.
    pub fn supported_names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }

    /// Rule table for this platform.
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Self::Twitter => &profile::TWITTER,
            Self::LinkedIn => &profile::LINKEDIN,
            Self::Facebook => &profile::FACEBOOK,
            Self::Instagram => &profile::INSTAGRAM,
        }
    }
}
