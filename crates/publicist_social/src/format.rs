//! Platform-specific content formatting.

use derive_getters::Getters;
use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

use crate::Platform;
use crate::profile::FormatRule;

/// A change the formatter made to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Modification {
    /// Content was cut to the platform's limit.
    #[display("Content truncated to fit {_0} character limit")]
    Truncated(usize),
    /// A discoverability hashtag was appended.
    #[display("Added hashtag for better discoverability")]
    HashtagAdded,
    /// A professional call-to-action was appended.
    #[display("Added professional call-to-action")]
    CallToActionAdded,
    /// An engagement question was appended.
    #[display("Added engagement question")]
    EngagementQuestionAdded,
    /// A set of reach hashtags was appended.
    #[display("Added relevant hashtags for better reach")]
    HashtagsAdded,
    /// No rule fired.
    #[display("No modifications needed - content optimized for platform")]
    Unchanged,
}

impl Serialize for Modification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Formatter output.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FormattedContent {
    /// Adjusted content
    content: String,
    /// Rules that fired, in application order
    modifications: Vec<Modification>,
}

impl FormattedContent {
    /// Consume into the adjusted content string.
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Summary of formatting work, as reported alongside a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct FormattingDetails {
    /// Platform the rules came from
    platform: Platform,
    /// Length of the content before formatting, in characters
    original_length: usize,
    /// Applied modifications, or a single [`Modification::Unchanged`]
    modifications: Vec<Modification>,
}

impl FormattingDetails {
    /// Build the report for `original` from the modifications the formatter applied.
    pub fn new(platform: Platform, original: &str, applied: &[Modification]) -> Self {
        let modifications = if applied.is_empty() {
            vec![Modification::Unchanged]
        } else {
            applied.to_vec()
        };
        Self {
            platform,
            original_length: char_len(original),
            modifications,
        }
    }
}

/// Apply the platform's formatting rule to `content`.
///
/// Length checks count characters. Rules that look for `#` or `?` inspect
/// the original content, so a Twitter post truncated past its only
/// hashtag does not get a replacement tag.
///
/// # Examples
///
/// ```
/// use publicist_social::{Platform, format_content};
///
/// let formatted = format_content(Platform::Facebook, "Big news today");
/// assert!(formatted.content().ends_with("Let us know in the comments!"));
/// ```
#[instrument(skip(content), fields(content_len = content.len()))]
pub fn format_content(platform: Platform, content: &str) -> FormattedContent {
    let mut modifications = Vec::new();

    let formatted = match platform.profile().format {
        FormatRule::TruncateAndTag {
            limit,
            keep,
            ellipsis,
            hashtag,
        } => {
            let mut out = if char_len(content) > limit {
                modifications.push(Modification::Truncated(limit));
                let mut cut = take_chars(content, keep).to_string();
                cut.push_str(ellipsis);
                cut
            } else {
                content.to_string()
            };
            if !content.contains('#') {
                modifications.push(Modification::HashtagAdded);
                out.push_str(hashtag);
            }
            out
        }
        FormatRule::CallToAction { below, suffix } => {
            if char_len(content) < below {
                modifications.push(Modification::CallToActionAdded);
                format!("{content}{suffix}")
            } else {
                content.to_string()
            }
        }
        FormatRule::EngagementQuestion { suffix } => {
            if content.contains('?') {
                content.to_string()
            } else {
                modifications.push(Modification::EngagementQuestionAdded);
                format!("{content}{suffix}")
            }
        }
        FormatRule::Hashtags { pool, take } => {
            if content.contains('#') {
                content.to_string()
            } else {
                modifications.push(Modification::HashtagsAdded);
                let tags: Vec<&str> = pool.iter().copied().take(take).collect();
                format!("{content}\n\n{}", tags.join(" "))
            }
        }
    };

    debug!(
        platform = %platform,
        modifications = modifications.len(),
        "Formatted content"
    );

    FormattedContent {
        content: formatted,
        modifications,
    }
}

/// Character count, matching how platforms count post length.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_chars_respects_char_boundaries() {
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("abc", 0), "");
    }

    #[test]
    fn test_modification_serializes_as_note() {
        let note = serde_json::to_value(Modification::Truncated(280)).unwrap();
        assert_eq!(note, "Content truncated to fit 280 character limit");
    }

    #[test]
    fn test_details_report_unchanged() {
        let details = FormattingDetails::new(Platform::Facebook, "Ready?", &[]);
        assert_eq!(details.modifications(), &vec![Modification::Unchanged]);
        assert_eq!(*details.original_length(), 6);
    }
}
