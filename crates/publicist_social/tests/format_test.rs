//! Tests for per-platform content formatting.

use publicist_social::{FormattingDetails, Modification, Platform, format_content};

const LINKEDIN_CTA: &str =
    "\n\nWhat are your thoughts on this? Share your experience in the comments!";
const FACEBOOK_QUESTION: &str = "\n\nWhat do you think? Let us know in the comments!";

// ============================================================================
// Twitter
// ============================================================================

#[test]
fn test_twitter_short_untagged_gets_hashtag() {
    let formatted = format_content(Platform::Twitter, "Shipping a new release today");
    assert_eq!(
        formatted.content(),
        "Shipping a new release today #SocialMedia"
    );
    assert_eq!(formatted.modifications(), &vec![Modification::HashtagAdded]);
}

#[test]
fn test_twitter_tagged_is_untouched() {
    let content = "Shipping a new release today #rustlang";
    let formatted = format_content(Platform::Twitter, content);
    assert_eq!(formatted.content(), content);
    assert!(formatted.modifications().is_empty());
}

#[test]
fn test_twitter_exactly_280_is_not_truncated() {
    let content = format!("{}#", "a".repeat(279));
    let formatted = format_content(Platform::Twitter, &content);
    assert_eq!(formatted.content(), &content);
}

#[test]
fn test_twitter_long_untagged_is_truncated_then_tagged() {
    let content = "x".repeat(301);
    let formatted = format_content(Platform::Twitter, &content);

    let expected = format!("{}... #SocialMedia", "x".repeat(277));
    assert_eq!(formatted.content(), &expected);
    assert_eq!(formatted.content().chars().count(), 280 + " #SocialMedia".len());
    assert_eq!(
        formatted.modifications(),
        &vec![Modification::Truncated(280), Modification::HashtagAdded]
    );
}

#[test]
fn test_twitter_hashtag_check_uses_original_content() {
    // The only hashtag sits past the cut, so it is lost and not replaced.
    let content = format!("{} #launch", "y".repeat(300));
    let formatted = format_content(Platform::Twitter, &content);

    assert_eq!(formatted.content(), &format!("{}...", "y".repeat(277)));
    assert!(!formatted.content().contains('#'));
    assert_eq!(formatted.modifications(), &vec![Modification::Truncated(280)]);
}

#[test]
fn test_twitter_length_bound() {
    for len in [0, 1, 100, 279, 280, 281, 500, 2000] {
        let untagged = "z".repeat(len);
        let tagged = format!("#{}", "z".repeat(len));

        let out = format_content(Platform::Twitter, &untagged);
        assert!(out.content().chars().count() <= 280 + " #SocialMedia".len());

        let out = format_content(Platform::Twitter, &tagged);
        assert!(out.content().chars().count() <= 280);
    }
}

#[test]
fn test_twitter_counts_characters_not_bytes() {
    let content = "é".repeat(280);
    let formatted = format_content(Platform::Twitter, &content);
    assert!(!formatted.modifications().contains(&Modification::Truncated(280)));
}

// ============================================================================
// LinkedIn
// ============================================================================

#[test]
fn test_linkedin_short_post_gets_call_to_action() {
    let content = "b".repeat(50);
    let formatted = format_content(Platform::LinkedIn, &content);
    assert_eq!(formatted.content(), &format!("{content}{LINKEDIN_CTA}"));
    assert_eq!(
        formatted.modifications(),
        &vec![Modification::CallToActionAdded]
    );
}

#[test]
fn test_linkedin_long_post_is_unchanged() {
    let content = "c".repeat(150);
    let formatted = format_content(Platform::LinkedIn, &content);
    assert_eq!(formatted.content(), &content);
}

#[test]
fn test_linkedin_boundary_at_100() {
    assert!(format_content(Platform::LinkedIn, &"d".repeat(99))
        .content()
        .ends_with(LINKEDIN_CTA));
    assert_eq!(
        format_content(Platform::LinkedIn, &"d".repeat(100)).content(),
        &"d".repeat(100)
    );
}

// ============================================================================
// Facebook
// ============================================================================

#[test]
fn test_facebook_without_question_gets_one() {
    let formatted = format_content(Platform::Facebook, "Our office is moving.");
    assert!(formatted.content().ends_with(FACEBOOK_QUESTION));
}

#[test]
fn test_facebook_with_question_is_unchanged() {
    let content = "Guess where our office is moving?";
    let formatted = format_content(Platform::Facebook, content);
    assert_eq!(formatted.content(), content);
    assert!(formatted.modifications().is_empty());
}

// ============================================================================
// Instagram
// ============================================================================

#[test]
fn test_instagram_untagged_gets_three_hashtags_in_order() {
    let formatted = format_content(Platform::Instagram, "Behind the scenes");
    assert_eq!(
        formatted.content(),
        "Behind the scenes\n\n#instagram #content #social"
    );
    let appended = formatted.content().rsplit("\n\n").next().unwrap();
    assert_eq!(appended.split(' ').count(), 3);
}

#[test]
fn test_instagram_tagged_is_unchanged() {
    let content = "Behind the scenes #bts";
    assert_eq!(format_content(Platform::Instagram, content).content(), content);
}

// ============================================================================
// Formatting report
// ============================================================================

#[test]
fn test_details_list_applied_notes() {
    let content = "w".repeat(400);
    let formatted = format_content(Platform::Twitter, &content);
    let details = FormattingDetails::new(Platform::Twitter, &content, formatted.modifications());

    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["platform"], "Twitter");
    assert_eq!(json["original_length"], 400);
    assert_eq!(
        json["modifications"],
        serde_json::json!([
            "Content truncated to fit 280 character limit",
            "Added hashtag for better discoverability"
        ])
    );
}

#[test]
fn test_details_without_changes() {
    let formatted = format_content(Platform::Instagram, "#already #tagged");
    let details =
        FormattingDetails::new(Platform::Instagram, "#already #tagged", formatted.modifications());
    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(
        json["modifications"],
        serde_json::json!(["No modifications needed - content optimized for platform"])
    );
}
