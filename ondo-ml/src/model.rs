//! Per-user offset model
//!
//! Exponential-moving-average over the user's feedback history: each rating
//! pulls the offset 20% of the way toward its target (+3.0 for hot, -3.0 for
//! cold, 0.0 for just_right), so the offset converges toward the user's
//! tendency as feedback accumulates. The result is clamped to ±3.0 and
//! rounded to two decimals.

use ondo_common::types::{FeedbackEntry, FeedbackRating};

const LEARNING_RATE: f64 = 0.2;
const MAX_OFFSET: f64 = 3.0;
const MIN_OFFSET: f64 = -3.0;

/// Target the EMA moves toward for one rating.
///
/// "Hot" means the user ran warm: raising the perceived temperature steers
/// the rule table toward lighter clothing, and vice versa for "cold".
fn target_score(rating: FeedbackRating) -> f64 {
    match rating {
        FeedbackRating::Hot => MAX_OFFSET,
        FeedbackRating::Cold => MIN_OFFSET,
        FeedbackRating::JustRight => 0.0,
    }
}

/// Compute the personalization offset for one user from the full feedback
/// collection. No feedback means no personalization: 0.0.
pub fn personal_offset(entries: &[FeedbackEntry], user_id: &str) -> f64 {
    let mut history: Vec<&FeedbackEntry> =
        entries.iter().filter(|e| e.user_id == user_id).collect();

    if history.is_empty() {
        return 0.0;
    }

    // Oldest first, so recent feedback weighs heaviest
    history.sort_by_key(|e| e.timestamp);

    let mut offset = 0.0;
    for entry in &history {
        offset += LEARNING_RATE * (target_score(entry.feedback) - offset);
    }

    let clamped = offset.clamp(MIN_OFFSET, MAX_OFFSET);
    (clamped * 100.0).round() / 100.0
}
