// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post category detection.

use crate::models::Category;

/// Phrases that mark an achievement badge post.
const ACHIEVEMENT_PHRASES: &[&str] = &[
    "achieved a new personal record",
    "personal record",
    "personal best",
    "set a goal",
];

/// Prefixes of auto-generated completed-workout posts.
const COMPLETED_PREFIXES: &[&str] = &["just completed", "just posted"];

const BRAND_HANDLE: &str = "@runkeeper";

/// Classify a post's text into exactly one [`Category`].
///
/// Rules are checked in priority order and the first hit wins, so an
/// achievement or live broadcast that also starts with "just completed"
/// is never reported as a completed event.
pub fn classify_source(text: &str) -> Category {
    let t = text.to_lowercase();

    if ACHIEVEMENT_PHRASES.iter().any(|p| t.contains(p)) {
        return Category::Achievement;
    }

    if is_live_broadcast(&t) {
        return Category::LiveEvent;
    }

    if COMPLETED_PREFIXES.iter().any(|p| t.starts_with(p)) {
        return Category::CompletedEvent;
    }

    // Branded and unbranded leftovers are both miscellaneous
    Category::Miscellaneous
}

fn is_live_broadcast(t: &str) -> bool {
    let branded = t.contains(BRAND_HANDLE);
    (t.contains(" live") && branded)
        || t.contains("using @runkeeper live")
        || (t.contains("watch my") && t.contains("live") && branded)
}
