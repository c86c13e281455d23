// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout type and distance extraction for completed-event posts.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Category;
use crate::services::category::classify_source;

/// Label for posts that are not completed events.
pub const UNKNOWN_ACTIVITY: &str = "unknown";

/// Kilometres per mile used for unit conversion.
pub const KM_PER_MILE: f64 = 1.609;

const CHAIR_RIDE: &str = "chair ride";

/// Workout keywords and their canonical label. Order matters: the first
/// keyword found (as a whole word, ASCII word boundaries) decides the label.
pub(crate) const ACTIVITY_KEYWORDS: &[(&str, &str)] = &[
    ("running", "run"),
    ("run", "run"),
    ("walking", "walk"),
    ("walk", "walk"),
    ("cycling", "bike"),
    ("cycle", "bike"),
    ("biking", "bike"),
    ("bike", "bike"),
    ("hiking", "hike"),
    ("hike", "hike"),
    ("swimming", "swim"),
    ("swim", "swim"),
    ("chair ride", "chair ride"),
    ("chairride", "chair ride"),
    ("spinning", "spinning"),
    ("spin", "spinning"),
    ("elliptical", "elliptical"),
    ("rowing", "row"),
    ("row", "row"),
    ("skiing", "ski"),
    ("ski", "ski"),
    ("yoga", "yoga"),
    ("barre", "barre"),
    ("strength", "strength"),
    ("workout", "workout"),
    ("sports", "sports"),
    ("football", "football"),
];

static KEYWORD_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ACTIVITY_KEYWORDS
        .iter()
        .map(|&(keyword, label)| {
            let re = Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword)))
                .expect("valid keyword regex");
            (re, label)
        })
        .collect()
});

static DISTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(mi|miles|km|kilometers?)")
        .expect("valid distance regex")
});

/// Canonical workout label for a post.
///
/// Returns [`UNKNOWN_ACTIVITY`] unless the post is a completed event, and
/// `""` when it is one but no workout keyword appears.
pub fn activity_type(text: &str) -> &'static str {
    if classify_source(text) != Category::CompletedEvent {
        return UNKNOWN_ACTIVITY;
    }
    match_activity_keyword(&text.to_lowercase()).unwrap_or("")
}

/// First whole-word keyword hit in lower-cased text.
fn match_activity_keyword(lowered: &str) -> Option<&'static str> {
    if lowered.contains(CHAIR_RIDE) {
        return Some(CHAIR_RIDE);
    }

    KEYWORD_RES
        .iter()
        .find(|(re, _)| re.is_match(lowered))
        .map(|&(_, label)| label)
}

/// Distance covered in miles, `0.0` for anything but a completed event
/// or when no distance is mentioned. Only the first match counts.
pub fn distance_miles(text: &str) -> f64 {
    if classify_source(text) != Category::CompletedEvent {
        return 0.0;
    }

    let Some(caps) = DISTANCE_RE.captures(text) else {
        return 0.0;
    };
    let Ok(value) = caps[1].parse::<f64>() else {
        return 0.0;
    };

    match caps[2].to_ascii_lowercase().as_str() {
        "mi" | "miles" => value,
        _ => value / KM_PER_MILE,
    }
}
