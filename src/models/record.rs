// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Classified activity record derived from a raw post.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Category, RawPost};
use crate::services::{activity, category, render, written};
use crate::time_utils;

/// Structured view of one post.
///
/// Every field is derived once from the raw text and timestamp and never
/// changes afterwards; fields are read through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    text: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    time: Option<DateTime<FixedOffset>>,
    source: Category,
    written: bool,
    written_text: String,
    activity_type: String,
    distance: f64,
    day_of_week: Option<String>,
}

impl ActivityRecord {
    /// Derive a record from a raw post body and timestamp.
    pub fn new(raw_text: &str, created_at: &str) -> Self {
        let text = raw_text.trim_matches(is_trimmable).to_string();
        let time = time_utils::parse_created_at(created_at);

        Self {
            source: category::classify_source(&text),
            written: written::is_written(&text),
            written_text: written::written_text(&text),
            activity_type: activity::activity_type(&text).to_string(),
            distance: activity::distance_miles(&text),
            day_of_week: time
                .as_ref()
                .map(|t| time_utils::day_of_week(t).to_string()),
            time,
            text,
        }
    }

    pub fn from_post(post: &RawPost) -> Self {
        Self::new(&post.text, &post.created_at)
    }

    /// Trimmed post body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed timestamp, `None` if `created_at` was not understood.
    pub fn time(&self) -> Option<&DateTime<FixedOffset>> {
        self.time.as_ref()
    }

    pub fn source(&self) -> Category {
        self.source
    }

    pub fn written(&self) -> bool {
        self.written
    }

    pub fn written_text(&self) -> &str {
        &self.written_text
    }

    /// Canonical workout label, `"unknown"` for non-completed posts,
    /// `""` for completed posts with no recognised workout.
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    /// Distance in miles.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn day_of_week(&self) -> Option<&str> {
        self.day_of_week.as_deref()
    }

    /// Table row markup for this record at the given 1-based position.
    pub fn html_table_row(&self, row_number: usize) -> String {
        render::html_table_row(self, row_number)
    }
}

/// Whitespace plus the byte-order mark, which exports sometimes prepend.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
