// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Table-row markup for the presentation layer.
//!
//! The text is inserted as-is apart from link wrapping; callers own any
//! further escaping.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ActivityRecord, Category};

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s]+").expect("valid link regex"));

/// Wrap every URL in `text` in an anchor that opens in a new tab.
pub fn linkify(text: &str) -> String {
    LINK_RE
        .replace_all(
            text,
            r#"<a href="${0}" target="_blank" rel="noopener noreferrer">${0}</a>"#,
        )
        .into_owned()
}

/// Render `<tr><td>{row}</td><td>{activity}</td><td>{linked text}</td></tr>`.
///
/// The activity cell is empty for anything but a completed event.
pub fn html_table_row(record: &ActivityRecord, row_number: usize) -> String {
    let activity = if record.source() == Category::CompletedEvent {
        record.activity_type()
    } else {
        ""
    };
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        row_number,
        activity,
        linkify(record.text())
    )
}
