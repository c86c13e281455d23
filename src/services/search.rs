// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search over user-written posts.

use crate::models::ActivityRecord;

/// Written posts whose commentary (or, failing that, full text) contains
/// `query`, case-insensitively. A blank query matches nothing.
pub fn search_written<'a>(records: &'a [ActivityRecord], query: &str) -> Vec<&'a ActivityRecord> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&ActivityRecord> = records
        .iter()
        .filter(|r| r.written())
        .filter(|r| {
            r.written_text().to_lowercase().contains(&needle)
                || r.text().to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!(query, count = matches.len(), "Searched written posts");
    matches
}

/// Table rows for search results, numbered from 1.
pub fn render_rows(matches: &[&ActivityRecord]) -> Vec<String> {
    matches
        .iter()
        .enumerate()
        .map(|(i, record)| record.html_table_row(i + 1))
        .collect()
}
