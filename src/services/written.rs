// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Detection and extraction of user-written commentary.

use regex::Regex;
use std::sync::LazyLock;

use super::boilerplate::{remove_links_and_hashtags, strip_boilerplate, tidy, HARDWARE_RE};

/// Two consecutive letters, or a single pictograph/emoji.
static WRITTEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]{2}|[\x{1F300}-\x{1FAFF}]").expect("valid written regex")
});

/// Generated captions put the user's words after this separator.
const COMMENTARY_SEPARATOR: &str = " - ";

/// Whether anything a person typed survives boilerplate removal.
pub fn is_written(text: &str) -> bool {
    WRITTEN_RE.is_match(&strip_boilerplate(text))
}

/// Recover the user's commentary, or `""` if the post has none.
///
/// Takes the text after the first `" - "` once links and hashtags are gone.
/// When there is no separator, or nothing usable follows it, the
/// boilerplate-stripped text is returned instead; that text is never empty
/// for a written post, so `written_text` is empty exactly when
/// [`is_written`] is false.
pub fn written_text(text: &str) -> String {
    if !is_written(text) {
        return String::new();
    }

    let without_links = remove_links_and_hashtags(text, "");
    if let Some(idx) = without_links.find(COMMENTARY_SEPARATOR) {
        let candidate = without_links[idx + COMMENTARY_SEPARATOR.len()..].trim();
        let candidate = HARDWARE_RE.replace_all(candidate, "");
        let candidate = tidy(candidate.trim());
        if !candidate.is_empty() {
            return candidate;
        }
    }

    strip_boilerplate(text)
}
