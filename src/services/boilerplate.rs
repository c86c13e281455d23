// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Removal of auto-generated phrasing, links and hashtags from post text.
//!
//! Both written-content detection and the written-text fallback go through
//! [`strip_boilerplate`], so the two always agree on what is left over.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("valid url regex"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Za-z_]+").expect("valid hashtag regex"));
static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Device name the tracker appends after the commentary separator.
pub(crate) static HARDWARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTomTom MySports Watch\b").expect("valid hardware regex")
});

/// Boilerplate patterns, applied in order. The `^` anchored entries only
/// ever match at the very start of the remaining text.
const BOILERPLATE_PATTERNS: &[&str] = &[
    r"(?i)^just completed[^-]*-",
    r"(?i)^just completed[^!]*!",
    r"(?i)^just completed",
    r"(?i)^just posted[^-]*-",
    r"(?i)^just posted[^!]*!",
    r"(?i)^just posted",
    r"(?i)with @runkeeper",
    r"(?i)using @runkeeper",
    r"(?i)on @runkeeper",
    r"(?i)check it out",
    r"(?i)view my activity",
    r"(?i)achieved a new personal record",
    r"(?i)personal best",
    r"(?i)personal record",
    r"(?i)watch my .* with @runkeeper live",
    r"(?i)\bTomTom MySports Watch\b",
];

static BOILERPLATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BOILERPLATE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid boilerplate regex"))
        .collect()
});

/// Strip links, hashtags and platform boilerplate, leaving only what a
/// person may have typed.
pub fn strip_boilerplate(text: &str) -> String {
    let mut s = remove_links_and_hashtags(text, " ");

    for re in BOILERPLATE_RES.iter() {
        s = re.replace_all(&s, " ").trim().to_string();
    }

    tidy(&s)
}

/// Replace every URL and hashtag with `replacement`, then trim.
pub(crate) fn remove_links_and_hashtags(text: &str, replacement: &str) -> String {
    let without_urls = URL_RE.replace_all(text, replacement);
    HASHTAG_RE
        .replace_all(&without_urls, replacement)
        .trim()
        .to_string()
}

/// Collapse whitespace runs and trim surrounding whitespace and punctuation.
pub(crate) fn tidy(text: &str) -> String {
    MULTI_SPACE_RE
        .replace_all(text, " ")
        .trim_matches(is_edge_char)
        .to_string()
}

fn is_edge_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '-' | '–' | '—')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_completed_prefix_and_link() {
        let stripped =
            strip_boilerplate("Just completed a 5.12 km run - Lovely morning https://t.co/abc");
        assert_eq!(stripped, "Lovely morning");
    }

    #[test]
    fn test_strips_exclamation_prefix() {
        let stripped =
            strip_boilerplate("Just completed a 3.00 mi walk with @Runkeeper! Check it out! #RK");
        assert_eq!(stripped, "");
    }

    #[test]
    fn test_strips_hashtags_and_personal_best() {
        let stripped = strip_boilerplate("New personal best in the 10k! #proud #running");
        assert_eq!(stripped, "New in the 10k");
    }

    #[test]
    fn test_brand_mention_removed_before_live_phrase() {
        // "with @runkeeper" runs first, so the live phrase no longer matches whole
        let stripped =
            strip_boilerplate("Watch my run right now with @Runkeeper Live https://rk.com/live");
        assert_eq!(stripped, "Watch my run right now Live");
    }

    #[test]
    fn test_strips_hardware_name() {
        let stripped = strip_boilerplate(
            "Just posted a 4.2 mi run - TomTom MySports Watch https://rk.com/b",
        );
        assert_eq!(stripped, "");
    }

    #[test]
    fn test_tidy_trims_dashes_and_collapses_spaces() {
        assert_eq!(tidy(" — hello   there ,. "), "hello there");
        assert_eq!(tidy("...!!"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_boilerplate(""), "");
    }
}
