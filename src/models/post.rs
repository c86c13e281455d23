// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw post model as delivered by the loader.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A single post before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RawPost {
    /// Original post body, untrimmed
    #[serde(default)]
    pub text: String,
    /// Creation timestamp (e.g. "Mon Jan 01 10:00:00 +0000 2024")
    #[serde(default)]
    pub created_at: String,
}

impl RawPost {
    pub fn new(text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: created_at.into(),
        }
    }
}
