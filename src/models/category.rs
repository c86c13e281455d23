// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Top-level post category.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category of a post. Serialized values are the lowercase keys
/// downstream consumers group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    CompletedEvent,
    LiveEvent,
    Achievement,
    Miscellaneous,
}

impl Category {
    /// All categories, in reporting order.
    pub const ALL: [Category; 4] = [
        Category::CompletedEvent,
        Category::LiveEvent,
        Category::Achievement,
        Category::Miscellaneous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::CompletedEvent => "completed_event",
            Category::LiveEvent => "live_event",
            Category::Achievement => "achievement",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
