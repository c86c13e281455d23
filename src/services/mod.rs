// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - classification logic.

pub mod activity;
pub mod batch;
pub mod boilerplate;
pub mod category;
pub mod render;
pub mod search;
pub mod written;

pub use activity::{activity_type, distance_miles};
pub use batch::PostBatch;
pub use boilerplate::strip_boilerplate;
pub use category::classify_source;
pub use render::{html_table_row, linkify};
pub use search::{render_rows, search_written};
pub use written::{is_written, written_text};
