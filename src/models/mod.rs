// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod category;
pub mod post;
pub mod record;
pub mod summary;

pub use category::Category;
pub use post::RawPost;
pub use record::ActivityRecord;
pub use summary::BatchSummary;
