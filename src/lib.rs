// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Post-Classifier: turn fitness-tracker social posts into activity records
//!
//! This crate classifies short auto-generated posts (completed workouts,
//! live broadcasts, achievement badges) and extracts the user's commentary,
//! workout type and distance from each one.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::ClassifyError;
pub use models::{ActivityRecord, BatchSummary, Category, RawPost};
pub use services::PostBatch;
