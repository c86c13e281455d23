// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Batch ingestion: load raw posts and classify them.

use std::fs;
use std::path::Path;

use crate::error::{ClassifyError, Result};
use crate::models::{ActivityRecord, BatchSummary, RawPost};

/// A classified collection of posts, in input order.
#[derive(Debug, Default, Clone)]
pub struct PostBatch {
    records: Vec<ActivityRecord>,
}

impl PostBatch {
    /// Load and classify posts from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading posts");
        let json_data =
            fs::read_to_string(path).map_err(|e| ClassifyError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load and classify posts from a JSON array of `{text, created_at}`.
    ///
    /// A top-level `null` means the loader returned nothing and fails with
    /// [`ClassifyError::NoPosts`].
    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let posts: Option<Vec<RawPost>> = serde_json::from_str(json_data)
            .map_err(|e| ClassifyError::Parse(e.to_string()))?;
        Self::from_posts(posts.as_deref())
    }

    /// Classify an already-loaded collection.
    pub fn from_posts(posts: Option<&[RawPost]>) -> Result<Self> {
        let posts = posts.ok_or(ClassifyError::NoPosts)?;

        let records: Vec<ActivityRecord> = posts.iter().map(ActivityRecord::from_post).collect();

        let unparsed = records.iter().filter(|r| r.time().is_none()).count();
        if unparsed > 0 {
            tracing::warn!(
                count = unparsed,
                "Posts with unparseable timestamps excluded from date statistics"
            );
        }

        tracing::info!(count = records.len(), "Classified posts");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate statistics over the batch.
    pub fn summary(&self, top_n: usize) -> BatchSummary {
        BatchSummary::from_records(&self.records, top_n)
    }
}
