// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Batch-level error types.
//!
//! Classification itself never fails: every extractor returns a sentinel
//! when nothing matches. Errors only arise while obtaining the posts.

/// Errors raised while loading or ingesting a batch of posts.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The post collection was absent (e.g. the loader produced `null`).
    #[error("No posts returned")]
    NoPosts,

    #[error("Failed to read posts file: {0}")]
    Io(String),

    #[error("Failed to parse posts JSON: {0}")]
    Parse(String),
}

impl ClassifyError {
    /// Process exit code reported by the CLI for this error (sysexits values).
    pub fn exit_code(&self) -> u8 {
        match self {
            ClassifyError::NoPosts => {
                tracing::warn!("Classification aborted: no posts returned");
                2
            }
            ClassifyError::Parse(msg) => {
                tracing::error!(error = %msg, "Posts JSON rejected");
                65
            }
            ClassifyError::Io(msg) => {
                tracing::error!(error = %msg, "Posts file unreadable");
                66
            }
        }
    }
}

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, ClassifyError>;
