// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post-Classifier CLI
//!
//! Loads exported posts, classifies them and prints records, a batch
//! summary or search results.

use anyhow::Context;
use clap::{Parser, Subcommand};
use post_classifier::{
    config::{Config, LogFormat},
    services::{render_rows, search_written},
    ClassifyError, PostBatch,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "post-classifier")]
#[command(about = "Classify fitness-tracker posts into activity records")]
struct Cli {
    /// JSON file of `{text, created_at}` posts (overrides POSTS_PATH)
    #[arg(long)]
    posts: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one JSON record per post
    Classify,
    /// Print batch statistics as JSON
    Summary {
        /// Number of most common activities to report (overrides TOP_ACTIVITIES)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Search written posts and print matching table rows
    Search { query: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::from(78);
        }
    };
    init_logging(config.log_format);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ClassifyError>() {
            Some(classify_err) => {
                eprintln!("{err:#}");
                ExitCode::from(classify_err.exit_code())
            }
            None => {
                tracing::error!(error = %err, "Command failed");
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let path = cli.posts.unwrap_or_else(|| config.posts_path.clone());
    let batch = PostBatch::load_from_file(&path)?;

    match cli.command {
        Commands::Classify => {
            for record in batch.records() {
                let line = serde_json::to_string(record).context("serializing record")?;
                println!("{line}");
            }
        }
        Commands::Summary { top } => {
            let top_n = top.unwrap_or(config.top_activities).max(1);
            let summary = batch.summary(top_n);
            let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
            println!("{json}");
        }
        Commands::Search { query } => {
            let matches = search_written(batch.records(), &query);
            tracing::info!(query = %query, count = matches.len(), "Search complete");
            println!("{}", matches.len());
            for row in render_rows(&matches) {
                println!("{row}");
            }
        }
    }

    Ok(())
}

/// Initialize logging to stderr so stdout carries only command output.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("post_classifier=debug,info"));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .with_current_span(true)
                .flatten_event(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogFormat::Pretty => {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}
