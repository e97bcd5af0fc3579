// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands for checking a corpus before it ships: `search` runs a
//! query through the same search box the page uses, `inspect` summarizes the
//! index, and `highlight` shows the markup one title would get.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Search and inspect a static site's search corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug events to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// Path to the corpus JSON (an array of {title, excerpt, content, url, date})
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to list (the total is always reported)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the HTML fragment the page would render
        #[arg(long)]
        html: bool,

        /// Site config JSON overriding search defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize the index built from a corpus file
    Inspect {
        /// Path to the corpus JSON
        corpus: PathBuf,

        /// Number of most common terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print the highlighted HTML of a piece of text
    Highlight {
        /// Text to highlight
        text: String,

        /// Literal query to mark
        query: String,
    },
}
