// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the jobmatch command-line interface.
//!
//! Records live in a JSON catalog file. `job` and `candidate` manage it,
//! `match` ranks every candidate against one job, `explain` breaks a single
//! pairing down by shared term, and `check` confirms the catalog file is
//! present and loads, then flags records with no indexable text.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jobmatch",
    about = "Rank candidate profiles against job postings by TF-IDF similarity",
    version
)]
pub struct Cli {
    /// Catalog file holding jobs and candidates
    #[arg(long, global = true, env = "JOBMATCH_CATALOG", default_value = "jobmatch.json")]
    pub catalog: PathBuf,

    /// Optional JSON config (top_k limits, score precision, tokenizer)
    #[arg(long, global = true, env = "JOBMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level (otherwise JOBMATCH_LOG, default warn)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage job postings
    #[command(subcommand)]
    Job(JobCommand),

    /// Manage candidate profiles
    #[command(subcommand)]
    Candidate(CandidateCommand),

    /// Rank all candidates against a job
    Match {
        /// Job id
        job_id: String,

        /// Number of matches to return (defaults to the config value, 5)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which terms a job and a candidate share, and what each contributes
    Explain {
        job_id: String,
        candidate_id: String,

        /// Maximum number of terms to show
        #[arg(long, default_value = "10")]
        terms: usize,
    },

    /// Load the catalog, report record counts and flag unindexable records
    Check,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Add a job posting
    Add(JobFields),
    /// List job postings
    List,
    /// Show one job posting
    Show { id: String },
}

#[derive(Subcommand)]
pub enum CandidateCommand {
    /// Add a candidate profile
    Add(CandidateFields),
    /// List candidate profiles
    List,
    /// Show one candidate profile
    Show { id: String },
}

#[derive(Args)]
pub struct JobFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub requirements: Option<String>,
}

#[derive(Args)]
pub struct CandidateFields {
    #[arg(long)]
    pub name: String,
    /// Comma-separated skills or free text
    #[arg(long)]
    pub skills: String,
    #[arg(long)]
    pub summary: Option<String>,
}
