// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::process;

use jobmatch::{
    explain, logging, rank_with, Catalog, Document, MatchConfig, NewCandidate, NewJob,
};

mod cli;
use cli::{display, CandidateCommand, Cli, Commands, JobCommand};

fn main() {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    let mut catalog = Catalog::load(&cli.catalog)?;

    match cli.command {
        Commands::Job(JobCommand::Add(fields)) => {
            let job = catalog
                .add_job(NewJob {
                    title: fields.title,
                    description: fields.description,
                    requirements: fields.requirements,
                })?
                .clone();
            catalog.save(&cli.catalog)?;
            display::print_job(&job);
        }
        Commands::Job(JobCommand::List) => display::print_jobs(catalog.jobs()),
        Commands::Job(JobCommand::Show { id }) => display::print_job(catalog.job(&id)?),
        Commands::Candidate(CandidateCommand::Add(fields)) => {
            let candidate = catalog
                .add_candidate(NewCandidate {
                    name: fields.name,
                    skills: fields.skills,
                    summary: fields.summary,
                })?
                .clone();
            catalog.save(&cli.catalog)?;
            display::print_candidate(&candidate);
        }
        Commands::Candidate(CandidateCommand::List) => {
            display::print_candidates(catalog.candidates())
        }
        Commands::Candidate(CandidateCommand::Show { id }) => {
            display::print_candidate(catalog.candidate(&id)?)
        }
        Commands::Match {
            job_id,
            top_k,
            json,
        } => {
            let top_k = top_k.unwrap_or(config.default_top_k);
            let matches = catalog.matches(&job_id, top_k, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                display::print_matches(catalog.job(&job_id)?, &matches, config.score_precision);
            }
        }
        Commands::Explain {
            job_id,
            candidate_id,
            terms,
        } => {
            let job = catalog.job(&job_id)?;
            let candidate = catalog.candidate(&candidate_id)?;
            let query = Document::from_job(job);
            let document = Document::from_candidate(candidate);
            let pairwise = rank_with(
                &query.text,
                &[(document.id.as_str(), document.text.as_str())],
                1,
                &config.tokenizer,
            );
            let score = pairwise.first().map(|s| s.score).unwrap_or(0.0);
            let breakdown = explain(&query.text, &document.text, &config.tokenizer, terms);
            display::print_explanation(job, candidate, score, &breakdown, config.score_precision);
        }
        Commands::Check => {
            if !cli.catalog.is_file() {
                return Err(format!("no catalog file at {}", cli.catalog.display()).into());
            }
            println!(
                "ok: {} jobs, {} candidates ({})",
                catalog.jobs().len(),
                catalog.candidates().len(),
                cli.catalog.display()
            );
            for id in catalog.unindexable(&config.tokenizer) {
                println!("warning: {} has no indexable terms and always scores 0", id);
            }
        }
    }
    Ok(())
}
