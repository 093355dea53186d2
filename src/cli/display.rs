// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for jobmatch CLI.
//!
//! Match tables, record listings and score breakdowns, drawn in boxes and
//! coloured by score band. Colour is off when stdout is not a TTY or `NO_COLOR`
//! is set, so piped output stays plain text.
//!
//! # Theme detection order
//!
//! 1. `JOBMATCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use jobmatch::{CandidateProfile, JobPosting, MatchResult, TermContribution};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("JOBMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colours 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// (dark, light) pairs from the OneDark / One Light palettes.
mod palette {
    pub const GREEN: [(u8, u8, u8); 2] = [(152, 195, 121), (80, 161, 79)];
    pub const YELLOW: [(u8, u8, u8); 2] = [(229, 192, 123), (193, 132, 1)];
    pub const CYAN: [(u8, u8, u8); 2] = [(86, 182, 194), (1, 132, 188)];
    pub const GRAY: [(u8, u8, u8); 2] = [(92, 99, 112), (160, 161, 167)];
    pub const RED: [(u8, u8, u8); 2] = [(224, 108, 117), (228, 86, 73)];
}

fn themed_code(pair: [(u8, u8, u8); 2]) -> String {
    match theme() {
        Theme::Dark => rgb(pair[0]),
        Theme::Light => rgb(pair[1]),
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(pair: [(u8, u8, u8); 2], bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, themed_code(pair), text, RESET)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

fn border(text: &str) -> String {
    paint(palette::GRAY, false, text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(palette::CYAN, true, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Score with colour by band: strong ≥ 0.5, partial ≥ 0.2, weak > 0, none.
pub fn score_value(score: f64, precision: u32) -> String {
    let text = format!("{:.*}", precision as usize, score);
    if score >= 0.5 {
        paint(palette::GREEN, true, &text)
    } else if score >= 0.2 {
        paint(palette::YELLOW, false, &text)
    } else if score > 0.0 {
        paint(palette::GRAY, false, &text)
    } else {
        paint(palette::RED, false, &text)
    }
}

/// Ten-cell bar, one cell per tenth of the score.
pub fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 1.0) * 10.0).round()) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn print_matches(job: &JobPosting, matches: &[MatchResult], precision: u32) {
    section_top(&format!("MATCHES · {}", truncate(&job.title, 50)));
    if matches.is_empty() {
        row(" no candidates to rank");
    }
    for (rank, m) in matches.iter().enumerate() {
        row(&format!(
            " {:>3}. {} {} {} {}",
            rank + 1,
            pad_right(&truncate(&m.name, 24), 24),
            score_value(m.score, precision),
            score_bar(m.score),
            border(&truncate(&m.candidate_id, 24)),
        ));
    }
    section_bot();
}

pub fn print_jobs(jobs: &[JobPosting]) {
    section_top(&format!("JOBS ({})", jobs.len()));
    for job in jobs {
        row(&format!(" {}  {}", border(&job.id), truncate(&job.title, 36)));
    }
    section_bot();
}

pub fn print_candidates(candidates: &[CandidateProfile]) {
    section_top(&format!("CANDIDATES ({})", candidates.len()));
    for c in candidates {
        row(&format!(" {}  {}", border(&c.id), truncate(&c.name, 36)));
    }
    section_bot();
}

pub fn print_job(job: &JobPosting) {
    section_top("JOB");
    row(&format!(" id           {}", job.id));
    row(&format!(" title        {}", truncate(&job.title, 62)));
    row(&format!(" description  {}", truncate(&job.description, 62)));
    if let Some(requirements) = &job.requirements {
        row(&format!(" requirements {}", truncate(requirements, 62)));
    }
    section_bot();
}

pub fn print_candidate(candidate: &CandidateProfile) {
    section_top("CANDIDATE");
    row(&format!(" id       {}", candidate.id));
    row(&format!(" name     {}", truncate(&candidate.name, 66)));
    row(&format!(" skills   {}", truncate(&candidate.skills, 66)));
    if let Some(summary) = &candidate.summary {
        row(&format!(" summary  {}", truncate(summary, 66)));
    }
    section_bot();
}

pub fn print_explanation(
    job: &JobPosting,
    candidate: &CandidateProfile,
    score: f64,
    terms: &[TermContribution],
    precision: u32,
) {
    section_top(&format!(
        "WHY {} FOR {}",
        truncate(&candidate.name, 24),
        truncate(&job.title, 24)
    ));
    row(&format!(
        " pairwise score {} {}",
        score_value(score, precision),
        score_bar(score)
    ));
    if terms.is_empty() {
        row(" no shared terms");
    }
    for t in terms {
        row(&format!(
            "   {} {:.4} × {:.4} = {}",
            pad_right(&truncate(&t.term, 24), 24),
            t.query_weight,
            t.candidate_weight,
            score_value(t.contribution, precision),
        ));
    }
    section_bot();
}
