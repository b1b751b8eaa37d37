//! External registry search.
//!
//! The production path shells out to the skills registry CLI
//! (`npx skills find <term>`) with a fixed timeout, bridging into async
//! process handling through a dedicated runtime. Every failure mode -
//! spawn error, timeout, non-zero exit - degrades to "no candidates";
//! search is never fatal to a run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

use super::aggregate::SkillRef;

/// Fixed timeout for a single registry search.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during a registry search.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to run search command: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("search timed out after {}s", SEARCH_TIMEOUT.as_secs())]
    Timeout,
    #[error("search command exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Source of raw registry search output.
///
/// The production implementation spawns the registry CLI; tests substitute
/// canned output.
pub trait SkillSearch {
    /// Raw search output for a term. Callers treat every error as "no
    /// candidates for this term" and continue with the next term.
    fn search(&self, term: &str) -> Result<String, SearchError>;
}

/// Searches by spawning the registry CLI, `npx skills find <term>` by
/// default.
pub struct CliSearch {
    program: String,
    base_args: Vec<String>,
    runtime: tokio::runtime::Runtime,
}

impl CliSearch {
    /// Search via `npx skills find <term>`.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_command("npx", &["skills", "find"])
    }

    /// Search via a custom registry CLI invocation; `<term>` is appended to
    /// `base_args`.
    pub fn with_command(program: &str, base_args: &[&str]) -> anyhow::Result<Self> {
        Ok(Self {
            program: program.to_string(),
            base_args: base_args.iter().map(|s| s.to_string()).collect(),
            runtime: tokio::runtime::Runtime::new()?,
        })
    }
}

impl SkillSearch for CliSearch {
    fn search(&self, term: &str) -> Result<String, SearchError> {
        self.runtime.block_on(async {
            let output = Command::new(&self.program)
                .args(&self.base_args)
                .arg(term)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .output();

            let output = match tokio::time::timeout(SEARCH_TIMEOUT, output).await {
                Ok(result) => result?,
                Err(_) => return Err(SearchError::Timeout),
            };

            if !output.status.success() {
                return Err(SearchError::Failed(output.status));
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        })
    }
}

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid ANSI regex"));

static SKILL_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+").expect("valid reference regex")
});

/// Extract candidate references from raw search output.
///
/// The CLI interleaves terminal control sequences with its listing; those
/// are stripped before scanning for `owner/repo@skill` shapes.
pub fn parse_candidates(raw: &str) -> Vec<SkillRef> {
    let clean = ANSI_ESCAPE.replace_all(raw, "");
    SKILL_REFERENCE
        .find_iter(&clean)
        .filter_map(|m| SkillRef::parse(m.as_str()))
        .collect()
}
