//! Technology detection engine.
//!
//! Evaluates the static rule catalogs against a [`SignalContext`], producing
//! ordered, deduplicated canonical-name lists per category plus the combined
//! search-term list. Evaluation is synchronous and deterministic: the same
//! context always yields the same output.

mod catalog;
mod supersede;

pub use catalog::{DetectionRule, FRAMEWORKS, LANGUAGES, TESTING, TOOLS};
pub use supersede::filter_superseded;

use serde::Serialize;
use std::collections::BTreeSet;

use crate::context::SignalContext;

/// Detected project characteristics.
///
/// Category lists follow catalog declaration order; `search_terms` is the
/// lexicographically sorted, duplicate-free union of all four.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub testing: Vec<String>,
    pub search_terms: Vec<String>,
}

impl Characteristics {
    /// Whether nothing at all was detected.
    pub fn is_empty(&self) -> bool {
        self.search_terms.is_empty()
    }
}

/// Run all four catalogs against a project context.
///
/// Tools are pruned through the supersession filter before the search-term
/// union is built, so a superseded tool never becomes a search term.
pub fn detect(ctx: &SignalContext) -> Characteristics {
    let frameworks = run_catalog(ctx, catalog::FRAMEWORKS);
    let languages = run_catalog(ctx, catalog::LANGUAGES);
    let tools = supersede::filter_superseded(&run_catalog(ctx, catalog::TOOLS));
    let testing = run_catalog(ctx, catalog::TESTING);

    let search_terms: Vec<String> = frameworks
        .iter()
        .chain(&languages)
        .chain(&tools)
        .chain(&testing)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Characteristics {
        frameworks,
        languages,
        tools,
        testing,
        search_terms,
    }
}

fn run_catalog(ctx: &SignalContext, rules: &[DetectionRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule_matches(ctx, rule))
        .map(|rule| rule.name.to_string())
        .collect()
}

/// Evaluate one rule's clauses in priority order.
fn rule_matches(ctx: &SignalContext, rule: &DetectionRule) -> bool {
    // Required files: all must exist; a satisfied clause short-circuits.
    if !rule.required_files.is_empty() && rule.required_files.iter().all(|p| ctx.path_exists(p)) {
        return true;
    }

    // Marker files: any existing non-glob path matches.
    if rule
        .marker_files
        .iter()
        .any(|p| !is_glob_path(p) && ctx.path_exists(p))
    {
        return true;
    }

    rule.dependency_names.iter().any(|d| ctx.has_dependency(d))
}

/// Glob-style marker paths are never matched; glob expansion is out of
/// scope and the catalogs keep such entries for documentation only.
fn is_glob_path(path: &str) -> bool {
    path.contains(['*', '?', '['])
}
