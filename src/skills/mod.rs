//! Skill recommendation pipeline.
//!
//! For each detected search term: curated references win outright and skip
//! the registry; every other term goes through one sequential registry
//! search, keeping only the first candidate that survives the relevance
//! filter. Search failures contribute nothing and never abort the run.

pub mod aggregate;
pub mod curated;
pub mod relevance;
pub mod search;

pub use aggregate::{aggregate, SkillEntry, SkillRef};
pub use relevance::is_relevant;
pub use search::{CliSearch, SearchError, SkillSearch, SEARCH_TIMEOUT};

use crate::detect::Characteristics;

/// Build skill recommendations for a detected profile.
///
/// `searcher` is `None` in curated-only mode; no subprocess is spawned and
/// uncurated terms simply contribute nothing.
pub fn recommend(
    characteristics: &Characteristics,
    searcher: Option<&dyn SkillSearch>,
) -> Vec<SkillEntry> {
    let mut refs: Vec<SkillRef> = Vec::new();
    let mut uncurated: Vec<&str> = Vec::new();

    for term in &characteristics.search_terms {
        match curated::lookup(term) {
            Some(entries) => {
                refs.extend(entries.iter().filter_map(|raw| SkillRef::parse(raw)));
            }
            None => uncurated.push(term),
        }
    }

    if let Some(searcher) = searcher {
        for term in uncurated {
            // One blocking search per term, strictly sequential, no retry.
            let raw = match searcher.search(term) {
                Ok(raw) => raw,
                Err(_) => continue,
            };

            // First relevant candidate wins over the registry's ranking.
            let winner = search::parse_candidates(&raw).into_iter().find(|c| {
                relevance::is_relevant(&c.to_string(), term, &characteristics.frameworks)
            });
            if let Some(candidate) = winner {
                refs.push(candidate);
            }
        }
    }

    aggregate(&refs)
}
