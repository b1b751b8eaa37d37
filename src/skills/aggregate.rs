//! Skill reference parsing and result aggregation.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A parsed skill reference: `owner/repo@skill` or bare `owner/repo`.
///
/// `skill` is empty when the reference has no `@` segment - source-only
/// references are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillRef {
    pub source: String,
    pub skill: String,
}

impl SkillRef {
    /// Parse a reference string. Returns `None` when the `owner/repository`
    /// shape is missing.
    pub fn parse(raw: &str) -> Option<Self> {
        let (source, skill) = match raw.split_once('@') {
            Some((source, skill)) => (source, skill),
            None => (raw, ""),
        };

        let (owner, repo) = source.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }

        Some(Self {
            source: source.to_string(),
            skill: skill.to_string(),
        })
    }
}

impl std::fmt::Display for SkillRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.skill.is_empty() {
            write!(f, "{}", self.source)
        } else {
            write!(f, "{}@{}", self.source, self.skill)
        }
    }
}

/// One entry per distinct source repository, with its skill names sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub source: String,
    pub skills: Vec<String>,
}

/// Merge references into per-source entries.
///
/// Dedupe is by exact reference string - two different skill names under the
/// same source are distinct. Entries are sorted by source name; a source-only
/// reference contributes an entry with an empty skill list.
pub fn aggregate(refs: &[SkillRef]) -> Vec<SkillEntry> {
    let mut seen = BTreeSet::new();
    let mut by_source: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for skill_ref in refs {
        if !seen.insert(skill_ref.to_string()) {
            continue;
        }
        let skills = by_source.entry(skill_ref.source.clone()).or_default();
        if !skill_ref.skill.is_empty() {
            skills.insert(skill_ref.skill.clone());
        }
    }

    by_source
        .into_iter()
        .map(|(source, skills)| SkillEntry {
            source,
            skills: skills.into_iter().collect(),
        })
        .collect()
}
