//! Relevance filtering for raw registry search candidates.
//!
//! Registry searches return free-text identifiers, and a naive substring
//! test produces false positives: a search for "go" must not match
//! `owner/django-helpers`. The primary test is therefore a word-boundary
//! match, with a substring fallback reserved for compound (hyphenated)
//! terms. An ecosystem veto then rejects platform-specific material for
//! projects not detected as that platform.

/// Marker substrings tied to a non-web ecosystem. A candidate containing a
/// marker is rejected unless the project was itself detected as that
/// ecosystem.
struct EcosystemVeto {
    ecosystem: &'static str,
    markers: &'static [&'static str],
}

static ECOSYSTEM_VETOES: &[EcosystemVeto] = &[
    EcosystemVeto {
        ecosystem: "react-native",
        markers: &["react-native", "expo"],
    },
    EcosystemVeto {
        ecosystem: "flutter",
        markers: &["flutter"],
    },
    EcosystemVeto {
        ecosystem: "electron",
        markers: &["electron"],
    },
    EcosystemVeto {
        ecosystem: "ionic",
        markers: &["ionic"],
    },
];

/// Decide whether a raw search candidate is a genuine match for a term.
///
/// Stateless and per-candidate; the caller keeps only the first relevant
/// candidate per term.
pub fn is_relevant(candidate: &str, term: &str, detected_frameworks: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    let term = term.to_lowercase();

    // Word-boundary first; compound terms may fall back to a plain
    // substring match (a generic term matching a framework-specific
    // variant of the same utility).
    let term_matches = word_bounded(&candidate, &term)
        || (term.contains('-') && candidate.contains(term.as_str()));
    if !term_matches {
        return false;
    }

    for veto in ECOSYSTEM_VETOES {
        let flagged = veto.markers.iter().any(|m| candidate.contains(m));
        if flagged && !detected_frameworks.iter().any(|f| f == veto.ecosystem) {
            return false;
        }
    }

    true
}

/// True when `term` occurs in `candidate` bounded by non-letter characters
/// (or the string edges) on both sides.
fn word_bounded(candidate: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    for (idx, _) in candidate.match_indices(term) {
        let before_ok = candidate[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphabetic());
        let after_ok = candidate[idx + term.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphabetic());
        if before_ok && after_ok {
            return true;
        }
    }

    false
}
