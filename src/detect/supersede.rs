//! Supersession filtering for the detected tools list.
//!
//! When a more specific tool is present, the generic tool it replaces is
//! dropped from the final output. Applied once, after detection - it never
//! stops a rule from matching, it only prunes what gets reported.

/// "If `keep` is present, drop everything in `drops`."
struct SupersessionRule {
    keep: &'static str,
    drops: &'static [&'static str],
}

static RULES: &[SupersessionRule] = &[
    // Turbopack replaces webpack outright.
    SupersessionRule {
        keep: "turbopack",
        drops: &["webpack"],
    },
    // Biome covers both linting and formatting.
    SupersessionRule {
        keep: "biome",
        drops: &["eslint", "prettier"],
    },
];

/// Remove tools superseded by a more specific tool also present.
///
/// Idempotent: applying the filter twice yields the same list as once.
pub fn filter_superseded(tools: &[String]) -> Vec<String> {
    let dropped: Vec<&str> = RULES
        .iter()
        .filter(|rule| tools.iter().any(|t| t == rule.keep))
        .flat_map(|rule| rule.drops.iter().copied())
        .collect();

    tools
        .iter()
        .filter(|t| !dropped.contains(&t.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_turbopack_drops_webpack() {
        let filtered = filter_superseded(&tools(&["webpack", "turbopack"]));
        assert_eq!(filtered, tools(&["turbopack"]));
    }

    #[test]
    fn test_biome_drops_eslint_and_prettier() {
        let filtered = filter_superseded(&tools(&["eslint", "prettier", "biome", "vite"]));
        assert_eq!(filtered, tools(&["biome", "vite"]));
    }

    #[test]
    fn test_webpack_alone_survives() {
        let filtered = filter_superseded(&tools(&["webpack", "eslint"]));
        assert_eq!(filtered, tools(&["webpack", "eslint"]));
    }

    #[test]
    fn test_idempotent() {
        let once = filter_superseded(&tools(&["webpack", "turbopack", "eslint", "biome"]));
        let twice = filter_superseded(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_superseded(&[]).is_empty());
    }
}
