//! Hand-vetted skill references consulted before any registry search.
//!
//! A term present here is never sent to the registry: its references are
//! added to the result set unconditionally, bypassing relevance filtering,
//! since the table is hand-maintained.

use phf::phf_map;

static CURATED: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "nextjs" => &[
        "vercel/agent-skills@nextjs-app-router",
        "vercel/agent-skills@nextjs-best-practices",
    ],
    "react" => &["vercel/agent-skills@react-patterns"],
    "vue" => &["vuejs/agent-skills@vue-composition-api"],
    "svelte" => &["sveltejs/agent-skills@svelte-runes"],
    "tailwind" => &["tailwindlabs/agent-skills@tailwind-design"],
};

/// Pre-vetted references for a canonical name, when the term is curated.
pub fn lookup(term: &str) -> Option<&'static [&'static str]> {
    CURATED.get(term).copied()
}
