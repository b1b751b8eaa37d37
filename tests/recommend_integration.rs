//! Integration tests for the recommendation pipeline and the skills report.

use std::cell::RefCell;
use std::path::Path;

use skillscout::report::{self, SKILLS_REPORT_FILE, SKILLS_SCHEMA_URL};
use skillscout::{detect, recommend, SearchError, SignalContext, SkillSearch};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("should create fixture dirs");
    }
    std::fs::write(&path, contents).expect("should write fixture");
}

/// Replays canned registry output and records which terms were searched.
struct ScriptedSearch {
    responses: Vec<(&'static str, Result<&'static str, SearchError>)>,
    queried: RefCell<Vec<String>>,
}

impl ScriptedSearch {
    fn new(responses: Vec<(&'static str, Result<&'static str, SearchError>)>) -> Self {
        Self {
            responses,
            queried: RefCell::new(Vec::new()),
        }
    }
}

impl SkillSearch for ScriptedSearch {
    fn search(&self, term: &str) -> Result<String, SearchError> {
        self.queried.borrow_mut().push(term.to_string());
        match self.responses.iter().find(|(t, _)| *t == term) {
            Some((_, Ok(raw))) => Ok(raw.to_string()),
            Some((_, Err(_))) | None => Err(SearchError::Timeout),
        }
    }
}

#[test]
fn test_curated_framework_bypasses_search() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "next.config.js", "module.exports = {};");
    write(
        temp.path(),
        "package.json",
        r#"{"dependencies": {"prisma": "^5.0.0"}}"#,
    );

    let characteristics = detect(&SignalContext::load(temp.path()));
    assert!(characteristics.frameworks.contains(&"nextjs".to_string()));

    let search = ScriptedSearch::new(vec![
        ("prisma", Ok("acme/database-skills@prisma-migrations\n")),
        ("javascript", Ok("")),
    ]);
    let entries = recommend(&characteristics, Some(&search));

    // Curated terms never reach the registry.
    assert!(!search.queried.borrow().iter().any(|t| t == "nextjs"));
    // Their references land in the result set unconditionally.
    assert!(entries.iter().any(|e| e.source == "vercel/agent-skills"));
    assert!(entries.iter().any(|e| e.source == "acme/database-skills"));
}

#[test]
fn test_search_timeout_degrades_to_no_result() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "package.json",
        r#"{"dependencies": {"prisma": "^5.0.0"}}"#,
    );

    let characteristics = detect(&SignalContext::load(temp.path()));
    let search = ScriptedSearch::new(vec![("prisma", Err(SearchError::Timeout))]);

    // The run completes; the timed-out term contributes nothing.
    let entries = recommend(&characteristics, Some(&search));
    assert!(!entries.iter().any(|e| e
        .skills
        .iter()
        .any(|s| s.contains("prisma"))));

    let path = report::write_skills_report(temp.path(), &characteristics, &entries).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert!(value["skills"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["source"] != "acme/database-skills"));
}

#[test]
fn test_relevance_filter_applied_to_search_results() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "go.mod", "module example.com/svc\n");

    let characteristics = detect(&SignalContext::load(temp.path()));
    assert_eq!(characteristics.search_terms, vec!["go"]);

    // Registry noise: colored output, an infix-only match, a mobile-only
    // candidate, then a genuine one.
    let search = ScriptedSearch::new(vec![(
        "go",
        Ok("\x1b[1mSearch results\x1b[0m\n\
            owner/django-helpers@orm\n\
            owner/flutter-go-bridge@channels\n\
            gopher/go-skills@concurrency\n"),
    )]);

    let entries = recommend(&characteristics, Some(&search));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, "gopher/go-skills");
    assert_eq!(entries[0].skills, vec!["concurrency"]);
}

#[test]
fn test_skills_report_document_shape() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "next.config.js", "module.exports = {};");

    let characteristics = detect(&SignalContext::load(temp.path()));
    let entries = recommend(&characteristics, None);
    report::write_skills_report(temp.path(), &characteristics, &entries).unwrap();

    let raw = std::fs::read_to_string(temp.path().join(SKILLS_REPORT_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["$schema"], SKILLS_SCHEMA_URL);
    for key in ["frameworks", "languages", "tools", "testing", "searchTerms"] {
        assert!(
            value["detected"][key].is_array(),
            "detected.{} should be an array",
            key
        );
    }
    assert!(value["detected"]["timestamp"].as_str().unwrap().contains('T'));
    assert!(value["skills"].is_array());
}

#[test]
fn test_report_written_once_with_no_leftover_temp() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "next.config.js", "module.exports = {};");

    let characteristics = detect(&SignalContext::load(temp.path()));
    let entries = recommend(&characteristics, None);
    report::write_skills_report(temp.path(), &characteristics, &entries).unwrap();
    // Overwriting an existing report is fine and still atomic.
    report::write_skills_report(temp.path(), &characteristics, &entries).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
        .collect();
    assert!(leftovers.is_empty());
}
