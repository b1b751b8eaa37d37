//! Project signal context - the read-only snapshot detection runs against.
//!
//! A [`SignalContext`] is built once per run from a project root. It carries
//! the optional parsed `package.json` and a flattened dependency map that is
//! the union of the `dependencies` and `devDependencies` sections. Only the
//! npm manifest is structurally parsed; every other ecosystem is detected
//! purely by marker-file presence.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Parsed `package.json`. Only the dependency sections matter here;
/// everything else in the manifest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Read-only snapshot of a project directory.
///
/// Immutable once constructed; every rule evaluator gets shared access.
#[derive(Debug, Clone)]
pub struct SignalContext {
    root: PathBuf,
    manifest: Option<Manifest>,
    dependencies: BTreeMap<String, String>,
}

impl SignalContext {
    /// Build a context for a project root.
    ///
    /// A missing or malformed `package.json` is not an error: the context
    /// simply carries no manifest and detection falls back to file-marker
    /// rules only.
    pub fn load<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let manifest = read_manifest(&root);
        let dependencies = flatten_dependencies(manifest.as_ref());
        Self {
            root,
            manifest,
            dependencies,
        }
    }

    /// The project root this context was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parsed manifest, when one was found and readable.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// Case-sensitive union of runtime and development dependencies.
    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.dependencies
    }

    /// Whether `name` is a key in the dependency map.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Whether `relative` exists under the project root.
    ///
    /// Never errors; an unreadable path counts as absent.
    pub fn path_exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }
}

fn read_manifest(root: &Path) -> Option<Manifest> {
    let raw = std::fs::read_to_string(root.join("package.json")).ok()?;
    serde_json::from_str(&raw).ok()
}

fn flatten_dependencies(manifest: Option<&Manifest>) -> BTreeMap<String, String> {
    let mut deps = BTreeMap::new();
    if let Some(m) = manifest {
        for (name, version) in m.dependencies.iter().chain(m.dev_dependencies.iter()) {
            deps.insert(name.clone(), version.clone());
        }
    }
    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_manifest() {
        let temp = TempDir::new().unwrap();
        let ctx = SignalContext::load(temp.path());

        assert!(ctx.manifest().is_none());
        assert!(ctx.dependencies().is_empty());
    }

    #[test]
    fn test_load_with_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{
                "name": "demo",
                "dependencies": {"react": "^18.0.0"},
                "devDependencies": {"vitest": "^1.0.0"}
            }"#,
        )
        .unwrap();

        let ctx = SignalContext::load(temp.path());
        assert!(ctx.has_dependency("react"));
        assert!(ctx.has_dependency("vitest"));
        assert!(!ctx.has_dependency("vue"));
        assert_eq!(ctx.dependencies().len(), 2);
    }

    #[test]
    fn test_malformed_manifest_is_ignored() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{not valid json").unwrap();

        let ctx = SignalContext::load(temp.path());
        assert!(ctx.manifest().is_none());
        assert!(ctx.dependencies().is_empty());
    }

    #[test]
    fn test_path_exists() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("next.config.js"), "module.exports = {}").unwrap();

        let ctx = SignalContext::load(temp.path());
        assert!(ctx.path_exists("next.config.js"));
        assert!(!ctx.path_exists("vite.config.ts"));
    }
}
