//! Skillscout - project technology profiler and skill recommender.
//!
//! Skillscout infers a project's technology profile (frameworks, languages,
//! tools, testing stack) from its filesystem and `package.json`, then uses
//! that profile to retrieve and curate recommended skills from the external
//! skills registry.
//!
//! # Architecture
//!
//! - `context`: read-only project snapshot (root, manifest, dependency map)
//! - `detect`: static rule catalogs, the detection engine, and the
//!   supersession filter
//! - `skills`: curated overrides, registry search, relevance filtering, and
//!   result aggregation
//! - `report`: characteristics and skills reports (pretty, JSON)
//!
//! Detection and filtering are pure and synchronous; the only suspending
//! operation is the per-term registry search, which is bounded by a fixed
//! timeout and degrades to "no result" on any failure.

pub mod cli;
pub mod context;
pub mod detect;
pub mod report;
pub mod skills;

pub use context::{Manifest, SignalContext};
pub use detect::{detect, filter_superseded, Characteristics, DetectionRule};
pub use skills::{
    aggregate, is_relevant, recommend, CliSearch, SearchError, SkillEntry, SkillRef, SkillSearch,
};
