//! Report assembly and output.
//!
//! Two output surfaces:
//! - Pretty: colored terminal output for human readability
//! - JSON: the characteristics report and the skills report, the latter
//!   written to a well-known file consumed by skill installers
//!
//! JSON files are written atomically (temp file then rename): an
//! interrupted run leaves either nothing or a complete document.

use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::detect::Characteristics;
use crate::skills::SkillEntry;

/// Well-known output file consumed by skill installers.
pub const SKILLS_REPORT_FILE: &str = "recommended-skills.json";

/// Schema identifier embedded in every skills report.
pub const SKILLS_SCHEMA_URL: &str = "https://skillscout.dev/schema/skills-report-v1.json";

/// Characteristics plus the moment they were captured.
#[derive(Serialize)]
pub struct TimestampedCharacteristics {
    #[serde(flatten)]
    pub characteristics: Characteristics,
    pub timestamp: String,
}

/// The skills report document.
#[derive(Serialize)]
pub struct SkillsReport<'a> {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub detected: TimestampedCharacteristics,
    pub skills: &'a [SkillEntry],
}

fn timestamp() -> anyhow::Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("formatting timestamp")
}

/// Serialize the characteristics report with an appended timestamp.
pub fn characteristics_json(characteristics: &Characteristics) -> anyhow::Result<String> {
    let report = TimestampedCharacteristics {
        characteristics: characteristics.clone(),
        timestamp: timestamp()?,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Serialize the full skills report.
pub fn skills_report_json(
    characteristics: &Characteristics,
    skills: &[SkillEntry],
) -> anyhow::Result<String> {
    let report = SkillsReport {
        schema: SKILLS_SCHEMA_URL,
        detected: TimestampedCharacteristics {
            characteristics: characteristics.clone(),
            timestamp: timestamp()?,
        },
        skills,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write the characteristics report to a file, atomically.
pub fn write_characteristics(
    path: &Path,
    characteristics: &Characteristics,
) -> anyhow::Result<()> {
    write_atomic(path, &characteristics_json(characteristics)?)
}

/// Write the skills report into the project root, atomically. Returns the
/// path written.
pub fn write_skills_report(
    root: &Path,
    characteristics: &Characteristics,
    skills: &[SkillEntry],
) -> anyhow::Result<PathBuf> {
    let path = root.join(SKILLS_REPORT_FILE);
    write_atomic(&path, &skills_report_json(characteristics, skills)?)?;
    Ok(path)
}

fn write_atomic(path: &Path, contents: &str) -> anyhow::Result<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents).with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("renaming {} into place", tmp.display()))?;
    Ok(())
}

// =============================================================================
// Pretty format
// =============================================================================

/// Print the detected profile in human-readable form.
pub fn print_characteristics(path: &str, characteristics: &Characteristics) {
    println!();
    print!("  ");
    print!("{}", "skillscout".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Project: ".dimmed());
    println!("{}", path);
    println!();

    print_category("Frameworks", &characteristics.frameworks);
    print_category("Languages", &characteristics.languages);
    print_category("Tools", &characteristics.tools);
    print_category("Testing", &characteristics.testing);
    println!();

    if characteristics.is_empty() {
        println!("  {}", "No technologies detected".yellow());
    } else {
        print!("  {}", "Search terms: ".dimmed());
        println!("{}", characteristics.search_terms.join(", "));
    }
    println!();
}

fn print_category(label: &str, names: &[String]) {
    print!("  {:<12}", format!("{}:", label).bold());
    if names.is_empty() {
        println!(" {}", "none".dimmed());
    } else {
        println!(" {}", names.join(", "));
    }
}

/// Print recommended skills grouped by source.
pub fn print_skills(entries: &[SkillEntry]) {
    if entries.is_empty() {
        println!("  {}", "No skill recommendations".yellow());
        println!();
        return;
    }

    println!("  {} ({}):", "Recommended skills".bold(), entries.len());
    println!();

    for entry in entries {
        println!("    {}", entry.source.blue());
        for skill in &entry.skills {
            println!("      {} {}", "-".dimmed(), skill);
        }
    }
    println!();
}
