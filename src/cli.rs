//! Command-line interface for skillscout.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::context::SignalContext;
use crate::detect;
use crate::report;
use crate::skills::{self, CliSearch, SkillSearch};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Project technology profiler and skill recommender.
///
/// Skillscout inspects a project's filesystem and package manifest to build
/// a technology profile, then recommends matching skills from the registry.
#[derive(Parser)]
#[command(name = "skillscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect a project's frameworks, languages, tools, and testing stack
    #[command(visible_alias = "scan")]
    Detect(DetectArgs),
    /// Detect the stack and recommend skills from the registry
    Recommend(RecommendArgs),
}

/// Arguments for the detect command.
#[derive(Parser)]
pub struct DetectArgs {
    /// Project root to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Also write the characteristics report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the recommend command.
#[derive(Parser)]
pub struct RecommendArgs {
    /// Project root to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Skip registry searches; keep curated recommendations only
    #[arg(long)]
    pub skip_search: bool,

    /// Registry CLI binary to invoke instead of `npx skills`
    #[arg(long)]
    pub search_bin: Option<String>,

    /// Do not write recommended-skills.json into the project root
    #[arg(long)]
    pub no_write: bool,
}

fn validate_format(format: &str) -> bool {
    format == "pretty" || format == "json"
}

fn resolve_root(path: &Path) -> Option<PathBuf> {
    match path.canonicalize() {
        Ok(p) if p.is_dir() => Some(p),
        Ok(p) => {
            eprintln!("Error: {:?} is not a directory", p);
            None
        }
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", path, e);
            None
        }
    }
}

/// Run the detect command.
pub fn run_detect(args: &DetectArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let root = match resolve_root(&args.path) {
        Some(p) => p,
        None => return Ok(EXIT_ERROR),
    };

    let ctx = SignalContext::load(&root);
    let characteristics = detect::detect(&ctx);

    // A failed write is fatal, unlike everything else in a detection run.
    if let Some(output) = &args.output {
        report::write_characteristics(output, &characteristics)?;
    }

    match args.format.as_str() {
        "json" => println!("{}", report::characteristics_json(&characteristics)?),
        _ => report::print_characteristics(&args.path.to_string_lossy(), &characteristics),
    }

    Ok(EXIT_SUCCESS)
}

/// Run the recommend command.
pub fn run_recommend(args: &RecommendArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let root = match resolve_root(&args.path) {
        Some(p) => p,
        None => return Ok(EXIT_ERROR),
    };

    let ctx = SignalContext::load(&root);
    let characteristics = detect::detect(&ctx);

    let searcher = if args.skip_search {
        None
    } else {
        let search = match &args.search_bin {
            Some(bin) => CliSearch::with_command(bin, &["find"])?,
            None => CliSearch::new()?,
        };
        Some(search)
    };

    let entries = skills::recommend(
        &characteristics,
        searcher.as_ref().map(|s| s as &dyn SkillSearch),
    );

    if !args.no_write {
        report::write_skills_report(&root, &characteristics, &entries)?;
    }

    match args.format.as_str() {
        "json" => println!("{}", report::skills_report_json(&characteristics, &entries)?),
        _ => {
            report::print_characteristics(&args.path.to_string_lossy(), &characteristics);
            report::print_skills(&entries);
            if !args.no_write {
                println!(
                    "  Wrote {}",
                    root.join(report::SKILLS_REPORT_FILE).display()
                );
                println!();
            }
        }
    }

    Ok(EXIT_SUCCESS)
}
