//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, Result};
use serde::Serialize;

use lingo::{Catalog, FileCatalog};

use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory with message catalogs (<dir>/<lang>/<category>.json)
    #[arg(long)]
    pub messages: PathBuf,

    /// Language the source messages are written in
    #[arg(long, default_value = "en_us")]
    pub source_lang: String,

    /// Message category to inspect
    #[arg(long, default_value = "app")]
    pub category: String,

    /// Languages to check coverage for (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
///
/// The source catalog's keys are the full message set; a target language
/// covers a message when its catalog has a non-empty entry for it. The
/// source catalog may be absent - then the union of all target catalogs'
/// keys serves as the message set.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let catalog = FileCatalog::new(&args.messages);

    let source_table = catalog
        .load(&args.category, &args.source_lang)
        .map_err(|e| miette!("failed to load source catalog: {}", e))?;

    let mut source_keys: Vec<String> = source_table.keys().cloned().collect();
    if source_keys.is_empty() {
        // No source catalog: take the union of the target catalogs' keys.
        for lang in &args.lang {
            let table = catalog
                .load(&args.category, lang)
                .map_err(|e| miette!("failed to load catalog for '{}': {}", lang, e))?;
            let mut keys: Vec<String> = table.keys().cloned().collect();
            keys.sort();
            for key in keys {
                if !source_keys.contains(&key) {
                    source_keys.push(key);
                }
            }
        }
    }
    source_keys.sort();
    let total = source_keys.len();

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for lang in &args.lang {
        let table = catalog
            .load(&args.category, lang)
            .map_err(|e| miette!("failed to load catalog for '{}': {}", lang, e))?;

        let missing: Vec<String> = source_keys
            .iter()
            .filter(|key| !table.get(*key).is_some_and(|value| !value.is_empty()))
            .cloned()
            .collect();

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: total - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json_data)
                .expect("JSON serialization should not fail")
        );
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
