//! Implementation of the `lingo plurals` command.

use comfy_table::{presets, ContentArrangement, Table};
use lingo::{matching_rule, plural_rules};
use serde::Serialize;

/// Arguments for the plurals command.
#[derive(Debug, clap::Args)]
pub struct PluralsArgs {
    /// Language code (e.g., en, ru, ar)
    #[arg(long, required = true)]
    pub lang: String,

    /// Also print the locale's full ordered rule list
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Quantities to categorize
    #[arg(required = true)]
    pub quantities: Vec<f64>,
}

/// JSON output for one quantity.
#[derive(Serialize)]
struct PluralsJson {
    quantity: f64,
    rule_index: usize,
    category: String,
    rule: String,
}

/// Run the plurals command.
pub fn run_plurals(args: PluralsArgs) -> miette::Result<i32> {
    let rules = plural_rules(&args.lang);

    if args.json {
        let rows: Vec<PluralsJson> = args
            .quantities
            .iter()
            .map(|&n| {
                let index = matching_rule(&rules, n);
                PluralsJson {
                    quantity: n,
                    rule_index: index,
                    category: rules[index].category().to_string(),
                    rule: rules[index].source().to_string(),
                }
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    if args.explain {
        println!("Plural rules for '{}':", args.lang);
        for (index, rule) in rules.iter().enumerate() {
            println!("  {}. {} = {}", index, rule.category(), rule.source());
        }
        println!();
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["n", "Rule", "Category"]);
    for &n in &args.quantities {
        let index = matching_rule(&rules, n);
        table.add_row(vec![
            n.to_string(),
            index.to_string(),
            rules[index].category().to_string(),
        ]);
    }
    println!("{table}");

    Ok(exitcode::OK)
}
