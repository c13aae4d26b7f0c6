//! Implementation of the `lingo eval` command.

use std::collections::HashMap;
use std::path::PathBuf;

use lingo::{FileCatalog, MessageSource, Params, Translate, Value};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Target language code (e.g., en, de, ru)
    #[arg(long, required = true)]
    pub lang: String,

    /// Language the message is written in
    #[arg(long, default_value = "en_us")]
    pub source_lang: String,

    /// Message category
    #[arg(long, default_value = "app")]
    pub category: String,

    /// Directory with message catalogs (<dir>/<lang>/<category>.json)
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Plural quantity driving variant selection
    #[arg(long)]
    pub count: Option<f64>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Parameters as a JSON value (scalar, array, or object)
    #[arg(long, conflicts_with_all = ["count", "params"])]
    pub params_json: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// The message (or plural variants) to translate
    pub message: String,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Build translation params from the CLI flags.
fn build_params(args: &EvalArgs) -> miette::Result<Params> {
    if let Some(raw) = &args.params_json {
        let json: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| miette::miette!("invalid --params-json: {}", e))?;
        return Params::try_from(json).map_err(|e| miette::miette!("{}", e));
    }

    let named: HashMap<String, Value> = args
        .params
        .iter()
        .map(|(k, v)| {
            // Try parsing as i64 first, fall back to String
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else {
                Value::from(v.clone())
            };
            (k.clone(), value)
        })
        .collect();

    Ok(match (args.count, named.is_empty()) {
        (Some(count), _) => Params::Counted(Value::Float(count), named),
        (None, false) => Params::Named(named),
        (None, true) => Params::None,
    })
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut translate = Translate::builder()
        .source_language(args.source_lang.clone())
        .language(args.lang.clone())
        .build();

    if let Some(dir) = &args.messages {
        translate.add_source(
            "messages",
            MessageSource::new(FileCatalog::new(dir), &args.source_lang),
        );
    }

    let params = build_params(&args)?;
    let result = translate.t(&args.category, &args.message, params);

    if args.json {
        let output = EvalResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
