//! List the translation language catalog.
//!
//! Usage:
//!   cargo run --bin languages                  # Every language
//!   cargo run --bin languages -- chinese       # Case-insensitive name search
//!   cargo run --bin languages -- --key zh_tw   # Exact api key lookup
//!   cargo run --bin languages -- --json        # Machine-readable output

use anyhow::{Context, Result};
use polyglot_i18n::i18n::{LanguageDescriptor, LanguageRegistry};
use serde_json::json;
use tracing::info;

fn to_json(language: &LanguageDescriptor) -> serde_json::Value {
    json!({
        "api_key": language.api_key,
        "name": language.display_name,
        "iso_code": language.iso_code,
        "needs_romanization": language.needs_romanization(),
    })
}

fn print_table(languages: &[&LanguageDescriptor]) {
    for language in languages {
        println!(
            "{:<10} {:<28} {:<6} {}",
            language.api_key,
            language.display_name,
            language.iso_code.unwrap_or("-"),
            if language.needs_romanization() { "romanized" } else { "" }
        );
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("languages=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let registry = LanguageRegistry::get();

    let languages: Vec<&LanguageDescriptor> =
        if let Some(position) = args.iter().position(|arg| arg == "--key") {
            let api_key = args.get(position + 1).context("--key needs an api key")?;
            vec![registry.find_by_api_key(api_key)?]
        } else {
            let query = args
                .iter()
                .filter(|arg| !arg.starts_with("--"))
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            registry.search(&query)
        };

    info!("{} of {} languages match", languages.len(), registry.len());

    if as_json {
        let rows: Vec<_> = languages.iter().map(|language| to_json(language)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_table(&languages);
    }

    Ok(())
}
