//! Resolve UI strings from the configured bundle source.
//!
//! Usage:
//!   cargo run -- common.translate common.copy
//!   cargo run -- --locale de --param count=12 common.chars
//!
//! Bundles are read from I18N_BUNDLE_DIR, or fetched from I18N_BUNDLE_URL
//! when it is set. See `config.rs` for the other variables.

use anyhow::{bail, Context, Result};
use polyglot_i18n::config::Config;
use polyglot_i18n::locale::{
    BundleSource, BundleState, FileBundleSource, HttpBundleSource, LocaleLoader,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

struct Args {
    locale: Option<String>,
    params: Vec<(String, String)>,
    keys: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        locale: None,
        params: Vec::new(),
        keys: Vec::new(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => {
                args.locale = Some(iter.next().context("--locale needs a value")?);
            }
            "--param" => {
                let pair = iter.next().context("--param needs name=value")?;
                let (name, value) = pair
                    .split_once('=')
                    .with_context(|| format!("Invalid --param '{}', expected name=value", pair))?;
                args.params.push((name.to_string(), value.to_string()));
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => args.keys.push(arg),
        }
    }

    Ok(args)
}

fn bundle_source(config: &Config) -> Result<Arc<dyn BundleSource>> {
    match &config.bundle_url {
        Some(url) => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .context("Failed to build HTTP client")?;
            info!("Fetching bundles from {}", url);
            Ok(Arc::new(HttpBundleSource::new(
                client,
                url.clone(),
                config.namespace.clone(),
            )))
        }
        None => {
            info!("Reading bundles from {}", config.bundle_dir);
            Ok(Arc::new(FileBundleSource::new(
                config.bundle_dir.clone(),
                config.namespace.clone(),
            )))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_i18n=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;

    let loader = LocaleLoader::with_shared_source(config.loader_config(), bundle_source(&config)?);

    let locale = args.locale.as_deref().unwrap_or(config.default_locale.as_str());
    if loader.set_active_locale(locale).await == BundleState::Failed {
        if let Some(error) = loader.last_error(locale) {
            warn!("Using fallback '{}': {}", loader.fallback_locale(), error);
        }
    }
    loader.ready().await;

    let params: Vec<(&str, &str)> = args
        .params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    for key in &args.keys {
        println!("{} = {}", key, loader.translate_with(key, &params));
    }

    let report = loader.metrics().report();
    info!(
        "Resolved {} keys ({} from fallback, {} missing)",
        args.keys.len(),
        report.fallback_hits,
        report.missing_keys
    );

    Ok(())
}
