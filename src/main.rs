//! CLI entry point for theme-loader.

mod cli;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use theme_loader::config::{default_preferences_path, load_config_with_source, Config};
use theme_loader::error::{ConfigError, LoaderError};
use theme_loader::preference::{FileStore, PreferenceGate};
use theme_loader::startup::{run_startup, StartupContext, StartupReport};
use theme_loader::theme::{catalog_from_config, HeadFragment, ThemeCards, ThemeDiscovery};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing(args.log_directive());

    let overrides = args.config_overrides();
    if !overrides.is_empty() {
        tracing::debug!(?overrides, "applying command-line overrides");
    }
    let loaded = match load_config_with_source(args.config.as_deref(), &overrides) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(
        source = ?loaded.source,
        catalog = ?loaded.config.catalog.kind,
        url = %loaded.config.catalog.url,
        "loaded config"
    );

    if let Err(e) = run(&args, &loaded.config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: &cli::Args, config: &Config) -> Result<(), LoaderError> {
    let mut store = FileStore::new(preference_store_path(config)?);
    let gate = PreferenceGate::from_config(config);
    let mut discovery =
        ThemeDiscovery::new(catalog_from_config(config)).with_dedupe(config.discovery.dedupe);

    let mut applied: Option<String> = None;
    let mut apply = |theme: &str| {
        tracing::info!(theme, "applying theme");
        applied = Some(theme.to_string());
    };
    let mut head = HeadFragment::new();
    let mut cards = ThemeCards::new();

    let report = run_startup(
        &gate,
        &mut discovery,
        StartupContext {
            store: &mut store,
            applier: &mut apply,
            document: &mut head,
            registrar: &mut cards,
        },
    )
    .await?;

    if let Some(theme) = &applied {
        tracing::debug!(theme = %theme, "default theme applied this run");
    }
    for line in summary_lines(&report, &cards) {
        eprintln!("{line}");
    }

    let rendered = match &args.page {
        Some(page) => {
            let html = std::fs::read_to_string(page).map_err(LoaderError::Output)?;
            head.splice_into(&html)
        }
        None => head.render(),
    };
    match &args.output {
        Some(path) => std::fs::write(path, rendered).map_err(LoaderError::Output)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Configured store path, falling back to the per-user default.
fn preference_store_path(config: &Config) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &config.storage.path {
        return Ok(path.clone());
    }
    default_preferences_path().ok_or_else(|| {
        ConfigError::Invalid(
            "unable to resolve default preference store path; set storage.path".to_string(),
        )
    })
}

/// Human-readable startup summary with the active theme marked.
fn summary_lines(report: &StartupReport, cards: &ThemeCards) -> Vec<String> {
    let active = report.preference.theme();
    let mut lines = vec![format!("• themes ({} registered)", cards.names().len())];
    lines.extend(cards.picker_lines(active).into_iter().map(|l| format!("  {l}")));
    if !report.discovery.duplicates.is_empty() {
        lines.push(format!(
            "  skipped already-loaded: {}",
            report.discovery.duplicates.join(", ")
        ));
    }
    if !cards.contains(active) {
        lines.push(format!(
            "warning: preferred theme `{active}` was not found among discovered themes"
        ));
    }
    lines
}
