//! pagekeys - Main Entry Point
//!
//! Loads a saved HTML page, presses keys on it and prints where each key
//! would have taken the browser.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use pagekeys::{Profile, ShortcutConfig, ShortcutDispatcher, Tab};
use tracing_subscriber::EnvFilter;

/// Replay keyboard shortcuts against an HTML page
#[derive(Debug, Parser)]
#[command(name = "pagekeys", version)]
struct Args {
    /// HTML file to load
    page: PathBuf,

    /// Keys to press, in order
    keys: String,

    /// URL the page is served from
    #[arg(long, default_value = "http://localhost/")]
    url: String,

    /// Handler profile: keydown or keyup (overrides the config file)
    #[arg(long)]
    profile: Option<Profile>,

    /// JSON shortcut config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Id of an element to focus before pressing keys
    #[arg(long, conflicts_with = "blur")]
    focus: Option<String>,

    /// Drop the load-time focus before pressing keys
    #[arg(long)]
    blur: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ShortcutConfig::from_path(path)?,
        None => ShortcutConfig::default(),
    };
    if let Some(profile) = args.profile {
        config.profile = profile;
    }

    let html = std::fs::read_to_string(&args.page)
        .with_context(|| format!("failed to read {}", args.page.display()))?;
    let mut tab = Tab::open(&html, &args.url, ShortcutDispatcher::from_config(config))?;
    tracing::info!(
        url = %tab.location().href(),
        profile = %tab.dispatcher().profile(),
        "Page loaded"
    );

    if args.blur {
        tab.blur();
    }
    if let Some(id) = &args.focus {
        if !tab.focus_id(id) {
            bail!("no element with id `{id}` to focus");
        }
    }

    let mut out = std::io::stdout().lock();
    for key in args.keys.chars() {
        match tab.press(key)? {
            Some(_) => {
                writeln!(out, "{key} -> {}", tab.location().href())?;
                // The page is gone after a full load
                break;
            }
            None => writeln!(out, "{key} -> (ignored)")?,
        }
    }

    Ok(())
}
