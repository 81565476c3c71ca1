//! Lumo Admin - Agency Site Console
//!
//! CLI for operating the Lumora agency site: capturing leads, editing blog
//! posts and services, and updating site settings. State lives in a single
//! local JSON document; every mutation flows through the application store.

mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lumora_domain::cms::{AppStore, Theme};
use lumora_domain::ports::ThemeSink;
use lumora_localstore::{default_state_path, FileStateStore};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Logs the projected theme variables whenever they change.
struct LogThemeSink;

impl ThemeSink for LogThemeSink {
    fn apply(&mut self, theme: &Theme) {
        for (var, value) in theme.css_variables() {
            debug!(var = var, value = value, "theme variable");
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing; quiet by default, RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = cli::Cli::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Get the state document path from the environment
    let path = std::env::var("LUMORA_STATE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let path = default_state_path();
            info!(path = %path.display(), "LUMORA_STATE_PATH not set, using default");
            path
        });

    // Create the file store and open the application store on top of it
    let store = FileStateStore::new(path);
    let mut app = AppStore::open(store).with_theme_sink(LogThemeSink);

    commands::run(&mut app, cli.command)
}
