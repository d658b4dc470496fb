#![allow(non_snake_case)]

mod app;
mod bridge;
mod content;
pub mod context;
mod sections;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::banner::log_banner;
use portfolio_core::logging::init_logging;
use portfolio_core::PageConfig;

/// Global page configuration, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (set from command line or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - personal portfolio page
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page with smooth navigation and a contact form")]
struct Args {
    /// JSON page configuration (unset fields keep their defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Type the hero subtitle out character by character
    #[arg(long)]
    typing_effect: bool,

    /// Register this script as an offline-caching service worker
    #[arg(long, value_name = "PATH")]
    offline_worker: Option<String>,

    /// Make the résumé button open this file
    #[arg(long, value_name = "PATH")]
    resume: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Load the configuration file, then apply command line overrides.
    fn page_config(&self) -> anyhow::Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => PageConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => PageConfig::default(),
        };

        if self.typing_effect {
            config.features.typing_effect = true;
        }
        if let Some(script) = &self.offline_worker {
            config.features.offline_worker = true;
            config.features.worker_script = script.clone();
        }
        if let Some(resume) = &self.resume {
            config.features.resume_download = true;
            config.features.resume_path = Some(resume.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match args.page_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    log_banner(&config.profile);
    tracing::info!(features = ?config.features, "Starting portfolio");

    let title = format!("{} - Portfolio", config.profile.owner);
    let _ = PAGE_CONFIG.set(config);

    // Configure desktop window
    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
