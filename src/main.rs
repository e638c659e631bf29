use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use nn_playground::app::PlaygroundApp;
use nn_playground::config::{AppConfig, load_config};

#[derive(Parser)]
#[command(name = "nn-playground")]
#[command(about = "Build a feed-forward network and watch a schematic forward/backward pass")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the placeholder values
    #[arg(long)]
    seed: Option<u64>,

    /// Training service URL
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    log::info!("training endpoint: {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    eframe::run_native(
        "NN Playground",
        options,
        Box::new(move |_cc| Ok(Box::new(PlaygroundApp::new(&config)))),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}
