use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use launch_dashboard::app::LaunchDashboardApp;
use launch_dashboard::config::Cli;
use launch_dashboard::data::loader;
use launch_dashboard::state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let cwd = std::env::current_dir().context("reading working directory")?;
    let path = cli.resolve_data_path(&cwd, || {
        rfd::FileDialog::new()
            .set_title("Open launch records")
            .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .add_filter("Parquet", &["parquet", "pq"])
            .pick_file()
    })?;

    let dataset = match loader::load_file(&path, &cli.columns()) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            return Err(e);
        }
    };

    log::info!(
        "Loaded {} launches from {} across sites {:?}, payload bounds {:?}",
        dataset.len(),
        path.display(),
        dataset.sites(),
        dataset.payload_bounds()
    );

    let state = AppState::new(dataset, cli.slider_step);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
