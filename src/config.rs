//! Command-line configuration using clap

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

use crate::data::loader::ColumnNames;

/// File the dashboard looks for in the working directory when `--data` is
/// not given.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Launch Dashboard - explore launch outcomes by site and payload mass
#[derive(Parser, Debug, Clone)]
#[command(name = "launch-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (CSV, JSON or Parquet).
    /// Defaults to ./spacex_launch_dash.csv, or a file dialog if that is missing.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Column holding the launch site
    #[arg(long, default_value = "Launch Site")]
    pub site_column: String,

    /// Column holding the payload mass in kilograms
    #[arg(long, default_value = "Payload Mass (kg)")]
    pub payload_column: String,

    /// Column holding the outcome class (1 = success, 0 = failure)
    #[arg(long, default_value = "class")]
    pub outcome_column: String,

    /// Column holding the booster version
    #[arg(long, default_value = "Booster Version")]
    pub booster_column: String,

    /// Payload slider step in kilograms
    #[arg(long, default_value = "1000", value_parser = parse_step)]
    pub slider_step: f64,

    /// Default log filter when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_step(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("slider step must be positive, got {v}"))
    }
}

impl Cli {
    pub fn columns(&self) -> ColumnNames {
        ColumnNames {
            site: self.site_column.clone(),
            payload: self.payload_column.clone(),
            outcome: self.outcome_column.clone(),
            booster: self.booster_column.clone(),
        }
    }

    /// Decide which file to load: explicit `--data`, then the default file in
    /// `cwd`, then whatever `pick` returns (the native file dialog in `main`).
    pub fn resolve_data_path<F>(&self, cwd: &Path, pick: F) -> Result<PathBuf>
    where
        F: FnOnce() -> Option<PathBuf>,
    {
        if let Some(path) = &self.data {
            return Ok(path.clone());
        }
        let default = cwd.join(DEFAULT_DATA_FILE);
        if default.is_file() {
            return Ok(default);
        }
        match pick() {
            Some(path) => Ok(path),
            None => bail!(
                "No dataset selected (pass --data <PATH> or place {DEFAULT_DATA_FILE} \
                 in the working directory)"
            ),
        }
    }
}

/// Slider domain: `0` up to the largest payload rounded up to a whole step.
pub fn slider_max(max_payload: f64, step: f64) -> f64 {
    if max_payload <= 0.0 {
        return step;
    }
    (max_payload / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dataset_export() {
        let cli = Cli::parse_from(["launch-dashboard"]);
        assert_eq!(cli.columns(), ColumnNames::default());
        assert_eq!(cli.slider_step, 1000.0);
        assert_eq!(cli.log_level, "info");
        assert!(cli.data.is_none());
    }

    #[test]
    fn test_rejects_non_positive_step() {
        assert!(Cli::try_parse_from(["launch-dashboard", "--slider-step", "0"]).is_err());
        assert!(Cli::try_parse_from(["launch-dashboard", "--slider-step", "-5"]).is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let cli = Cli::parse_from(["launch-dashboard", "--data", "launches.parquet"]);
        let path = cli
            .resolve_data_path(Path::new("/nonexistent"), || panic!("dialog opened"))
            .unwrap();
        assert_eq!(path, PathBuf::from("launches.parquet"));
    }

    #[test]
    fn test_cancelled_dialog_is_an_error() {
        let cli = Cli::parse_from(["launch-dashboard"]);
        assert!(cli.resolve_data_path(Path::new("/nonexistent"), || None).is_err());
    }

    #[test]
    fn test_slider_max_rounds_up() {
        assert_eq!(slider_max(9600.0, 1000.0), 10_000.0);
        assert_eq!(slider_max(10_000.0, 1000.0), 10_000.0);
        assert_eq!(slider_max(0.0, 1000.0), 1000.0);
    }
}
