use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::scenario::Scenario;
use crate::services::dashboard::DashboardTab;

#[derive(Error, Debug)]
pub enum ReportConfigError {
    #[error("failed to read report config {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse report config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid chart size in {path}: {width}x{height} (both must be at least {min})")]
    InvalidChartSize {
        path: PathBuf,
        width: u32,
        height: u32,
        min: u32,
    },
}

pub const MIN_CHART_DIMENSION: u32 = 200;

/// Presentation defaults for the dashboard and chart commands.
///
/// Every field is optional in the YAML file; command-line flags take
/// precedence over values read here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub scenario: Scenario,
    pub tab: DashboardTab,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Base,
            tab: DashboardTab::Overview,
            chart_width: 900,
            chart_height: 600,
        }
    }
}

impl ReportConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            ReportConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config: ReportConfig =
            serde_yaml::from_str(&contents).map_err(|source| ReportConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.chart_width < MIN_CHART_DIMENSION || config.chart_height < MIN_CHART_DIMENSION {
            return Err(ReportConfigError::InvalidChartSize {
                path: path.to_path_buf(),
                width: config.chart_width,
                height: config.chart_height,
                min: MIN_CHART_DIMENSION,
            });
        }
        Ok(config)
    }

    /// Reads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ReportConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}
