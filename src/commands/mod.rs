use thiserror::Error;

use crate::services::projection_export::ProjectionExportError;
use crate::services::projection_plot::ProjectionPlotError;
use crate::services::report_config::ReportConfigError;

pub mod base_commands;
pub mod compare_cmd;
pub mod completions_cmd;
pub mod dashboard_cmd;
pub mod plot_cmd;
pub mod project_cmd;
pub mod report_format;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Export(#[from] ProjectionExportError),
    #[error(transparent)]
    Plot(#[from] ProjectionPlotError),
    #[error(transparent)]
    Config(#[from] ReportConfigError),
    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}
