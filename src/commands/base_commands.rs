use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::scenario::Scenario;
use crate::services::dashboard::DashboardTab;
use crate::services::projection_export::ExportFormat;
use crate::services::projection_plot::ChartKind;

#[derive(Parser)]
#[command(author, version, about = "24-month financial projection for a delivery-only kitchen")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the projection for a scenario and write it to a file
    Project {
        /// Demand scenario
        #[arg(short, long, value_enum, default_value_t = Scenario::Base)]
        scenario: Scenario,
        /// Output file
        #[arg(short, long)]
        output: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
    },
    /// Print one dashboard tab for a scenario
    Dashboard {
        /// Demand scenario (defaults to the config value)
        #[arg(short, long, value_enum)]
        scenario: Option<Scenario>,
        /// Dashboard tab (defaults to the config value)
        #[arg(short, long, value_enum)]
        tab: Option<DashboardTab>,
        /// Optional report config YAML
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Compare headline figures across all scenarios
    Compare,
    /// Plot projection charts into PNG files
    Plot {
        /// Demand scenario (defaults to the config value)
        #[arg(short, long, value_enum)]
        scenario: Option<Scenario>,
        /// Output path prefix; each chart is written to <prefix>.<chart>.png
        #[arg(short, long)]
        output: String,
        /// Render only this chart
        #[arg(short = 'k', long, value_enum)]
        chart: Option<ChartKind>,
        /// Optional report config YAML
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
