use crate::commands::base_commands::Commands;
use crate::commands::CommandError;
use crate::services::projection::generate_projection;
use crate::services::projection_plot::{chart_path, write_chart_png, ChartKind};
use crate::services::report_config::ReportConfig;

pub fn plot_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Plot {
        scenario,
        output,
        chart,
        config,
    } = cmd
    {
        let config = ReportConfig::load(config.as_deref())?;
        let scenario = scenario.unwrap_or(config.scenario);
        let size = (config.chart_width, config.chart_height);
        let records = generate_projection(scenario);

        let charts = match chart {
            Some(kind) => vec![kind],
            None => ChartKind::ALL.to_vec(),
        };
        for kind in charts {
            let path = chart_path(&output, kind);
            write_chart_png(&path, kind, &records, size)?;
            println!("Chart written to {path}");
        }
    }
    Ok(())
}
