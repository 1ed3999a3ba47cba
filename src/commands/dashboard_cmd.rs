use tracing::debug;

use crate::commands::base_commands::Commands;
use crate::commands::CommandError;
use crate::services::dashboard::{render_dashboard, DashboardState};
use crate::services::report_config::ReportConfig;

pub fn dashboard_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Dashboard {
        scenario,
        tab,
        config,
    } = cmd
    {
        let config = ReportConfig::load(config.as_deref())?;
        let state = DashboardState::new(
            scenario.unwrap_or(config.scenario),
            tab.unwrap_or(config.tab),
        );
        debug!(scenario = %state.scenario, tab = state.tab.label(), "rendering dashboard");

        println!("{}", render_dashboard(&state));
    }
    Ok(())
}
