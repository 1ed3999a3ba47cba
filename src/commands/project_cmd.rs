use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_projection_report;
use crate::commands::CommandError;
use crate::services::projection_export::serialize_projection;
use crate::services::projection_types::ProjectionOutput;

pub fn project_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Project {
        scenario,
        output,
        format,
    } = cmd
    {
        let projection = ProjectionOutput::for_scenario(scenario);

        let mut buffer = Vec::new();
        serialize_projection(&mut buffer, &projection, format)?;
        std::fs::write(&output, buffer).map_err(|source| CommandError::WriteOutput {
            path: output.clone(),
            source,
        })?;
        info!(scenario = %scenario, path = %output, "wrote projection");

        println!("{}", format_projection_report(&projection.summary));
        println!(
            "Projection for {} scenario written to {output}",
            scenario.display_name()
        );
    }
    Ok(())
}
