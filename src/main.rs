use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use projections::commands::base_commands::{CliArgs, Commands};
use projections::commands::compare_cmd::compare_command;
use projections::commands::completions_cmd::completions_command;
use projections::commands::dashboard_cmd::dashboard_command;
use projections::commands::plot_cmd::plot_command;
use projections::commands::project_cmd::project_command;
use projections::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    let result = match args.command {
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::Dashboard { .. } => dashboard_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Compare => {
            compare_command();
            Ok(())
        }
        Commands::Completions { shell } => {
            completions_command(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
