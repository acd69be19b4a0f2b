use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::campaign_input::build_projection;
use crate::services::projection_plot::write_projection_png;

pub fn plot_command(cmd: Commands) -> ExitCode {
    if let Commands::Plot {
        campaign,
        view,
        cumulative,
        output,
    } = cmd
    {
        let projection = match build_projection(&campaign, &view) {
            Ok(projection) => projection,
            Err(e) => {
                eprintln!("Failed to project send volume: {e}");
                return ExitCode::FAILURE;
            }
        };

        match write_projection_png(&output, &projection.volumes, cumulative) {
            Ok(()) => println!("Projection chart written to {output}"),
            Err(e) => {
                eprintln!("Failed to plot projection: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
