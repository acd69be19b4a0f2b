use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::campaign_input::build_projection;
use crate::commands::report_format::{format_projection_report, format_volume_table};
use crate::services::projection_yaml::serialize_projection;

pub fn project_command(cmd: Commands) -> ExitCode {
    if let Commands::Project {
        campaign,
        view,
        format,
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

        let mut buffer = Vec::new();
        if let Err(e) = serialize_projection(&mut buffer, &projection, format) {
            eprintln!("Failed to serialize projection: {e}");
            return ExitCode::FAILURE;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write projection output: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_projection_report(&projection.report));
        println!();
        println!("{}", format_volume_table(&projection.volumes));
        println!("Projection written to {output}");
    }
    ExitCode::SUCCESS
}
