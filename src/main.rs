use std::process::ExitCode;

use clap::Parser;
use send_projection::commands::base_commands::{CliArgs, Commands};
use send_projection::commands::completions_cmd::completions_command;
use send_projection::commands::plot_cmd::plot_command;
use send_projection::commands::project_cmd::project_command;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        cmd @ Commands::Completions { .. } => {
            completions_command(cmd);
            ExitCode::SUCCESS
        }
    }
}
