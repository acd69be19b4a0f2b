pub mod base_commands;
pub mod campaign_input;
pub mod completions_cmd;
pub mod plot_cmd;
pub mod project_cmd;
pub mod report_format;
