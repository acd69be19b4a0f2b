use std::io::Write;

use clap::ValueEnum;
use thiserror::Error;

use crate::services::projection_types::ProjectionOutput;

#[derive(Error, Debug)]
pub enum ProjectionYamlError {
    #[error("failed to serialize projection to yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize projection to json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write projection: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

pub fn serialize_projection<W: Write>(
    writer: &mut W,
    output: &ProjectionOutput,
    format: OutputFormat,
) -> Result<(), ProjectionYamlError> {
    let contents = match format {
        OutputFormat::Yaml => serde_yaml::to_string(output)?,
        OutputFormat::Json => serde_json::to_string_pretty(output)?,
    };
    writer.write_all(contents.as_bytes())?;
    Ok(())
}
