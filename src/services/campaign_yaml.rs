use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::campaign::{CampaignParameters, DEFAULT_TOUCH_OFFSETS};

#[derive(Error, Debug)]
pub enum CampaignYamlError {
    #[error("failed to read campaign yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse campaign yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CampaignRecord {
    start_date: String,
    total_leads: u64,
    daily_capacity: u64,
    touch_offsets: Option<Vec<u32>>,
    max_days: Option<usize>,
}

/// Loads campaign parameters from a YAML file.
///
/// `touch_offsets` defaults to the reference sequence when omitted. The
/// parameters are not validated here; the projection engine does that.
///
/// # Errors
/// - Returns an error on I/O or parse failures.
/// - Returns an error when `start_date` is not `YYYY-MM-DD`.
pub fn load_campaign_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<CampaignParameters, CampaignYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CampaignYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_campaign_from_yaml_str(&contents, path)
}

pub fn deserialize_campaign_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<CampaignParameters, CampaignYamlError> {
    let record: CampaignRecord =
        serde_yaml::from_str(input).map_err(|source| CampaignYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let start_date = NaiveDate::parse_from_str(&record.start_date, "%Y-%m-%d").map_err(|_| {
        CampaignYamlError::InvalidDate {
            path: origin_path.to_path_buf(),
            value: record.start_date.clone(),
        }
    })?;

    Ok(CampaignParameters {
        start_date,
        total_leads: record.total_leads,
        daily_capacity: record.daily_capacity,
        touch_offsets: record
            .touch_offsets
            .unwrap_or_else(|| DEFAULT_TOUCH_OFFSETS.to_vec()),
        max_days: record.max_days,
    })
}
