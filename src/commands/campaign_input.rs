use chrono::NaiveDate;
use thiserror::Error;

use crate::commands::base_commands::{CampaignArgs, ViewArgs};
use crate::domain::campaign::CampaignParameters;
use crate::services::aggregation::aggregate;
use crate::services::campaign_yaml::{load_campaign_from_yaml_file, CampaignYamlError};
use crate::services::projection::{project_send_volume, ProjectionError};
use crate::services::projection_types::{ProjectionOutput, ProjectionReport};
use crate::services::range_filter::{filter_by_percent, DateRange, RangeFilterError};

#[derive(Error, Debug)]
pub enum CampaignInputError {
    #[error("failed to load campaign config: {0}")]
    Config(#[from] CampaignYamlError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("invalid campaign: {0}")]
    Projection(#[from] ProjectionError),
    #[error("invalid display range: {0}")]
    Range(#[from] RangeFilterError),
}

/// Builds campaign parameters from the config file (or the reference
/// campaign) with command-line overrides applied on top.
pub fn resolve_campaign(args: &CampaignArgs) -> Result<CampaignParameters, CampaignInputError> {
    let mut campaign = match &args.config {
        Some(path) => load_campaign_from_yaml_file(path)?,
        None => CampaignParameters::reference(),
    };

    if let Some(start_date) = &args.start_date {
        campaign.start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| CampaignInputError::InvalidStartDate(start_date.clone()))?;
    }
    if let Some(total_leads) = args.total_leads {
        campaign.total_leads = total_leads;
    }
    if let Some(daily_capacity) = args.daily_capacity {
        campaign.daily_capacity = daily_capacity;
    }
    if let Some(offsets) = &args.offsets {
        campaign.touch_offsets = offsets.clone();
    }
    if args.max_days.is_some() {
        campaign.max_days = args.max_days;
    }
    Ok(campaign)
}

/// Runs the projection and shapes it for output: grouped by period and cut
/// to the requested window. The report always covers the whole run.
pub fn build_projection(
    campaign_args: &CampaignArgs,
    view: &ViewArgs,
) -> Result<ProjectionOutput, CampaignInputError> {
    let range = DateRange::new(view.from, view.to)?;
    let campaign = resolve_campaign(campaign_args)?;
    log::info!(
        "projecting {} leads from {} at {} emails/day with offsets {:?}",
        campaign.total_leads,
        campaign.start_date,
        campaign.daily_capacity,
        campaign.touch_offsets
    );

    let records = project_send_volume(&campaign)?;
    let mut report = ProjectionReport::from_projection(&campaign, &records);
    report.data_source = data_source_name(campaign_args.config.as_deref());

    let grouped = aggregate(&records, view.grouping);
    let volumes = filter_by_percent(&grouped, range).to_vec();
    log::info!(
        "{} send days grouped into {} {:?} entries, {} shown",
        records.len(),
        grouped.len(),
        view.grouping,
        volumes.len()
    );

    Ok(ProjectionOutput {
        report,
        grouping: view.grouping,
        volumes,
    })
}

fn data_source_name(config_path: Option<&str>) -> String {
    match config_path {
        Some(path) => std::path::Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
            .to_string(),
        None => "reference campaign".to_string(),
    }
}
