use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::campaign::CampaignParameters;
use crate::domain::daily_volume::DailyVolume;
use crate::services::aggregation::{AggregatedVolume, TimeGrouping};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionReport {
    pub data_source: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_leads: u64,
    pub touches_per_lead: usize,
    pub total_emails: u64,
    pub daily_capacity: u64,
    pub working_days: usize,
    pub peak_daily_volume: u64,
    pub touch_totals: Vec<u64>,
}

impl ProjectionReport {
    pub fn from_projection(campaign: &CampaignParameters, records: &[DailyVolume]) -> Self {
        let touches_per_lead = campaign.touches_per_lead();
        let mut touch_totals = vec![0; touches_per_lead];
        for record in records {
            for (sum, count) in touch_totals.iter_mut().zip(&record.touches) {
                *sum += count;
            }
        }

        Self {
            data_source: String::new(),
            start_date: campaign.start_date,
            end_date: records.last().map(|record| record.date),
            total_leads: campaign.total_leads,
            touches_per_lead,
            total_emails: campaign.total_emails(),
            daily_capacity: campaign.daily_capacity,
            working_days: records.len(),
            peak_daily_volume: records.iter().map(|record| record.total).max().unwrap_or(0),
            touch_totals,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ProjectionOutput {
    pub report: ProjectionReport,
    pub grouping: TimeGrouping,
    pub volumes: Vec<AggregatedVolume>,
}
