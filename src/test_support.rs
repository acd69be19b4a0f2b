use chrono::NaiveDate;

use crate::domain::campaign::CampaignParameters;
use crate::domain::daily_volume::DailyVolume;

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn campaign(start: NaiveDate, total_leads: u64, daily_capacity: u64) -> CampaignParameters {
    CampaignParameters::new(start, total_leads, daily_capacity)
}

pub fn volume(date: NaiveDate, touches: &[u64], cumulative: u64) -> DailyVolume {
    DailyVolume {
        date,
        touches: touches.to_vec(),
        total: touches.iter().sum(),
        cumulative,
    }
}
