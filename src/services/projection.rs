use std::collections::VecDeque;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::calendar::{is_business_day, BusinessDays};
use crate::domain::campaign::CampaignParameters;
use crate::domain::daily_volume::DailyVolume;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("daily capacity must be greater than zero")]
    InvalidCapacity,
    #[error("offset for touch {touch} must be greater than zero")]
    InvalidOffset { touch: usize },
    #[error(
        "offset for touch {touch} ({offset}) must be greater than the offset of the previous touch ({previous})"
    )]
    UnorderedOffsets {
        touch: usize,
        offset: u32,
        previous: u32,
    },
    #[error("start date {0} is not a business day")]
    StartNotBusinessDay(NaiveDate),
    #[error("max days must be greater than zero")]
    InvalidMaxDays,
    #[error("total email volume does not fit into 64 bits")]
    VolumeOverflow,
    #[error("simulation stopped after {days} days with {sent} of {target} emails sent")]
    CeilingExceeded { days: usize, sent: u64, target: u64 },
}

/// Projects the daily send volume of a campaign.
///
/// Returns one record per business day with a nonzero volume, in ascending
/// date order, until every lead has received every touch.
///
/// # Errors
/// - Returns a configuration error for invalid parameters before simulating.
/// - Returns [`ProjectionError::CeilingExceeded`] when the day ceiling is hit
///   before all emails were sent. No partial output is returned.
pub fn project_send_volume(
    campaign: &CampaignParameters,
) -> Result<Vec<DailyVolume>, ProjectionError> {
    validate_campaign(campaign)?;
    let target = campaign
        .total_leads
        .checked_mul(campaign.touches_per_lead() as u64)
        .ok_or(ProjectionError::VolumeOverflow)?;
    let max_days = campaign
        .max_days
        .unwrap_or_else(|| default_max_days(campaign, target));

    let mut state = ProjectionState::new(
        campaign.touch_offsets.len(),
        campaign.max_offset() as usize,
    );
    let mut records = Vec::new();
    let mut simulated_days = 0;

    for (day, date) in BusinessDays::starting_at(campaign.start_date)
        .take(max_days)
        .enumerate()
    {
        if state.cumulative_sent == target {
            break;
        }
        simulated_days = day + 1;

        let touches = state.simulate_day(campaign);
        let total: u64 = touches.iter().sum();
        if total > 0 {
            state.cumulative_sent += total;
            records.push(DailyVolume {
                date,
                touches,
                total,
                cumulative: state.cumulative_sent,
            });
        }
    }

    // The calendar itself can run out before the ceiling near NaiveDate::MAX.
    if state.cumulative_sent < target {
        log::warn!(
            "projection: stopped after {simulated_days} of at most {max_days} days with {} of {target} emails sent",
            state.cumulative_sent
        );
        return Err(ProjectionError::CeilingExceeded {
            days: simulated_days,
            sent: state.cumulative_sent,
            target,
        });
    }

    log::debug!(
        "projection: {target} emails over {} send days ({simulated_days} business days simulated)",
        records.len()
    );
    Ok(records)
}

/// Rejects parameter sets that would produce a wrong or endless simulation.
pub fn validate_campaign(campaign: &CampaignParameters) -> Result<(), ProjectionError> {
    if campaign.daily_capacity == 0 {
        return Err(ProjectionError::InvalidCapacity);
    }
    if campaign.max_days == Some(0) {
        return Err(ProjectionError::InvalidMaxDays);
    }
    if !is_business_day(campaign.start_date) {
        return Err(ProjectionError::StartNotBusinessDay(campaign.start_date));
    }

    let mut previous = 0;
    for (index, &offset) in campaign.touch_offsets.iter().enumerate() {
        let touch = index + 2;
        if offset == 0 {
            return Err(ProjectionError::InvalidOffset { touch });
        }
        if offset <= previous {
            return Err(ProjectionError::UnorderedOffsets {
                touch,
                offset,
                previous,
            });
        }
        previous = offset;
    }
    Ok(())
}

/// Twice the longest run valid parameters can take: enrollment fills every
/// day until the last lead starts, the last follow-up falls due at most
/// `max_offset` days later, and any remaining backlog drains at full capacity.
fn default_max_days(campaign: &CampaignParameters, target: u64) -> usize {
    let full_days = target.div_ceil(campaign.daily_capacity);
    let bound = full_days
        .saturating_mul(2)
        .saturating_add(u64::from(campaign.max_offset()))
        .saturating_add(1)
        .saturating_mul(2);
    usize::try_from(bound).unwrap_or(usize::MAX)
}

#[derive(Debug)]
struct ProjectionState {
    /// Leads started on each of the last `window` days, oldest first.
    recent_starts: VecDeque<u64>,
    window: usize,
    /// `backlog[i]` holds due but unsent emails of touch `i + 2`.
    backlog: Vec<u64>,
    total_leads_started: u64,
    cumulative_sent: u64,
}

impl ProjectionState {
    fn new(follow_up_count: usize, window: usize) -> Self {
        Self {
            recent_starts: VecDeque::with_capacity(window + 1),
            window,
            backlog: vec![0; follow_up_count],
            total_leads_started: 0,
            cumulative_sent: 0,
        }
    }

    /// Sends one day's emails and returns the count per touch.
    ///
    /// Capacity is handed out in strict priority order: backlog first, then
    /// follow-ups falling due today, then new enrollments. Within each tier
    /// the lower touch number wins.
    fn simulate_day(&mut self, campaign: &CampaignParameters) -> Vec<u64> {
        let mut remaining = campaign.daily_capacity;
        let mut sent = vec![0; self.backlog.len() + 1];

        self.drain_backlog(&mut remaining, &mut sent);
        self.send_newly_due(&campaign.touch_offsets, &mut remaining, &mut sent);
        self.enroll_new_leads(campaign.total_leads, &mut remaining, &mut sent);

        sent
    }

    fn drain_backlog(&mut self, remaining: &mut u64, sent: &mut [u64]) {
        for (index, pending) in self.backlog.iter_mut().enumerate() {
            let send = (*pending).min(*remaining);
            *pending -= send;
            *remaining -= send;
            sent[index + 1] += send;
        }
    }

    // Shortfall goes to the backlog and waits at least one more day.
    fn send_newly_due(&mut self, touch_offsets: &[u32], remaining: &mut u64, sent: &mut [u64]) {
        for (index, &offset) in touch_offsets.iter().enumerate() {
            let due_today = self.started_days_ago(offset as usize);
            let send = due_today.min(*remaining);
            *remaining -= send;
            sent[index + 1] += send;
            self.backlog[index] += due_today - send;
        }
    }

    fn enroll_new_leads(&mut self, total_leads: u64, remaining: &mut u64, sent: &mut [u64]) {
        let new_leads = (*remaining).min(total_leads - self.total_leads_started);
        *remaining -= new_leads;
        sent[0] += new_leads;
        self.total_leads_started += new_leads;
        self.recent_starts.push_back(new_leads);
        if self.recent_starts.len() > self.window {
            self.recent_starts.pop_front();
        }
    }

    // The back of the window is yesterday.
    fn started_days_ago(&self, days_ago: usize) -> u64 {
        self.recent_starts
            .len()
            .checked_sub(days_ago)
            .and_then(|index| self.recent_starts.get(index))
            .copied()
            .unwrap_or(0)
    }
}
