use chrono::NaiveDate;

/// Follow-up offsets of the reference sequence: touch 2 one business day
/// after touch 1, touch 3 three business days after touch 1.
pub const DEFAULT_TOUCH_OFFSETS: [u32; 2] = [1, 3];

/// Fixed inputs of one projection run.
///
/// `touch_offsets[i]` is the number of business days after a lead's first
/// touch at which touch `i + 2` becomes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignParameters {
    pub start_date: NaiveDate,
    pub total_leads: u64,
    pub daily_capacity: u64,
    pub touch_offsets: Vec<u32>,
    pub max_days: Option<usize>,
}

impl CampaignParameters {
    pub fn new(start_date: NaiveDate, total_leads: u64, daily_capacity: u64) -> Self {
        Self {
            start_date,
            total_leads,
            daily_capacity,
            touch_offsets: DEFAULT_TOUCH_OFFSETS.to_vec(),
            max_days: None,
        }
    }

    /// Reference deployment: 6398 leads from Monday 2026-02-02 at 900 emails/day.
    pub fn reference() -> Self {
        let start_date = NaiveDate::from_ymd_opt(2026, 2, 2).expect("2026-02-02 is a valid date");
        Self::new(start_date, 6398, 900)
    }

    pub fn touches_per_lead(&self) -> usize {
        self.touch_offsets.len() + 1
    }

    pub fn total_emails(&self) -> u64 {
        self.total_leads * self.touches_per_lead() as u64
    }

    pub fn max_offset(&self) -> u32 {
        self.touch_offsets.iter().copied().max().unwrap_or(0)
    }
}
