use chrono::NaiveDate;
use serde::Serialize;

/// Emails sent on one business day. `touches[0]` is touch 1.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub touches: Vec<u64>,
    pub total: u64,
    pub cumulative: u64,
}

impl DailyVolume {
    pub fn touch(&self, touch_number: usize) -> u64 {
        touch_number
            .checked_sub(1)
            .and_then(|index| self.touches.get(index))
            .copied()
            .unwrap_or(0)
    }
}
