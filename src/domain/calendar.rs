use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

/// Returns `true` for Monday through Friday. There is no holiday calendar.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the earliest business day strictly after `date`, or `None` when
/// the end of the representable date range comes first.
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut next = date.succ_opt()?;
    while !is_business_day(next) {
        next = next.succ_opt()?;
    }
    Some(next)
}

/// Returns `count` consecutive business days. `start` is included only when
/// it is itself a business day; otherwise the run begins at the next one.
/// Fewer dates are returned when the date range ends first.
pub fn business_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    BusinessDays::starting_at(start).take(count).collect()
}

/// Iterator over business days in ascending order. Ends only at the end of
/// the representable date range.
#[derive(Debug, Clone)]
pub struct BusinessDays {
    next: Option<NaiveDate>,
}

impl BusinessDays {
    pub fn starting_at(start: NaiveDate) -> Self {
        let next = if is_business_day(start) {
            Some(start)
        } else {
            next_business_day(start)
        };
        Self { next }
    }
}

impl Iterator for BusinessDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = next_business_day(current);
        Some(current)
    }
}
