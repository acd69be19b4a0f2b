use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::daily_volume::DailyVolume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeGrouping {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// Send volume summed over one period.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AggregatedVolume {
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub touches: Vec<u64>,
    pub total: u64,
    pub cumulative: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodKey {
    Day(NaiveDate),
    Week(i32, u32),
    Month(i32, u32),
}

/// Groups daily records by period.
///
/// Records must be in ascending date order, which is what the projection
/// engine produces. Touch counts and totals are summed; the cumulative value
/// of a period is the one of its last record.
pub fn aggregate(records: &[DailyVolume], grouping: TimeGrouping) -> Vec<AggregatedVolume> {
    let mut groups: Vec<(PeriodKey, AggregatedVolume)> = Vec::new();

    for record in records {
        let key = period_key(record.date, grouping);
        match groups.last_mut() {
            Some((last_key, group)) if *last_key == key => merge_into(group, record),
            _ => groups.push((key, start_group(record, grouping))),
        }
    }

    groups.into_iter().map(|(_, group)| group).collect()
}

fn period_key(date: NaiveDate, grouping: TimeGrouping) -> PeriodKey {
    match grouping {
        TimeGrouping::Daily => PeriodKey::Day(date),
        TimeGrouping::Weekly => {
            let week = date.iso_week();
            PeriodKey::Week(week.year(), week.week())
        }
        TimeGrouping::Monthly => PeriodKey::Month(date.year(), date.month()),
    }
}

fn start_group(record: &DailyVolume, grouping: TimeGrouping) -> AggregatedVolume {
    let label = match grouping {
        TimeGrouping::Daily => short_date(record.date),
        TimeGrouping::Weekly => format!("Week of {}", short_date(record.date)),
        TimeGrouping::Monthly => record.date.format("%b %Y").to_string(),
    };
    AggregatedVolume {
        label,
        start_date: record.date,
        end_date: record.date,
        touches: record.touches.clone(),
        total: record.total,
        cumulative: record.cumulative,
    }
}

fn merge_into(group: &mut AggregatedVolume, record: &DailyVolume) {
    if group.touches.len() < record.touches.len() {
        group.touches.resize(record.touches.len(), 0);
    }
    for (sum, count) in group.touches.iter_mut().zip(&record.touches) {
        *sum += count;
    }
    group.total += record.total;
    group.cumulative = record.cumulative;
    group.end_date = record.date;
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{on_date, volume};

    fn sample_records() -> Vec<DailyVolume> {
        vec![
            volume(on_date(2026, 1, 29), &[3, 0, 0], 3),
            volume(on_date(2026, 1, 30), &[0, 3, 0], 6),
            volume(on_date(2026, 2, 2), &[3, 0, 0], 9),
            volume(on_date(2026, 2, 3), &[0, 3, 0], 12),
            volume(on_date(2026, 2, 9), &[0, 0, 3], 15),
        ]
    }

    #[test]
    fn daily_grouping_keeps_one_entry_per_record() {
        let groups = aggregate(&sample_records(), TimeGrouping::Daily);

        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].label, "Jan 29");
        assert_eq!(groups[2].label, "Feb 2");
        assert_eq!(groups[4].touches, vec![0, 0, 3]);
        assert_eq!(groups[4].cumulative, 15);
    }

    #[test]
    fn weekly_grouping_sums_touches_and_keeps_last_cumulative() {
        let groups = aggregate(&sample_records(), TimeGrouping::Weekly);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "Week of Jan 29");
        assert_eq!(groups[0].touches, vec![3, 3, 0]);
        assert_eq!(groups[0].total, 6);
        assert_eq!(groups[0].cumulative, 6);
        assert_eq!(groups[0].end_date, on_date(2026, 1, 30));

        assert_eq!(groups[1].label, "Week of Feb 2");
        assert_eq!(groups[1].total, 6);
        assert_eq!(groups[1].cumulative, 12);

        assert_eq!(groups[2].label, "Week of Feb 9");
        assert_eq!(groups[2].cumulative, 15);
    }

    #[test]
    fn monthly_grouping_splits_on_calendar_month() {
        let groups = aggregate(&sample_records(), TimeGrouping::Monthly);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Jan 2026");
        assert_eq!(groups[0].total, 6);
        assert_eq!(groups[1].label, "Feb 2026");
        assert_eq!(groups[1].touches, vec![3, 3, 3]);
        assert_eq!(groups[1].start_date, on_date(2026, 2, 2));
        assert_eq!(groups[1].end_date, on_date(2026, 2, 9));
        assert_eq!(groups[1].cumulative, 15);
    }

    #[test]
    fn weekly_grouping_spans_the_year_boundary() {
        // 2026-12-31 (Thu) and 2027-01-01 (Fri) share ISO week 53 of 2026.
        let records = vec![
            volume(on_date(2026, 12, 31), &[2, 0], 2),
            volume(on_date(2027, 1, 1), &[0, 2], 4),
        ];

        let groups = aggregate(&records, TimeGrouping::Weekly);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].touches, vec![2, 2]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&[], TimeGrouping::Monthly).is_empty());
    }
}
