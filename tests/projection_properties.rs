use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use send_projection::domain::calendar::{business_days, is_business_day};
use send_projection::domain::campaign::CampaignParameters;
use send_projection::services::aggregation::{aggregate, TimeGrouping};
use send_projection::services::projection::project_send_volume;

fn random_campaign(rng: &mut StdRng) -> CampaignParameters {
    let first_monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let start_date = business_days(first_monday, rng.gen_range(1..300))
        .pop()
        .unwrap();

    let follow_ups = rng.gen_range(0..4);
    let mut touch_offsets = Vec::with_capacity(follow_ups);
    let mut offset = 0;
    for _ in 0..follow_ups {
        offset += rng.gen_range(1..6);
        touch_offsets.push(offset);
    }

    CampaignParameters {
        start_date,
        total_leads: rng.gen_range(0..2_000),
        daily_capacity: rng.gen_range(1..500),
        touch_offsets,
        max_days: None,
    }
}

#[test]
fn random_campaigns_keep_every_invariant() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let campaign = random_campaign(&mut rng);
        let records = project_send_volume(&campaign).unwrap();
        let touches = campaign.touches_per_lead();

        for touch in 1..=touches {
            let sent: u64 = records.iter().map(|record| record.touch(touch)).sum();
            assert_eq!(sent, campaign.total_leads, "touch {touch} of {campaign:?}");
        }

        for record in &records {
            assert!(record.total > 0);
            assert!(record.total <= campaign.daily_capacity, "{campaign:?}");
            assert_eq!(record.total, record.touches.iter().sum::<u64>());
            assert!(is_business_day(record.date));
            assert!(record.date >= campaign.start_date);
        }

        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
            assert_eq!(pair[1].cumulative, pair[0].cumulative + pair[1].total);
        }

        let last_cumulative = records.last().map(|record| record.cumulative).unwrap_or(0);
        assert_eq!(last_cumulative, campaign.total_emails());
    }
}

#[test]
fn projection_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let campaign = random_campaign(&mut rng);
        assert_eq!(
            project_send_volume(&campaign).unwrap(),
            project_send_volume(&campaign).unwrap()
        );
    }
}

#[test]
fn grouping_preserves_totals() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..50 {
        let campaign = random_campaign(&mut rng);
        let records = project_send_volume(&campaign).unwrap();
        let daily_total: u64 = records.iter().map(|record| record.total).sum();

        for grouping in [TimeGrouping::Daily, TimeGrouping::Weekly, TimeGrouping::Monthly] {
            let groups = aggregate(&records, grouping);
            let grouped_total: u64 = groups.iter().map(|group| group.total).sum();
            assert_eq!(grouped_total, daily_total);
            assert_eq!(
                groups.last().map(|group| group.cumulative),
                records.last().map(|record| record.cumulative)
            );
        }
    }
}
