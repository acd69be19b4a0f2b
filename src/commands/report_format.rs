use crate::services::aggregation::AggregatedVolume;
use crate::services::projection_types::ProjectionReport;

pub fn format_projection_report(report: &ProjectionReport) -> String {
    let end_date = match report.end_date {
        Some(date) => date.to_string(),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Send Projection Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("End date: {end_date}"));
    lines.push(format!(
        "Total emails: {} ({} leads x {} emails)",
        report.total_emails, report.total_leads, report.touches_per_lead
    ));
    lines.push(format!("Daily capacity: {}", report.daily_capacity));
    lines.push(format!("Working days: {}", report.working_days));
    lines.push(format!("Peak daily volume: {}", report.peak_daily_volume));
    lines.push(String::new());
    lines.push("Touch | Emails".to_string());
    lines.push("------|-------".to_string());
    for (index, total) in report.touch_totals.iter().enumerate() {
        lines.push(format!("Email {} | {total}", index + 1));
    }

    lines.join("\n")
}

pub fn format_volume_table(volumes: &[AggregatedVolume]) -> String {
    let touch_count = volumes.iter().map(|item| item.touches.len()).max().unwrap_or(0);

    let mut header = vec!["Period".to_string()];
    header.extend((1..=touch_count).map(|touch| format!("Email {touch}")));
    header.push("Total".to_string());
    header.push("Cumulative".to_string());

    let mut lines = vec![header.join(" | ")];
    lines.push(vec!["---"; header.len()].join("|"));
    for item in volumes {
        let mut row = vec![item.label.clone()];
        row.extend((0..touch_count).map(|index| {
            item.touches.get(index).copied().unwrap_or(0).to_string()
        }));
        row.push(item.total.to_string());
        row.push(item.cumulative.to_string());
        lines.push(row.join(" | "));
    }

    lines.join("\n")
}
