use plotters::prelude::*;
use thiserror::Error;

use crate::services::aggregation::AggregatedVolume;

#[derive(Error, Debug)]
pub enum ProjectionPlotError {
    #[error("projection has no send volume to plot")]
    Empty,
    #[error("failed to render projection chart: {0}")]
    Render(String),
}

const TOUCH_COLORS: [RGBColor; 3] = [
    RGBColor(227, 27, 84),
    RGBColor(59, 130, 246),
    RGBColor(34, 197, 94),
];
const CUMULATIVE_COLOR: RGBColor = RGBColor(6, 182, 212);

/// Renders a stacked bar chart with one series per touch, optionally with
/// the cumulative volume as a line on a secondary axis.
pub fn write_projection_png(
    output_path: &str,
    volumes: &[AggregatedVolume],
    show_cumulative: bool,
) -> Result<(), ProjectionPlotError> {
    if volumes.is_empty() {
        return Err(ProjectionPlotError::Empty);
    }
    render_projection_png(output_path, volumes, show_cumulative)
}

fn render_projection_png(
    output_path: &str,
    volumes: &[AggregatedVolume],
    show_cumulative: bool,
) -> Result<(), ProjectionPlotError> {
    let max_total = volumes.iter().map(|item| item.total).max().unwrap_or(0);
    let max_y = max_total.saturating_add(max_total / 10).max(1);
    let max_cumulative = volumes
        .iter()
        .map(|item| item.cumulative)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_x = volumes.len() as i32;
    let touch_count = volumes.iter().map(|item| item.touches.len()).max().unwrap_or(0);

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Send Volume Projection", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(75)
        .right_y_label_area_size(if show_cumulative { 75 } else { 0 })
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
        .set_secondary_coord(0..max_x, 0..max_cumulative);

    let label_count = volumes.len().clamp(1, 10);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Emails")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            usize::try_from(*index)
                .ok()
                .and_then(|idx| volumes.get(idx))
                .map(|item| item.label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    for touch in 0..touch_count {
        let color = TOUCH_COLORS[touch % TOUCH_COLORS.len()];
        let style = ShapeStyle::from(&color).filled();
        chart
            .draw_series(volumes.iter().enumerate().map(|(idx, item)| {
                let below: u64 = item.touches.iter().take(touch).sum();
                let height = item.touches.get(touch).copied().unwrap_or(0);
                let x = idx as i32;
                Rectangle::new([(x, below), (x + 1, below + height)], style)
            }))
            .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
            .label(format!("Email {}", touch + 1))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
    }

    if show_cumulative {
        chart
            .configure_secondary_axes()
            .y_desc("Cumulative")
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 20))
            .draw()
            .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;
        chart
            .draw_secondary_series(LineSeries::new(
                volumes
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| (idx as i32, item.cumulative)),
                CUMULATIVE_COLOR.stroke_width(2),
            ))
            .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
            .label("Cumulative")
            .legend(|(x, y)| PathElement::new([(x, y), (x + 10, y)], &CUMULATIVE_COLOR));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;
    Ok(())
}
