//! Line chart of monthly counts, one line per series.

use crate::dashboard::{Series, ViewModel};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};

/// Columns needed per month before full `YYYY-MM` labels fit on the x-axis.
const FULL_LABEL_WIDTH: usize = 10;

/// Largest y-axis top for which every integer gets a label.
const MAX_DENSE_Y_LABELS: u32 = 6;

/// Renders the chart for `model` into `area`.
///
/// The legend is shown only when more than one series is plotted.
pub fn render_chart(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let points: Vec<Vec<(f64, f64)>> = model.series.iter().map(Series::points).collect();
    let show_legend = model.series.len() > 1;

    let datasets: Vec<Dataset> = model
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            let dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(data);
            if show_legend {
                dataset.name(series.name.clone())
            } else {
                dataset
            }
        })
        .collect();

    let use_full_labels = usize::from(area.width) >= model.months.len() * FULL_LABEL_WIDTH;
    let x_labels: Vec<Span> = model
        .months
        .iter()
        .map(|m| {
            if use_full_labels {
                Span::raw(m.to_string())
            } else {
                Span::raw(m.short().to_string())
            }
        })
        .collect();

    let y_top = y_axis_top(model.max_count());

    let x_axis = Axis::default()
        .title("Month")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_axis_top(model.months.len())])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(model.metric.clone())
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, f64::from(y_top)])
        .labels(y_labels(y_top));

    let chart = Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, area);
}

/// Upper x bound; a single month still gets a non-degenerate axis.
fn x_axis_top(months: usize) -> f64 {
    months.saturating_sub(1).max(1) as f64
}

/// Upper y bound with one unit of headroom, rounded up to an even value
/// once labels stop being dense so the midpoint stays an integer.
pub(crate) fn y_axis_top(max_count: u32) -> u32 {
    let top = max_count.saturating_add(1);
    if top <= MAX_DENSE_Y_LABELS || top % 2 == 0 {
        top
    } else {
        top + 1
    }
}

pub(crate) fn y_labels(top: u32) -> Vec<Span<'static>> {
    if top <= MAX_DENSE_Y_LABELS {
        (0..=top).map(|v| Span::raw(v.to_string())).collect()
    } else {
        vec![
            Span::raw("0"),
            Span::raw((top / 2).to_string()),
            Span::raw(top.to_string()),
        ]
    }
}
