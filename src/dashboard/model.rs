//! Render-model types: what a view shows, independent of how it is drawn.

use crate::dataset::MonthLabel;
use crate::stats::LogStats;
use ratatui::style::Color;

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// Line color.
    pub color: Color,
    /// One count per month of the view's window.
    pub counts: Vec<u32>,
}

impl Series {
    /// `(month index, count)` points for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64, f64::from(c)))
            .collect()
    }
}

/// Totals and best/worst months for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Card heading.
    pub title: String,
    /// Accent color.
    pub color: Color,
    /// Raw statistics.
    pub stats: LogStats,
    /// Month with the fewest logs.
    pub best_month: MonthLabel,
    /// Month with the most logs.
    pub worst_month: MonthLabel,
}

impl SummaryCard {
    /// Best month without its year prefix, e.g. `01`.
    pub fn best_month_display(&self) -> &str {
        self.best_month.short()
    }

    /// Worst month without its year prefix, e.g. `11`.
    pub fn worst_month_display(&self) -> &str {
        self.worst_month.short()
    }
}

/// Everything one view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Section heading.
    pub title: String,
    /// Heading color, `None` for the aggregate view.
    pub accent: Option<Color>,
    /// Metric name shown on the y-axis.
    pub metric: String,
    /// X-axis labels.
    pub months: Vec<MonthLabel>,
    /// Chart lines.
    pub series: Vec<Series>,
    /// Summary cards.
    pub cards: Vec<SummaryCard>,
}

impl ViewModel {
    /// Largest count across all series, 0 when there are none.
    pub fn max_count(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
