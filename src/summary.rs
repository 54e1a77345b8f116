//! Plain-text and JSON output of a view, for use outside the TUI.

use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

use crate::dashboard::{DashboardView, RenderError, ViewModel};

/// Output format of the `summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Errors from building a summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The view could not be built.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The report could not be serialized.
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable form of a [`ViewModel`].
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// Dashboard heading.
    pub heading: String,
    /// View title.
    pub view: String,
    /// Metric name.
    pub metric: String,
    /// Month labels of the view's window.
    pub months: Vec<String>,
    /// Per-series counts.
    pub series: Vec<SeriesReport>,
    /// Summary cards.
    pub cards: Vec<CardReport>,
}

/// One chart line.
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    /// Legend name.
    pub name: String,
    /// Counts, aligned with `months`.
    pub counts: Vec<u32>,
}

/// One summary card.
#[derive(Debug, Serialize)]
pub struct CardReport {
    /// Card heading.
    pub title: String,
    /// Sum of all counts.
    pub total: u64,
    /// Fewest logs in a month.
    pub min: u32,
    /// Most logs in a month.
    pub max: u32,
    /// Month with the fewest logs (`YYYY-MM`).
    pub best_month: String,
    /// Month with the most logs (`YYYY-MM`).
    pub worst_month: String,
}

impl SummaryReport {
    /// Builds the report for the view's current selection.
    pub fn from_view(view: &DashboardView) -> Result<Self, RenderError> {
        let model = view.render_model()?;
        Ok(Self::from_model(view.heading(), &model))
    }

    fn from_model(heading: String, model: &ViewModel) -> Self {
        Self {
            heading,
            view: model.title.clone(),
            metric: model.metric.clone(),
            months: model.months.iter().map(|m| m.to_string()).collect(),
            series: model
                .series
                .iter()
                .map(|s| SeriesReport {
                    name: s.name.clone(),
                    counts: s.counts.clone(),
                })
                .collect(),
            cards: model
                .cards
                .iter()
                .map(|c| CardReport {
                    title: c.title.clone(),
                    total: c.stats.total,
                    min: c.stats.min,
                    max: c.stats.max,
                    best_month: c.best_month.to_string(),
                    worst_month: c.worst_month.to_string(),
                })
                .collect(),
        }
    }
}

/// Renders the view's current selection in `format`.
pub fn render(view: &DashboardView, format: OutputFormat) -> Result<String, SummaryError> {
    match format {
        OutputFormat::Json => {
            let report = SummaryReport::from_view(view)?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => {
            let model = view.render_model()?;
            Ok(render_text(&view.heading(), &model))
        }
    }
}

fn render_text(heading: &str, model: &ViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", model.title);
    for card in &model.cards {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "  Total Logs: {}", card.stats.total);
        let _ = writeln!(out, "  Best Month: {}", card.best_month_display());
        let _ = writeln!(out, "  Challenging Month: {}", card.worst_month_display());
    }
    out
}
