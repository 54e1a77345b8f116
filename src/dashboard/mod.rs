//! Dashboard view state and render-model composition.
//!
//! [`DashboardView`] owns the active [`Selection`] and derives a
//! [`ViewModel`] (chart series plus summary cards) from the dataset on
//! every call to [`DashboardView::render_model`]. Statistics are recomputed
//! each time; the inputs are tiny and the computation is pure.

/// Render-model types produced for each selection.
pub mod model;

/// Position-based color assignment.
pub mod palette;

pub use model::{Series, SummaryCard, ViewModel};
pub use palette::Palette;

use crate::dataset::{Dataset, MonthLabel};
use crate::stats::{compute_stats, StatsError};
use ratatui::style::Color;
use thiserror::Error;

/// Which view the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// All roster members on one chart.
    #[default]
    Aggregate,
    /// A single roster member, by display name.
    Person(String),
    /// The separately scoped series.
    Special,
}

/// Errors from changing or resolving the selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The named person is not in the roster.
    #[error("No one named '{name}' is on the roster")]
    UnknownPerson {
        /// Requested name.
        name: String,
    },

    /// The tab index is past the last tab.
    #[error("Tab {index} does not exist")]
    UnknownTab {
        /// Requested zero-based index.
        index: usize,
    },

    /// The text does not name any view.
    #[error("Unknown view '{input}'")]
    UnknownView {
        /// User-supplied text.
        input: String,
    },

    /// The text matches more than one roster member.
    #[error("View '{input}' is ambiguous: {}", candidates.join(", "))]
    AmbiguousView {
        /// User-supplied text.
        input: String,
        /// Full names that matched.
        candidates: Vec<String>,
    },
}

/// Errors from building a render model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Statistics could not be computed.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// The active selection no longer names a roster member.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// A series has a different number of counts than month labels.
    #[error("{series} has {counts} counts but {labels} month labels")]
    LabelMismatch {
        /// Card title of the series.
        series: String,
        /// Number of counts.
        counts: usize,
        /// Number of month labels.
        labels: usize,
    },
}

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Text shown on the tab.
    pub label: String,
    /// Selection the tab activates.
    pub selection: Selection,
    /// Accent color, `None` for the aggregate tab.
    pub color: Option<Color>,
}

/// Holds the selection and composes render models over a dataset.
#[derive(Debug, Clone)]
pub struct DashboardView {
    dataset: Dataset,
    palette: Palette,
    selection: Selection,
}

impl DashboardView {
    /// Creates a view on `dataset`, starting on [`Selection::Aggregate`].
    pub fn new(dataset: Dataset, palette: Palette) -> Self {
        Self {
            dataset,
            palette,
            selection: Selection::Aggregate,
        }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the selection.
    ///
    /// A `Person` selection must name a roster member; otherwise the current
    /// selection is kept and [`SelectionError::UnknownPerson`] is returned.
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectionError> {
        if let Selection::Person(name) = &selection {
            if self.dataset.roster().position(name).is_none() {
                return Err(SelectionError::UnknownPerson { name: name.clone() });
            }
        }
        if self.selection != selection {
            tracing::debug!("selection changed: {:?} -> {:?}", self.selection, selection);
        }
        self.selection = selection;
        Ok(())
    }

    /// Color of the roster member at `position`.
    pub fn person_color(&self, position: usize) -> Color {
        self.palette.color_for(position)
    }

    /// Color of the special series: the slot after the last roster member.
    pub fn special_color(&self) -> Color {
        self.palette.color_for(self.dataset.roster().len())
    }

    /// Tab label of the special series, e.g. `Michaelo (TPL)`.
    pub fn special_tab_label(&self) -> String {
        let special = self.dataset.special();
        format!("{} ({})", special.short_name(), special.metric)
    }

    /// Tabs in display order: aggregate, each roster member, special series.
    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs = Vec::with_capacity(self.dataset.roster().len() + 2);
        tabs.push(Tab {
            label: "Dashboard".to_string(),
            selection: Selection::Aggregate,
            color: None,
        });
        for (position, person) in self.dataset.roster().iter().enumerate() {
            tabs.push(Tab {
                label: person.short_name().to_string(),
                selection: Selection::Person(person.name.clone()),
                color: Some(self.person_color(position)),
            });
        }
        tabs.push(Tab {
            label: self.special_tab_label(),
            selection: Selection::Special,
            color: Some(self.special_color()),
        });
        tabs
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.dataset.roster().len() + 2
    }

    /// Index of the active selection in [`Self::tabs`].
    pub fn selected_tab(&self) -> usize {
        match &self.selection {
            Selection::Aggregate => 0,
            Selection::Person(name) => self
                .dataset
                .roster()
                .position(name)
                .map_or(0, |position| position + 1),
            Selection::Special => self.tab_count() - 1,
        }
    }

    /// Selects the tab at `index`.
    pub fn select_tab(&mut self, index: usize) -> Result<(), SelectionError> {
        let selection = self
            .tabs()
            .into_iter()
            .nth(index)
            .map(|tab| tab.selection)
            .ok_or(SelectionError::UnknownTab { index })?;
        self.select(selection)
    }

    /// Selects the next tab, wrapping from the last to the first.
    pub fn next_tab(&mut self) -> Result<(), SelectionError> {
        let next = (self.selected_tab() + 1) % self.tab_count();
        self.select_tab(next)
    }

    /// Selects the previous tab, wrapping from the first to the last.
    pub fn previous_tab(&mut self) -> Result<(), SelectionError> {
        let count = self.tab_count();
        let previous = (self.selected_tab() + count - 1) % count;
        self.select_tab(previous)
    }

    /// Maps user text to a selection.
    ///
    /// Accepts `aggregate`/`dashboard`/`all`, `special`, a full name, and a
    /// first name or the special series' metric when that alias is unique.
    /// Full names win over aliases; an alias shared by a roster member and
    /// the special series is ambiguous. Matching is case-insensitive.
    pub fn resolve(&self, input: &str) -> Result<Selection, SelectionError> {
        let wanted = input.trim().to_lowercase();
        if matches!(wanted.as_str(), "aggregate" | "dashboard" | "all") {
            return Ok(Selection::Aggregate);
        }

        let roster = self.dataset.roster();
        if let Some(person) = roster.iter().find(|p| p.name.to_lowercase() == wanted) {
            return Ok(Selection::Person(person.name.clone()));
        }

        let special = self.dataset.special();
        if wanted == "special" || wanted == special.name.to_lowercase() {
            return Ok(Selection::Special);
        }

        let mut candidates: Vec<String> = roster
            .iter()
            .filter(|p| p.short_name().to_lowercase() == wanted)
            .map(|p| p.name.clone())
            .collect();
        let special_alias = wanted == special.metric.to_lowercase()
            || wanted == special.short_name().to_lowercase();

        match (candidates.len(), special_alias) {
            (0, false) => Err(SelectionError::UnknownView {
                input: input.to_string(),
            }),
            (0, true) => Ok(Selection::Special),
            (1, false) => Ok(Selection::Person(candidates.remove(0))),
            _ => {
                if special_alias {
                    candidates.push(special.name.clone());
                }
                Err(SelectionError::AmbiguousView {
                    input: input.to_string(),
                    candidates,
                })
            }
        }
    }

    /// Header line, e.g. `Midshift MPL Dashboard (Oct 2024 – May 2025)`.
    pub fn heading(&self) -> String {
        format!(
            "Midshift {} Dashboard ({})",
            self.dataset.metric(),
            self.dataset.window_range()
        )
    }

    /// Builds the chart series and summary cards for the active selection.
    pub fn render_model(&self) -> Result<ViewModel, RenderError> {
        match &self.selection {
            Selection::Aggregate => self.aggregate_model(),
            Selection::Person(name) => self.person_model(name),
            Selection::Special => self.special_model(),
        }
    }

    fn aggregate_model(&self) -> Result<ViewModel, RenderError> {
        let months = self.dataset.months();
        let mut series = Vec::with_capacity(self.dataset.roster().len());
        let mut cards = Vec::with_capacity(self.dataset.roster().len());
        for (position, person) in self.dataset.roster().iter().enumerate() {
            let color = self.person_color(position);
            series.push(Series {
                name: person.name.clone(),
                color,
                counts: person.counts.clone(),
            });
            cards.push(summary_card(
                person.short_name(),
                color,
                &person.counts,
                months,
            )?);
        }
        Ok(ViewModel {
            title: format!("{} Logs Overview", self.dataset.metric()),
            accent: None,
            metric: self.dataset.metric().to_string(),
            months: months.to_vec(),
            series,
            cards,
        })
    }

    fn person_model(&self, name: &str) -> Result<ViewModel, RenderError> {
        let found = self
            .dataset
            .roster()
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name);
        let (position, person) = found.ok_or_else(|| SelectionError::UnknownPerson {
            name: name.to_string(),
        })?;
        let color = self.person_color(position);
        let months = self.dataset.months();
        Ok(ViewModel {
            title: person.name.clone(),
            accent: Some(color),
            metric: self.dataset.metric().to_string(),
            months: months.to_vec(),
            series: vec![Series {
                name: "logs".to_string(),
                color,
                counts: person.counts.clone(),
            }],
            cards: vec![summary_card(&person.name, color, &person.counts, months)?],
        })
    }

    fn special_model(&self) -> Result<ViewModel, RenderError> {
        let special = self.dataset.special();
        let color = self.special_color();
        let title = format!("{} – {}", special.name, special.metric);
        Ok(ViewModel {
            title: title.clone(),
            accent: Some(color),
            metric: special.metric.clone(),
            months: special.labels.clone(),
            series: vec![Series {
                name: "logs".to_string(),
                color,
                counts: special.counts.clone(),
            }],
            cards: vec![summary_card(&title, color, &special.counts, &special.labels)?],
        })
    }
}

/// Computes stats for `counts` and resolves the best/worst month labels.
///
/// `counts` and `months` must be the same length; [`Dataset::new`] enforces
/// this for every series it holds.
fn summary_card(
    title: &str,
    color: Color,
    counts: &[u32],
    months: &[MonthLabel],
) -> Result<SummaryCard, RenderError> {
    if counts.len() != months.len() {
        return Err(RenderError::LabelMismatch {
            series: title.to_string(),
            counts: counts.len(),
            labels: months.len(),
        });
    }
    let stats = compute_stats(counts)?;
    Ok(SummaryCard {
        title: title.to_string(),
        color,
        best_month: months[stats.best_month_index].clone(),
        worst_month: months[stats.worst_month_index].clone(),
        stats,
    })
}
