//! Tab bar listing the dashboard, each roster member, and the special series.

use crate::dashboard::{DashboardView, Tab};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Separator drawn between tab labels.
pub const TAB_DIVIDER: &str = " │ ";

/// Height of the bordered tab bar.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Renders the tab bar and returns the inner row the labels are drawn on.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, view: &DashboardView) -> Rect {
    let tabs = view.tabs();
    let titles: Vec<Line> = tabs.iter().map(tab_title).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Views ");
    let inner = block.inner(area);

    let widget = Tabs::new(titles)
        .block(block)
        .select(view.selected_tab())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )
        .divider(Span::raw(TAB_DIVIDER));
    frame.render_widget(widget, area);
    inner
}

fn tab_title(tab: &Tab) -> Line<'static> {
    let style = match tab.color {
        Some(color) => Style::default().fg(color),
        None => Style::default().fg(Color::White),
    };
    Line::from(Span::styled(tab.label.clone(), style))
}

/// Column ranges `[start, end)` covered by each tab, including its padding.
///
/// Mirrors the layout `Tabs` uses: one cell of padding on each side of a
/// label, then the divider before the next label.
pub fn tab_column_ranges<S: AsRef<str>>(labels: &[S], left: u16) -> Vec<(u16, u16)> {
    let divider = Line::from(TAB_DIVIDER).width() as u16;
    let mut x = left;
    labels
        .iter()
        .map(|label| {
            let width = Line::from(label.as_ref()).width() as u16;
            let start = x;
            let end = start.saturating_add(width).saturating_add(2);
            x = end.saturating_add(divider);
            (start, end)
        })
        .collect()
}

/// Index of the tab under `(column, row)` within the labels row `inner`.
pub fn tab_at<S: AsRef<str>>(labels: &[S], inner: Rect, column: u16, row: u16) -> Option<usize> {
    if row != inner.y || column < inner.x || column >= inner.right() {
        return None;
    }
    tab_column_ranges(labels, inner.x)
        .iter()
        .position(|&(start, end)| column >= start && column < end)
}
