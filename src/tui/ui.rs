//! Main rendering orchestration for the TUI dashboard.
//!
//! Provides the top-level `render_dashboard` function that composes
//! the header, tab bar, chart, summary cards, and footer.

use crate::dashboard::ViewModel;
use crate::tui::app::App;
use crate::tui::views::cards::{render_cards, CARD_HEIGHT};
use crate::tui::views::chart::render_chart;
use crate::tui::views::tabs::{render_tab_bar, TAB_BAR_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str = "[←/→] Switch view  [1-9] Jump  [d] Dashboard  [t] Special  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Renders the full dashboard layout: header, tab bar, view body, and footer.
///
/// Updates `app.tab_bar_area` with the row the tab labels occupy so mouse
/// clicks can be mapped back to tabs.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // header
            Constraint::Length(TAB_BAR_HEIGHT), // tabs
            Constraint::Min(0),                 // chart and cards
            Constraint::Length(1),              // footer
        ])
        .split(area);

    render_header(frame, chunks[0], &app.dashboard.heading());

    let tab_inner = render_tab_bar(frame, chunks[1], &app.dashboard);
    app.tab_bar_area = Some(tab_inner);

    match app.dashboard.render_model() {
        Ok(model) => render_body(frame, chunks[2], &model),
        Err(e) => {
            tracing::error!("failed to build view: {}", e);
            let message = Paragraph::new(Line::from(Span::styled(
                format!("Cannot display this view: {e}"),
                Style::default().fg(Color::Red),
            )))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[2]);
        }
    }

    // Status message overrides the key hints while it is live
    let footer_text = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(footer_text), chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, heading: &str) {
    let title = Paragraph::new(Line::from(Span::styled(
        heading.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let version = Paragraph::new(Line::from(Span::styled(
        VERSION_TEXT,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(version, area);
}

/// Draws the view title, chart, and cards inside one bordered block.
fn render_body(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let title_style = match model.accent {
        Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
        None => Style::default().add_modifier(Modifier::BOLD),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", model.title), title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(CARD_HEIGHT)])
        .split(inner);

    render_chart(frame, chunks[0], model);
    render_cards(frame, chunks[1], &model.cards);
}
