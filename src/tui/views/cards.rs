//! Summary cards: total, best month, and most challenging month.

use crate::dashboard::SummaryCard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a card: borders plus three lines.
pub const CARD_HEIGHT: u16 = 5;

/// Renders `cards` side by side with equal widths.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: &[SummaryCard]) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.color))
            .title(Span::styled(
                format!(" {} ", card.title),
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(Paragraph::new(card_lines(card)).block(block), *chunk);
    }
}

fn card_lines(card: &SummaryCard) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    vec![
        Line::from(vec![
            Span::styled("Total Logs: ", label),
            Span::styled(
                card.stats.total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best Month: ", label),
            Span::styled(
                card.best_month_display().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Challenging Month: ", label),
            Span::styled(
                card.worst_month_display().to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
    ]
}
