//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.

use crate::dashboard::{DashboardView, Selection, SelectionError};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crate::tui::views::tabs::tab_at;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long a footer status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Dataset, palette and current selection.
    pub dashboard: DashboardView,
    /// Interval between passive ticks.
    pub tick_rate: Duration,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Row the tab labels were last drawn on (inside the tab bar border).
    ///
    /// Updated during each render pass and used to map mouse clicks to tabs.
    /// None until the first render.
    pub tab_bar_area: Option<Rect>,
}

impl App {
    /// Creates a new App showing the aggregate view of `dashboard`.
    pub fn new(dashboard: DashboardView, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            tick_count: 0,
            dashboard,
            tick_rate,
            status_message: None,
            tab_bar_area: None,
        }
    }

    /// Switches to `selection`, reporting a rejected selection in the footer.
    pub fn select(&mut self, selection: Selection) {
        let result = self.dashboard.select(selection);
        self.report(result);
    }

    /// Switches to the tab at `index`.
    pub fn select_tab(&mut self, index: usize) {
        let result = self.dashboard.select_tab(index);
        self.report(result);
    }

    /// Moves one tab right, wrapping to the first.
    pub fn next_tab(&mut self) {
        let result = self.dashboard.next_tab();
        self.report(result);
    }

    /// Moves one tab left, wrapping to the last.
    pub fn previous_tab(&mut self) {
        let result = self.dashboard.previous_tab();
        self.report(result);
    }

    fn report(&mut self, result: Result<(), SelectionError>) {
        if let Err(e) = result {
            tracing::warn!("selection rejected: {}", e);
            self.set_status(e.to_string());
        }
    }

    /// Shows `message` in the footer for a short time.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Applies an action produced by the key handler.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Select(selection) => self.select(selection),
            Action::SelectTab(index) => self.select_tab(index),
            Action::NextTab => self.next_tab(),
            Action::PreviousTab => self.previous_tab(),
            Action::None => {}
        }
    }

    /// Returns the tab under a click at `(column, row)`, if any.
    ///
    /// Uses the tab bar area recorded by the last render.
    pub fn calculate_clicked_tab(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.tab_bar_area?;
        let labels: Vec<String> = self
            .dashboard
            .tabs()
            .into_iter()
            .map(|t| t.label)
            .collect();
        tab_at(&labels, inner, column, row)
    }

    /// Handles a mouse event: a left click on a tab selects it.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(index) = self.calculate_clicked_tab(mouse.column, mouse.row) {
                tracing::debug!("tab {} clicked", index);
                self.select_tab(index);
            }
        }
    }

    /// Clears the status message once expired. Returns true if it was cleared.
    pub fn expire_status_message(&mut self) -> bool {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Runs the TUI until the user quits.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_dashboard(frame, self))?;

        loop {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    self.dispatch(handle_key_event(key));
                    if self.should_quit {
                        return Ok(());
                    }
                    true
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                    true
                }
                Event::Tick => {
                    self.tick_count += 1;
                    // Data is static; only an expiring status message changes the screen
                    self.expire_status_message()
                }
                Event::Resize(_, _) => true,
            };

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
