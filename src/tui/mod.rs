//! Terminal UI for the dashboard.

/// Application state and event loop.
pub mod app;
/// Input and tick events, key bindings.
pub mod event;
/// Top-level layout.
pub mod ui;
/// Tab bar, chart, and summary card widgets.
pub mod views;

#[cfg(test)]
mod test_utils;
