//! Midshift dashboard library
//!
//! Monthly log counts for a fixed roster, with a per-person drill-down and
//! one separately scoped series. The same render model drives the terminal
//! UI and the plain-text/JSON `summary` output.
//!
//! - [`stats`] computes totals and best/worst months for one series.
//! - [`dataset`] holds the validated roster, month window, and special series.
//! - [`dashboard`] owns the current selection and builds render models.
//! - [`tui`] draws the dashboard with ratatui.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod stats;
pub mod summary;
pub mod tui;

pub use error::AppError;
