//! View modules for the TUI.

pub mod cards;
pub mod chart;
pub mod tabs;
