//! Terminal UI layer for the funding dashboard.
//!
//! Provides themes, share bars, header and metric components, the name
//! selector, chart helpers, the three report views and the main application
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod charts;
pub mod components;
pub mod investor_view;
pub mod overall_view;
pub mod selector;
pub mod startup_view;
pub mod themes;

pub use funding_core as core;
