//! Terminal User Interface module
//!
//! A single-screen ratatui front end: income and expense forms, the running
//! balance, a live search box, the history table and an error popup.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
