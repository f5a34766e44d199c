//! Sleeve catalog TUI
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod catalog;
pub mod effect;
pub mod reducer;
pub mod search;
pub mod state;
pub mod ui;
