//! Folio - a personal portfolio in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
