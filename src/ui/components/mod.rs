//! Reusable UI components.

pub mod tab_selector;

pub use tab_selector::{render_tab_selector, tab_offsets, TabItem};
