//! View state for the portfolio.
//!
//! The root [`crate::app::App`] owns exactly one [`ViewState`] and passes it
//! by reference to every renderer. It holds the only mutable data in the
//! program: which panel is active and which project card (if any) has
//! pointer or keyboard focus.
//!
//! ```text
//! ┌───────────────┐  select_section / hover_*   ┌─────────────┐
//! │ input handler │ ──────────────────────────▶ │  ViewState  │
//! └───────────────┘                             └──────┬──────┘
//!                                                      │ &ViewState
//!                                                      ▼
//!                                          project(&ProfileRecord, &ViewState)
//! ```

mod section;
mod state;

pub use section::Section;
pub use state::ViewState;
