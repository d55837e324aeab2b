//! Pointer interaction system for Folio.
//!
//! Renderers register clickable/hoverable regions in a [`HitAreaRegistry`]
//! each frame; the event loop hit-tests mouse events against the previous
//! frame's regions and dispatches the result through
//! [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
