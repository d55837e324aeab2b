//! Time-based animation for panel and card transitions.
//!
//! Animations are described by reusable [`Preset`] records keyed by phase
//! (`initial`, `active`, `exit`) and sampled at render time against the
//! application clock. Nothing here owns a timer: the event loop advances
//! the clock and renderers ask a preset where it is at a given elapsed time.
//!
//! [`PanelTransition`] sequences panel switches so the outgoing panel
//! finishes exiting before the incoming one starts entering.

mod preset;
mod transition;

pub use preset::{
    Motion, Phase, Preset, Stagger, CARD_REVEAL, CARD_REVEAL_STEP, FADE_IN, HEADER_DROP,
    LIST_ITEM, LIST_STAGGER, TITLE_FADE,
};
pub use transition::{PanelFrame, PanelTransition, TransitionState};
