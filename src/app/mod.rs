//! Application state and logic for the TUI.
//!
//! This module contains the root [`App`] struct. It owns the immutable
//! profile, the single [`ViewState`], the animation clock and transition,
//! the hit-area registry and the link opener, and exposes the operations
//! input handlers call.

mod clock;
mod handlers;
mod links;
mod status;

pub use clock::FrameClock;
pub use status::{StatusKind, StatusMessage};

use std::sync::Arc;

use crate::animation::{
    Motion, PanelTransition, CARD_REVEAL, CARD_REVEAL_STEP, FADE_IN, HEADER_DROP, LIST_ITEM,
    LIST_STAGGER, TITLE_FADE,
};
use crate::config::FolioConfig;
use crate::profile::ProfileRecord;
use crate::traits::LinkOpener;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::projection::project_section;
use crate::view_state::{Section, ViewState};

/// Number of links on the Contact panel.
pub const CONTACT_LINK_COUNT: usize = 3;

/// Number of revealed parts on a hovered card (title, description, tags, links).
pub const CARD_REVEAL_PARTS: usize = 4;

/// Root of the application: everything the event loop and renderers touch.
pub struct App {
    /// The portfolio being shown; never mutated.
    pub profile: Arc<ProfileRecord>,
    /// Active section and hovered project card.
    pub view: ViewState,
    pub motion: Motion,
    /// Which panel is drawn and how far its enter/exit has progressed.
    pub transition: PanelTransition,
    /// Clickable regions from the last frame.
    pub hit_registry: HitAreaRegistry,
    /// Animation clock, advanced by `tick_ms` per tick.
    pub clock_ms: u64,
    pub tick_ms: u64,
    /// Clock value when the hovered card last changed.
    pub hover_changed_ms: u64,
    /// Highlighted row of the Contact panel for keyboard use.
    pub contact_cursor: usize,
    pub status: Option<StatusMessage>,
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    opener: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(profile: Arc<ProfileRecord>, config: &FolioConfig, opener: Box<dyn LinkOpener>) -> Self {
        let motion = Motion::new(config.animations);
        let view = ViewState::new();
        let transition = PanelTransition::new(view.active_section(), motion.apply(FADE_IN), 0);
        Self {
            profile,
            view,
            motion,
            transition,
            hit_registry: HitAreaRegistry::new(),
            clock_ms: 0,
            tick_ms: config.tick_ms,
            hover_changed_ms: 0,
            contact_cursor: 0,
            status: None,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            opener,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Advance the animation clock by one tick.
    pub fn tick(&mut self) {
        self.advance_clock(self.tick_ms);
    }

    /// Advance the animation clock by `ms`.
    pub fn advance_clock(&mut self, ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(ms);
        if self.transition.advance(self.clock_ms) {
            self.mark_dirty();
        }
        if let Some(status) = &self.status {
            if status.is_expired(self.clock_ms) {
                self.status = None;
                self.mark_dirty();
            }
        }
        if self.is_animating() {
            self.mark_dirty();
        }
    }

    /// Whether any animation is still in flight at the current clock.
    pub fn is_animating(&self) -> bool {
        if self.transition.is_animating() {
            return true;
        }
        let header = self.motion.apply(HEADER_DROP).total_ms();
        let title = self.motion.apply(TITLE_FADE).total_ms();
        if self.clock_ms < header.max(title) {
            return true;
        }
        let frame = self.transition.frame(self.clock_ms);
        if let Some(elapsed) = frame.enter_elapsed_ms {
            if elapsed < self.children_settle_ms(frame.section) {
                return true;
            }
        }
        if self.view.hovered_project().is_some() {
            let reveal = self.motion.apply(CARD_REVEAL).total_ms()
                + self
                    .motion
                    .stagger(CARD_REVEAL_STEP)
                    .delay_for(CARD_REVEAL_PARTS - 1);
            if self.clock_ms.saturating_sub(self.hover_changed_ms) < reveal {
                return true;
            }
        }
        false
    }

    /// Time after a panel starts entering until its last child has settled.
    pub fn children_settle_ms(&self, section: Section) -> u64 {
        let count = project_section(&self.profile, &self.view, section).item_count();
        if count == 0 {
            return 0;
        }
        self.motion.stagger(LIST_STAGGER).delay_for(count - 1) + self.motion.apply(LIST_ITEM).total_ms()
    }

    // ========================================================================
    // Section selection
    // ========================================================================

    /// Make `section` the active panel. Reselecting the active one only
    /// triggers a redraw.
    pub fn select_section(&mut self, section: Section) {
        let hovered_before = self.view.hovered_project();
        self.view.select_section(section);
        if self.view.hovered_project() != hovered_before {
            self.hover_changed_ms = self.clock_ms;
        }
        self.transition.retarget(section, self.clock_ms);
        self.mark_dirty();
    }

    pub fn next_section(&mut self) {
        self.select_section(self.view.active_section().next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.view.active_section().prev());
    }

    // ========================================================================
    // Project hover
    // ========================================================================

    /// Pointer entered project card `index`.
    pub fn hover_start(&mut self, index: usize) -> bool {
        let before = self.view.hovered_project();
        let accepted = self.view.hover_start(index, self.profile.projects.len());
        self.note_hover_change(before);
        accepted
    }

    /// Pointer left project card `index`.
    pub fn hover_end(&mut self, index: usize) {
        let before = self.view.hovered_project();
        self.view.hover_end(index);
        self.note_hover_change(before);
    }

    /// The pointer is now over `card` (or over no card).
    ///
    /// Translates pointer movement into hover-end for the card that was
    /// left and hover-start for the card that was entered.
    pub fn pointer_over_card(&mut self, card: Option<usize>) {
        if self.view.active_section() != Section::Projects {
            return;
        }
        let current = self.view.hovered_project();
        if current == card {
            return;
        }
        if let Some(old) = current {
            self.hover_end(old);
        }
        if let Some(new) = card {
            self.hover_start(new);
        }
    }

    /// Keyboard focus to the next card (the touch/keyboard stand-in for hover).
    pub fn focus_next_card(&mut self) {
        let count = self.profile.projects.len();
        if count == 0 {
            return;
        }
        let next = match self.view.hovered_project() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.pointer_over_card(Some(next));
    }

    pub fn focus_prev_card(&mut self) {
        let count = self.profile.projects.len();
        if count == 0 {
            return;
        }
        let prev = match self.view.hovered_project() {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.pointer_over_card(Some(prev));
    }

    fn note_hover_change(&mut self, before: Option<usize>) {
        if self.view.hovered_project() != before {
            tracing::debug!(from = ?before, to = ?self.view.hovered_project(), "Project hover changed");
            self.hover_changed_ms = self.clock_ms;
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Contact cursor
    // ========================================================================

    pub fn contact_cursor_down(&mut self) {
        self.contact_cursor = (self.contact_cursor + 1) % CONTACT_LINK_COUNT;
        self.mark_dirty();
    }

    pub fn contact_cursor_up(&mut self) {
        self.contact_cursor = (self.contact_cursor + CONTACT_LINK_COUNT - 1) % CONTACT_LINK_COUNT;
        self.mark_dirty();
    }
}
