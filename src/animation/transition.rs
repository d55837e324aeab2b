//! Exit-before-enter sequencing of panel switches.

use super::preset::{Phase, Preset};
use crate::view_state::Section;

/// Where a panel switch currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// `section` is fully on screen; it started entering at `entered_ms`.
    Shown { section: Section, entered_ms: u64 },
    /// `from` is leaving; `to` enters once it is gone.
    Exiting {
        from: Section,
        to: Section,
        started_ms: u64,
    },
    /// `section` is coming in.
    Entering { section: Section, started_ms: u64 },
}

/// What the renderer should draw for the panel area this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub section: Section,
    pub phase: Phase,
    /// Time since the panel started entering, or `None` while it is
    /// leaving. Drives staggered children, which may still be coming in
    /// after the panel itself has settled.
    pub enter_elapsed_ms: Option<u64>,
}

/// Drives panel switches so only one panel is ever drawn.
#[derive(Debug, Clone)]
pub struct PanelTransition {
    state: TransitionState,
    preset: Preset,
}

impl PanelTransition {
    /// Start with `section` entering at `now_ms`.
    pub fn new(section: Section, preset: Preset, now_ms: u64) -> Self {
        let mut transition = Self {
            state: TransitionState::Entering {
                section,
                started_ms: now_ms,
            },
            preset,
        };
        transition.advance(now_ms);
        transition
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// The section that will be shown once the transition settles.
    pub fn target(&self) -> Section {
        match self.state {
            TransitionState::Shown { section, .. } => section,
            TransitionState::Exiting { to, .. } => to,
            TransitionState::Entering { section, .. } => section,
        }
    }

    /// The single section currently drawn.
    pub fn visible_section(&self) -> Section {
        match self.state {
            TransitionState::Shown { section, .. } => section,
            TransitionState::Exiting { from, .. } => from,
            TransitionState::Entering { section, .. } => section,
        }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.state, TransitionState::Shown { .. })
    }

    /// Head toward `to`.
    ///
    /// An exit already in flight keeps running and only changes where it
    /// lands. A panel that is entering starts exiting from where it is.
    pub fn retarget(&mut self, to: Section, now_ms: u64) {
        self.state = match self.state {
            TransitionState::Shown { section, .. } if section == to => return,
            TransitionState::Shown { section, .. } => TransitionState::Exiting {
                from: section,
                to,
                started_ms: now_ms,
            },
            TransitionState::Exiting {
                from, started_ms, ..
            } => TransitionState::Exiting {
                from,
                to,
                started_ms,
            },
            TransitionState::Entering { section, .. } if section == to => return,
            TransitionState::Entering { section, .. } => TransitionState::Exiting {
                from: section,
                to,
                started_ms: now_ms,
            },
        };
        tracing::debug!(state = ?self.state, "Panel transition retargeted");
        self.advance(now_ms);
    }

    /// Move through finished phases. Returns true if the state changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let before = self.state;
        loop {
            let next = match self.state {
                TransitionState::Exiting {
                    to, started_ms, ..
                } if self.preset.is_settled(now_ms.saturating_sub(started_ms)) => {
                    TransitionState::Entering {
                        section: to,
                        started_ms: started_ms + self.preset.total_ms(),
                    }
                }
                TransitionState::Entering {
                    section,
                    started_ms,
                } if self.preset.is_settled(now_ms.saturating_sub(started_ms)) => {
                    TransitionState::Shown {
                        section,
                        entered_ms: started_ms,
                    }
                }
                _ => break,
            };
            self.state = next;
        }
        self.state != before
    }

    /// Sample the transition at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> PanelFrame {
        match self.state {
            TransitionState::Shown {
                section,
                entered_ms,
            } => PanelFrame {
                section,
                phase: self.preset.active,
                enter_elapsed_ms: Some(now_ms.saturating_sub(entered_ms)),
            },
            TransitionState::Exiting {
                from, started_ms, ..
            } => PanelFrame {
                section: from,
                phase: self.preset.exit_at(now_ms.saturating_sub(started_ms)),
                enter_elapsed_ms: None,
            },
            TransitionState::Entering {
                section,
                started_ms,
            } => {
                let elapsed = now_ms.saturating_sub(started_ms);
                PanelFrame {
                    section,
                    phase: self.preset.enter_at(elapsed),
                    enter_elapsed_ms: Some(elapsed),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FADE_IN;

    #[test]
    fn test_initial_panel_enters_then_settles() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        assert!(t.is_animating());
        assert_eq!(t.visible_section(), Section::About);
        assert!(t.advance(500));
        assert_eq!(
            t.state(),
            TransitionState::Shown {
                section: Section::About,
                entered_ms: 0
            }
        );
    }

    #[test]
    fn test_exit_before_enter() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        t.advance(500);
        t.retarget(Section::Skills, 1000);
        assert_eq!(t.visible_section(), Section::About);
        assert_eq!(t.target(), Section::Skills);

        t.advance(1499);
        assert_eq!(t.visible_section(), Section::About);

        t.advance(1500);
        assert_eq!(
            t.state(),
            TransitionState::Entering {
                section: Section::Skills,
                started_ms: 1500
            }
        );
        t.advance(2000);
        assert_eq!(
            t.state(),
            TransitionState::Shown {
                section: Section::Skills,
                entered_ms: 1500
            }
        );
    }

    #[test]
    fn test_retarget_during_exit_keeps_exit_running() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        t.advance(500);
        t.retarget(Section::Skills, 1000);
        t.retarget(Section::Contact, 1200);
        assert_eq!(
            t.state(),
            TransitionState::Exiting {
                from: Section::About,
                to: Section::Contact,
                started_ms: 1000
            }
        );
        t.advance(2000);
        assert_eq!(t.target(), Section::Contact);
        assert!(!t.is_animating());
    }

    #[test]
    fn test_retarget_during_enter_exits_entering_panel() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        t.retarget(Section::Projects, 100);
        assert_eq!(
            t.state(),
            TransitionState::Exiting {
                from: Section::About,
                to: Section::Projects,
                started_ms: 100
            }
        );
    }

    #[test]
    fn test_retarget_same_section_is_noop() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        t.advance(500);
        t.retarget(Section::About, 600);
        assert!(!t.is_animating());
    }

    #[test]
    fn test_instant_preset_switches_synchronously() {
        let mut t = PanelTransition::new(Section::About, FADE_IN.instant(), 0);
        assert!(!t.is_animating());
        t.retarget(Section::Contact, 10);
        assert_eq!(
            t.state(),
            TransitionState::Shown {
                section: Section::Contact,
                entered_ms: 10
            }
        );
    }

    #[test]
    fn test_frame_phases() {
        let mut t = PanelTransition::new(Section::About, FADE_IN, 0);
        let frame = t.frame(0);
        assert_eq!(frame.phase, FADE_IN.initial);
        assert_eq!(frame.enter_elapsed_ms, Some(0));

        t.advance(500);
        assert_eq!(t.frame(500).phase, FADE_IN.active);
        assert_eq!(t.frame(700).enter_elapsed_ms, Some(700));

        t.retarget(Section::Skills, 600);
        let exiting = t.frame(1100);
        assert_eq!(exiting.section, Section::About);
        assert_eq!(exiting.phase, FADE_IN.exit);
    }
}
