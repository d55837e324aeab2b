/// Visual state at one end of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// 0.0 is invisible, 1.0 fully drawn.
    pub opacity: f32,
    /// Vertical displacement in rows; positive is downward.
    pub offset_y: i16,
}

impl Phase {
    pub const VISIBLE: Phase = Phase {
        opacity: 1.0,
        offset_y: 0,
    };

    pub const fn new(opacity: f32, offset_y: i16) -> Self {
        Self { opacity, offset_y }
    }

    fn lerp(from: Phase, to: Phase, t: f32) -> Phase {
        let opacity = from.opacity + (to.opacity - from.opacity) * t;
        let offset = from.offset_y as f32 + (to.offset_y - from.offset_y) as f32 * t;
        Phase {
            opacity: opacity.clamp(0.0, 1.0),
            offset_y: offset.round() as i16,
        }
    }
}

/// A named transition: where it starts, rests and leaves, and how long it takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub initial: Phase,
    pub active: Phase,
    pub exit: Phase,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl Preset {
    pub const fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Same preset with no duration or delay.
    pub const fn instant(mut self) -> Self {
        self.duration_ms = 0;
        self.delay_ms = 0;
        self
    }

    pub fn total_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }

    pub fn is_settled(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.total_ms()
    }

    /// Phase `elapsed_ms` into the enter animation (initial -> active).
    pub fn enter_at(&self, elapsed_ms: u64) -> Phase {
        Phase::lerp(self.initial, self.active, self.progress(elapsed_ms))
    }

    /// Phase `elapsed_ms` into the exit animation (active -> exit).
    pub fn exit_at(&self, elapsed_ms: u64) -> Phase {
        Phase::lerp(self.active, self.exit, self.progress(elapsed_ms))
    }

    fn progress(&self, elapsed_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return if elapsed_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        if elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        let t = ((elapsed_ms - self.delay_ms) as f32 / self.duration_ms as f32).min(1.0);
        ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Per-child delay for lists that enter one item after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u64,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> u64 {
        self.step_ms.saturating_mul(index as u64)
    }
}

/// Panel enter/exit.
pub const FADE_IN: Preset = Preset {
    initial: Phase::new(0.0, 2),
    active: Phase::VISIBLE,
    exit: Phase::new(0.0, -2),
    duration_ms: 500,
    delay_ms: 0,
};

/// Header sliding in from above on startup.
pub const HEADER_DROP: Preset = Preset {
    initial: Phase::new(0.0, -3),
    active: Phase::VISIBLE,
    exit: Phase::VISIBLE,
    duration_ms: 500,
    delay_ms: 0,
};

/// Profile title fading in after the name.
pub const TITLE_FADE: Preset = Preset {
    initial: Phase::new(0.0, 0),
    active: Phase::VISIBLE,
    exit: Phase::VISIBLE,
    duration_ms: 500,
    delay_ms: 200,
};

/// Child of a staggered list (skill tiles, project cards, contact links).
pub const LIST_ITEM: Preset = Preset {
    initial: Phase::new(0.0, 1),
    active: Phase::VISIBLE,
    exit: Phase::VISIBLE,
    duration_ms: 300,
    delay_ms: 0,
};

pub const LIST_STAGGER: Stagger = Stagger { step_ms: 100 };

/// Details of a hovered project card (title, description, tags, links).
pub const CARD_REVEAL: Preset = Preset {
    initial: Phase::new(0.0, 1),
    active: Phase::VISIBLE,
    exit: Phase::new(0.0, 0),
    duration_ms: 300,
    delay_ms: 0,
};

/// Delay between successive parts of a revealed card.
pub const CARD_REVEAL_STEP: Stagger = Stagger { step_ms: 100 };

/// Whether animations play; turns every preset instant when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    enabled: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Motion {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn apply(&self, preset: Preset) -> Preset {
        if self.enabled {
            preset
        } else {
            preset.instant()
        }
    }

    pub fn stagger(&self, stagger: Stagger) -> Stagger {
        if self.enabled {
            stagger
        } else {
            Stagger { step_ms: 0 }
        }
    }
}
