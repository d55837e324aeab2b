//! Footer status line messages.

/// How long a status message stays in the footer.
pub const STATUS_TTL_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A transient message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// App clock value when the message was posted.
    pub posted_ms: u64,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
            posted_ms: now_ms,
        }
    }

    pub fn error(text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
            posted_ms: now_ms,
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.posted_ms) >= STATUS_TTL_MS
    }
}
