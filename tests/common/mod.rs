//! Common test utilities for integration tests.
//!
//! Provides an app builder wired to a recording link opener and helpers for
//! reading rendered `TestBackend` buffers.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, opener) = TestAppBuilder::new().without_animations().build();
//! let screen = render_app(&mut app, 100, 40);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use folio::app::App;
use folio::config::FolioConfig;
use folio::profile::ProfileRecord;
use folio::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Builds an [`App`] for tests.
pub struct TestAppBuilder {
    profile: ProfileRecord,
    config: FolioConfig,
    opener: RecordingLinkOpener,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            profile: ProfileRecord::sample(),
            config: FolioConfig::default().with_log_file(None),
            opener: RecordingLinkOpener::new(),
        }
    }

    pub fn with_profile(mut self, profile: ProfileRecord) -> Self {
        self.profile = profile;
        self
    }

    /// Every animation completes synchronously.
    pub fn without_animations(mut self) -> Self {
        self.config = self.config.with_animations(false);
        self
    }

    pub fn with_opener(mut self, opener: RecordingLinkOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn build(self) -> (App, RecordingLinkOpener) {
        let app = App::new(
            Arc::new(self.profile),
            &self.config,
            Box::new(self.opener.clone()),
        );
        (app, self.opener)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one frame of `app` on a `width` x `height` test terminal.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    app.update_terminal_dimensions(width, height);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rows inside a bordered `rect` (the border itself skipped), one line
/// per row.
pub fn inner_text(buffer: &Buffer, rect: Rect) -> String {
    let left = rect.left() + 1;
    let right = rect.right().saturating_sub(1);
    (rect.top() + 1..rect.bottom().saturating_sub(1))
        .map(|y| {
            (left..right)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whitespace-collapsed form of `text`.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All rows trimmed and joined with single spaces, so wrapped paragraphs
/// read as one line.
pub fn flattened_text(buffer: &Buffer) -> String {
    buffer_to_string(buffer)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `needles` all occur in `haystack` in the given order.
pub fn appear_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => return false,
        }
    }
    true
}
