//! UI rendering for Folio
//!
//! One screen, top to bottom:
//! - Header with avatar placeholder, name and title
//! - Section navigation
//! - The active panel (About, Skills, Projects or Contact)
//! - Footer with key hints and the status line
//!
//! ## Responsive Layout System
//!
//! Sizing decisions go through [`LayoutContext`]: grid column counts,
//! header height and short labels all follow its breakpoints.

pub mod components;
pub mod compose;
mod footer;
mod header;
pub mod interaction;
pub mod layout;
mod nav;
pub mod panels;
pub mod projection;
pub mod theme;

pub use footer::key_hints;
pub use header::initials;
pub use interaction::{handle_click_action, ClickAction, HitArea, HitAreaRegistry};
pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use projection::{project, project_section, PanelContent, ProjectCard, SkillEntry};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};

use crate::app::App;
use layout::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use theme::{DARK_100, TEXT_BODY, TEXT_DIM};

/// Rows taken by the navigation bar and the gap below it.
const NAV_ROWS: u16 = 2;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen and rebuild the hit-area registry.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    render_to_buffer(frame.buffer_mut(), area, app);
}

/// Render into `buf` over `area`. Separate from [`render`] so benches and
/// tests can drive it without a terminal.
pub fn render_to_buffer(buf: &mut Buffer, area: Rect, app: &mut App) {
    app.hit_registry.clear();
    buf.set_style(area, Style::default().bg(DARK_100).fg(TEXT_BODY));

    let ctx = LayoutContext::from_rect(area);
    if ctx.is_too_small() {
        render_too_small(buf, area);
        return;
    }

    let [header, _, nav, panel, footer] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Length(1),
        Constraint::Length(NAV_ROWS),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut hits = Vec::new();
    header::render_header(buf, header, app, &ctx);
    nav::render_nav(buf, nav, app, &ctx, &mut hits);
    let panel_frame = app.transition.frame(app.clock_ms);
    panels::render_panel(buf, panel, app, &ctx, panel_frame, &mut hits);
    footer::render_footer(buf, footer, app, &ctx);

    for hit in hits {
        app.hit_registry.register_area(hit);
    }
    app.needs_redraw = false;
}

fn render_too_small(buf: &mut Buffer, area: Rect) {
    let lines = vec![
        Line::raw("Terminal too small"),
        Line::styled(
            format!("Need at least {}x{}", MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT),
            Style::default().fg(TEXT_DIM),
        ),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    let message = Rect {
        y,
        height: area.height.min(2),
        ..area
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(message, buf);
}
