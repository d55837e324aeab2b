//! Section panels.
//!
//! Exactly one panel is drawn per frame: the one [`PanelFrame`] names. The
//! whole panel is composed with the panel phase (fade and row offset);
//! children such as skill tiles or contact links additionally enter one
//! after another.

mod about;
mod contact;
mod projects;
mod skills;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::animation::{PanelFrame, Phase, LIST_ITEM, LIST_STAGGER};
use crate::app::App;
use crate::ui::compose::{offset_rect, render_with_phase, Tint};
use crate::ui::interaction::HitArea;
use crate::ui::layout::LayoutContext;
use crate::ui::projection::{project_section, PanelContent};
use crate::ui::theme::{ACCENT_100, DARK_100, TEXT_BRIGHT};

/// Rows taken by the heading and the gap below it.
const HEADING_ROWS: u16 = 2;

/// Everything a panel body renderer needs.
pub(crate) struct PanelCtx<'a> {
    pub app: &'a App,
    pub layout: &'a LayoutContext,
    /// Body area below the heading.
    pub body: Rect,
    enter_elapsed_ms: Option<u64>,
}

impl PanelCtx<'_> {
    /// Phase of staggered child `index`.
    pub fn child_phase(&self, index: usize) -> Phase {
        match self.enter_elapsed_ms {
            Some(elapsed) => {
                let delay = self.app.motion.stagger(LIST_STAGGER).delay_for(index);
                self.app
                    .motion
                    .apply(LIST_ITEM)
                    .enter_at(elapsed.saturating_sub(delay))
            }
            None => Phase::VISIBLE,
        }
    }

    /// Where child `index` is drawn this frame, and its tint.
    pub fn child_placement(&self, index: usize, settled: Rect) -> (Rect, Tint) {
        let phase = self.child_phase(index);
        (
            offset_rect(settled, phase.offset_y, self.body),
            Tint::new(phase.opacity, DARK_100),
        )
    }
}

/// Draw the panel `frame` names and collect its hit areas.
///
/// A panel that is leaving registers nothing.
pub fn render_panel(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    layout: &LayoutContext,
    frame: PanelFrame,
    hits: &mut Vec<HitArea>,
) {
    let column = layout.content_rect(area);
    if column.is_empty() {
        return;
    }
    let content = project_section(&app.profile, &app.view, frame.section);
    let body = Rect {
        y: column.y + HEADING_ROWS.min(column.height),
        height: column.height.saturating_sub(HEADING_ROWS),
        ..column
    };
    let ctx = PanelCtx {
        app,
        layout,
        body,
        enter_elapsed_ms: frame.enter_elapsed_ms,
    };
    let mut panel_hits = Vec::new();

    render_with_phase(buf, area, frame.phase, DARK_100, |scratch| {
        render_heading(scratch, column, content.heading());
        match &content {
            PanelContent::About { bio, .. } => about::render(scratch, &ctx, bio),
            PanelContent::Skills { entries, .. } => {
                skills::render(scratch, &ctx, entries, &mut panel_hits)
            }
            PanelContent::Projects { cards, .. } => {
                projects::render(scratch, &ctx, cards, &mut panel_hits)
            }
            PanelContent::Contact { links, .. } => {
                contact::render(scratch, &ctx, links, &mut panel_hits)
            }
        }
    });

    if frame.enter_elapsed_ms.is_none() {
        return;
    }
    hits.extend(
        panel_hits
            .iter()
            .filter_map(|hit| hit.shifted(frame.phase.offset_y, area)),
    );
}

fn render_heading(buf: &mut Buffer, column: Rect, heading: &str) {
    if column.height == 0 {
        return;
    }
    let lines = vec![Line::styled(
        heading.to_string(),
        Style::default()
            .fg(TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD),
    )];
    let row = Rect {
        height: 1,
        ..column
    };
    Paragraph::new(lines).render(row, buf);
    if column.height > 1 {
        let rule = "─".repeat(heading.chars().count());
        Paragraph::new(Line::styled(rule, Style::default().fg(ACCENT_100)))
            .alignment(Alignment::Left)
            .render(Rect { y: column.y + 1, height: 1, ..column }, buf);
    }
}
