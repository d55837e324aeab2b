//! Footer: key hints on the left, status message on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, StatusKind};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{ACCENT_100, TEXT_DIM, TEXT_ERROR};
use crate::view_state::Section;

/// Key hints for the active section, shortest first when compact.
pub fn key_hints(section: Section, compact: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("1-4", "section")];
    if !compact {
        hints.push(("←/→", "switch"));
    }
    match section {
        Section::Projects => {
            hints.push(("j/k", "card"));
            hints.push(("enter", "live"));
            hints.push(("g", "code"));
        }
        Section::Contact => {
            hints.push(("j/k", "link"));
            hints.push(("enter", "open"));
        }
        _ => {}
    }
    hints.push(("q", "quit"));
    hints
}

pub fn render_footer(buf: &mut Buffer, area: Rect, app: &App, ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in key_hints(app.view.active_section(), ctx.is_compact()).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(ACCENT_100)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(TEXT_DIM)));
    }
    let hints = Line::from(spans);

    let Some(status) = &app.status else {
        Paragraph::new(hints).render(area, buf);
        return;
    };
    let color = match status.kind {
        StatusKind::Info => TEXT_DIM,
        StatusKind::Error => TEXT_ERROR,
    };
    let text = format!("{} ", status.text);
    // Status wins over hints when both don't fit
    let width = (text.width() as u16).min(area.width);
    let status_area = Rect {
        x: area.right() - width,
        width,
        ..area
    };
    let hints_area = Rect {
        width: area.width - width,
        ..area
    };
    Paragraph::new(hints).render(hints_area, buf);
    Paragraph::new(Line::styled(text, Style::default().fg(color)))
        .alignment(Alignment::Right)
        .render(status_area, buf);
}
