use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::PanelCtx;
use crate::profile::ContactLink;
use crate::ui::interaction::{ClickAction, HitArea};
use crate::ui::layout::centered_width;
use crate::ui::theme::{ACCENT_100, DARK_200, DARK_300, TEXT_BODY};

const BOX_WIDTH: u16 = 60;
/// Box height with padding and a blank row between links.
const ROOMY_HEIGHT: u16 = 9;

pub(super) fn render(
    buf: &mut Buffer,
    ctx: &PanelCtx<'_>,
    links: &[ContactLink<'_>],
    hits: &mut Vec<HitArea>,
) {
    let roomy = ctx.body.height >= ROOMY_HEIGHT;
    let height = if roomy {
        ROOMY_HEIGHT
    } else {
        links.len() as u16 + 2
    };
    let outer = Rect {
        height: height.min(ctx.body.height),
        ..centered_width(ctx.body, BOX_WIDTH)
    };
    if outer.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DARK_300))
        .style(Style::default().bg(DARK_200));
    let mut inner = block.inner(outer);
    block.render(outer, buf);
    if roomy {
        inner = inner.inner(Margin::new(2, 1));
    }
    let step = if roomy { 2 } else { 1 };

    for (index, link) in links.iter().enumerate() {
        let settled = Rect {
            y: inner.y + index as u16 * step,
            height: 1,
            ..inner
        }
        .intersection(inner);
        if settled.is_empty() {
            continue;
        }
        let (rect, tint) = ctx.child_placement(index, settled);
        let focused = ctx.app.contact_cursor == index;
        let highlighted = focused || ctx.app.hit_registry.is_pointer_over(settled);
        let color = if highlighted { ACCENT_100 } else { TEXT_BODY };
        let mut text_style = Style::default().fg(color);
        if focused {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let marker = if focused { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, tint.style(Style::default().fg(ACCENT_100))),
            Span::styled(link.kind.glyph(), tint.style(Style::default().fg(ACCENT_100))),
            Span::raw("  "),
            Span::styled(link.display_text().to_string(), tint.style(text_style)),
        ]);
        if !rect.is_empty() {
            Paragraph::new(line).render(rect, buf);
        }

        hits.push(HitArea::new(settled, ClickAction::OpenContact(index)));
    }
}
