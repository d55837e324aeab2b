use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::PanelCtx;
use crate::ui::compose::Tint;
use crate::ui::interaction::{ClickAction, HitArea};
use crate::ui::layout::grid_cell;
use crate::ui::projection::SkillEntry;
use crate::ui::theme::{ACCENT_100, DARK_200, DARK_300, TEXT_BODY};

const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 2;

pub(super) fn render(
    buf: &mut Buffer,
    ctx: &PanelCtx<'_>,
    entries: &[SkillEntry<'_>],
    hits: &mut Vec<HitArea>,
) {
    let columns = ctx.layout.skill_columns();
    for (index, entry) in entries.iter().enumerate() {
        let settled =
            grid_cell(ctx.body, columns, TILE_GAP, TILE_HEIGHT, 0, index).intersection(ctx.body);
        if settled.is_empty() {
            continue;
        }
        let hovered = ctx.app.hit_registry.is_pointer_over(settled);
        let surface = if hovered { DARK_300 } else { DARK_200 };
        let (rect, tint) = ctx.child_placement(index, settled);
        render_tile(buf, rect, entry, surface, tint);

        hits.push(HitArea::new(settled, ClickAction::SkillTile(index)));
    }
}

fn render_tile(
    buf: &mut Buffer,
    rect: Rect,
    entry: &SkillEntry<'_>,
    surface: Color,
    tint: Tint,
) {
    if rect.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(tint.style(Style::default().fg(surface).bg(surface)))
        .style(tint.style(Style::default().bg(surface)));
    let inner = block.inner(rect);
    block.render(rect, buf);

    let line = Line::from(vec![
        Span::styled(entry.glyph, tint.style(Style::default().fg(ACCENT_100))),
        Span::raw(" "),
        Span::styled(entry.name.to_string(), tint.style(Style::default().fg(TEXT_BODY))),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
