//! Section navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::app::App;
use crate::ui::components::{render_tab_selector, tab_offsets, TabItem};
use crate::ui::interaction::{ClickAction, HitArea};
use crate::ui::layout::{centered_width, LayoutContext};
use crate::ui::theme::DARK_300;
use crate::view_state::Section;

fn nav_items() -> Vec<TabItem<'static>> {
    Section::ALL.iter().map(|s| TabItem::new(s.label())).collect()
}

/// Draw the four section triggers and collect their hit areas.
pub fn render_nav(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    ctx: &LayoutContext,
    hits: &mut Vec<HitArea>,
) {
    if area.height == 0 {
        return;
    }
    let items = nav_items();
    let offsets = tab_offsets(&items, ctx);
    let total = offsets.last().map(|(x, w)| x + w).unwrap_or(0);
    let row = centered_width(Rect { height: 1, ..area }, total);

    let tab_rects: Vec<Rect> = offsets
        .iter()
        .map(|&(x, w)| Rect::new(row.x + x, row.y, w, 1).intersection(row))
        .collect();
    let hovered = tab_rects
        .iter()
        .position(|r| app.hit_registry.is_pointer_over(*r));

    let selected = app.view.active_section().index();
    Paragraph::new(render_tab_selector(&items, selected, hovered, ctx)).render(row, buf);

    for (section, rect) in Section::ALL.iter().zip(tab_rects) {
        if rect.is_empty() {
            continue;
        }
        if hovered == Some(section.index()) && section.index() != selected {
            buf.set_style(rect, Style::default().bg(DARK_300));
        }
        hits.push(HitArea::new(rect, ClickAction::SelectSection(*section)));
    }
}
