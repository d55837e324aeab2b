use ratatui::{
    buffer::Buffer,
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use super::PanelCtx;
use crate::ui::layout::centered_width;
use crate::ui::theme::TEXT_BODY;

/// Readable line length for the bio.
const MAX_BIO_WIDTH: u16 = 80;

pub(super) fn render(buf: &mut Buffer, ctx: &PanelCtx<'_>, bio: &str) {
    let settled = centered_width(ctx.body, MAX_BIO_WIDTH);
    let (rect, tint) = ctx.child_placement(0, settled);
    if rect.is_empty() {
        return;
    }
    Paragraph::new(bio.to_string())
        .style(tint.style(Style::default().fg(TEXT_BODY)))
        .wrap(Wrap { trim: true })
        .render(rect, buf);
}
