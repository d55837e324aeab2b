//! Drawing animated regions.
//!
//! A region is drawn into a scratch buffer first and then copied into the
//! frame with its [`Phase`] applied: rows shift by `offset_y` (clipped to
//! the region) and colours blend toward the background by `opacity`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::animation::Phase;
use crate::ui::theme::fade;

/// Draw into a scratch buffer covering `area`, then compose it into `buf`.
///
/// The scratch buffer is pre-filled with `background`.
pub fn render_with_phase<F>(buf: &mut Buffer, area: Rect, phase: Phase, background: Color, draw: F)
where
    F: FnOnce(&mut Buffer),
{
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let mut scratch = Buffer::empty(area);
    scratch.set_style(area, Style::default().bg(background));
    draw(&mut scratch);
    compose(buf, &scratch, area, phase, background);
}

/// Copy `scratch` into `buf` over `area`, shifted and faded by `phase`.
///
/// Rows shifted in from outside `area` are blank background.
pub fn compose(buf: &mut Buffer, scratch: &Buffer, area: Rect, phase: Phase, background: Color) {
    let opacity = phase.opacity.clamp(0.0, 1.0);
    for y in area.top()..area.bottom() {
        let source_y = y as i32 - phase.offset_y as i32;
        let inside = source_y >= area.top() as i32 && source_y < area.bottom() as i32;
        for x in area.left()..area.right() {
            let source = if inside {
                scratch.cell((x, source_y as u16)).cloned()
            } else {
                None
            };
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            match source {
                Some(source) => {
                    *cell = source;
                    let fg = fade(cell.fg, background, opacity);
                    let bg = fade(cell.bg, background, opacity);
                    cell.set_fg(fg).set_bg(bg);
                }
                None => {
                    cell.reset();
                    cell.set_bg(background);
                }
            }
        }
    }
}

/// Colour helper for children drawn at their own opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub opacity: f32,
    pub background: Color,
}

impl Tint {
    pub fn new(opacity: f32, background: Color) -> Self {
        Self {
            opacity,
            background,
        }
    }

    pub fn color(&self, color: Color) -> Color {
        fade(color, self.background, self.opacity)
    }

    /// Apply to both colours of a style, leaving modifiers alone.
    pub fn style(&self, style: Style) -> Style {
        let mut out = style;
        if let Some(fg) = style.fg {
            out = out.fg(self.color(fg));
        }
        if let Some(bg) = style.bg {
            out = out.bg(self.color(bg));
        }
        out
    }
}

/// Move `rect` down by `dy` rows (up when negative), clipped to `bounds`.
pub fn offset_rect(rect: Rect, dy: i16, bounds: Rect) -> Rect {
    let y = (rect.y as i32 + dy as i32).max(0) as u16;
    Rect { y, ..rect }.intersection(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{ACCENT_100, DARK_100};
    use ratatui::widgets::{Paragraph, Widget};

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_visible_phase_is_a_plain_copy() {
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        render_with_phase(&mut buf, area, Phase::VISIBLE, DARK_100, |scratch| {
            Paragraph::new("hello")
                .style(Style::default().fg(ACCENT_100))
                .render(area, scratch);
        });
        assert_eq!(row(&buf, 0), "hello");
        assert_eq!(buf[(0, 0)].fg, ACCENT_100);
        assert_eq!(buf[(0, 1)].bg, DARK_100);
    }

    #[test]
    fn test_offset_shifts_rows_and_clips() {
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        render_with_phase(&mut buf, area, Phase::new(1.0, 1), DARK_100, |scratch| {
            Paragraph::new("aaa\nbbb\nccc").render(area, scratch);
        });
        assert_eq!(row(&buf, 0), "   ");
        assert_eq!(row(&buf, 1), "aaa");
        assert_eq!(row(&buf, 2), "bbb");
    }

    #[test]
    fn test_negative_offset_shifts_up() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_with_phase(&mut buf, area, Phase::new(1.0, -1), DARK_100, |scratch| {
            Paragraph::new("aaa\nbbb").render(area, scratch);
        });
        assert_eq!(row(&buf, 0), "bbb");
        assert_eq!(row(&buf, 1), "   ");
    }

    #[test]
    fn test_zero_opacity_leaves_background() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        render_with_phase(&mut buf, area, Phase::new(0.0, 0), DARK_100, |scratch| {
            Paragraph::new("hi")
                .style(Style::default().fg(ACCENT_100))
                .render(area, scratch);
        });
        assert_eq!(buf[(0, 0)].fg, DARK_100);
    }

    #[test]
    fn test_tint_style() {
        let tint = Tint::new(0.0, DARK_100);
        let style = tint.style(Style::default().fg(ACCENT_100));
        assert_eq!(style.fg, Some(DARK_100));
        assert_eq!(style.bg, None);
        assert_eq!(Tint::new(1.0, DARK_100).color(ACCENT_100), ACCENT_100);
    }

    #[test]
    fn test_offset_rect_clips() {
        let bounds = Rect::new(0, 0, 10, 5);
        assert_eq!(offset_rect(Rect::new(0, 4, 10, 1), 1, bounds).height, 0);
        assert_eq!(offset_rect(Rect::new(0, 2, 10, 1), 1, bounds).y, 3);
    }
}
