//! Profile header: avatar placeholder, name and title.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::animation::{HEADER_DROP, TITLE_FADE};
use crate::app::App;
use crate::ui::compose::{render_with_phase, Tint};
use crate::ui::layout::{centered_width, LayoutContext};
use crate::ui::theme::{ACCENT_100, DARK_100, DARK_200, TEXT_BRIGHT};

const AVATAR_WIDTH: u16 = 11;
const AVATAR_GAP: u16 = 3;

/// Up to two initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn render_header(buf: &mut Buffer, area: Rect, app: &App, ctx: &LayoutContext) {
    let drop = app.motion.apply(HEADER_DROP).enter_at(app.clock_ms);
    let title_phase = app.motion.apply(TITLE_FADE).enter_at(app.clock_ms);
    let profile = &app.profile;

    render_with_phase(buf, area, drop, DARK_100, |scratch| {
        let name_style = Style::default()
            .fg(TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD);
        let title_style = Tint::new(title_phase.opacity, DARK_100).style(Style::default().fg(ACCENT_100));

        if ctx.is_compact() {
            let lines = vec![
                Line::styled(profile.name.clone(), name_style),
                Line::styled(profile.title.clone(), title_style),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(area, scratch);
            return;
        }

        let text_width = profile.name.width().max(profile.title.width()) as u16;
        let group = centered_width(area, AVATAR_WIDTH + AVATAR_GAP + text_width);
        let [avatar, _, text] = Layout::horizontal([
            Constraint::Length(AVATAR_WIDTH),
            Constraint::Length(AVATAR_GAP),
            Constraint::Min(0),
        ])
        .areas(group);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT_100))
            .style(Style::default().bg(DARK_200));
        let inner = block.inner(avatar);
        block.render(avatar, scratch);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(initials(&profile.name))
            .style(name_style)
            .alignment(Alignment::Center)
            .render(middle, scratch);

        let lines = vec![
            Line::raw(""),
            Line::styled(profile.name.clone(), name_style),
            Line::raw(""),
            Line::styled(profile.title.clone(), title_style),
        ];
        Paragraph::new(lines).render(text, scratch);
    });
}
