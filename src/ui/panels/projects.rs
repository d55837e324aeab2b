//! Project cards: a thumbnail placeholder at rest, details when hovered.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::PanelCtx;
use crate::animation::{CARD_REVEAL, CARD_REVEAL_STEP};
use crate::ui::compose::{offset_rect, Tint};
use crate::ui::interaction::{ClickAction, HitArea};
use crate::ui::layout::grid_cell;
use crate::ui::projection::ProjectCard;
use crate::ui::theme::{
    ACCENT_100, ACCENT_200, DARK_100, DARK_200, DARK_300, TEXT_BODY, TEXT_BRIGHT, TEXT_DIM,
};

const CARD_GAP: u16 = 2;
const ROW_GAP: u16 = 1;
const MIN_CARD_HEIGHT: u16 = 6;
const MAX_CARD_HEIGHT: u16 = 10;

pub const LIVE_LABEL: &str = " ↗ Live Preview ";
pub const CODE_LABEL: &str = " ⌥ Code ";
const THUMBNAIL_FILL: &str = "░";

/// Card height that fits every row of the grid into `body` when possible.
fn card_height(body: Rect, rows: u16) -> u16 {
    let rows = rows.max(1);
    ((body.height + ROW_GAP) / rows)
        .saturating_sub(ROW_GAP)
        .clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT)
}

/// Greedy word wrap by display width. Words wider than `width` are broken.
fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.width() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split = split_at_width(word, width);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Byte index of the longest prefix of `word` at most `width` cells wide,
/// never less than one character.
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            return i;
        }
        used += w;
    }
    word.len()
}

fn tag_width(tag: &str) -> u16 {
    tag.width() as u16 + 2
}

/// Tags packed into rows of at most `width` cells, in order.
fn tag_rows<'t>(tags: &[&'t str], width: u16) -> Vec<Vec<&'t str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut used = 0u16;
    for &tag in tags {
        let w = tag_width(tag);
        match rows.last_mut() {
            Some(row) if used.saturating_add(1 + w) <= width => {
                row.push(tag);
                used += 1 + w;
            }
            _ => {
                rows.push(vec![tag]);
                used = w;
            }
        }
    }
    rows
}

/// Inner rows a revealed card needs at `width`: title, description, tag
/// rows and the button row.
fn revealed_rows(card: &ProjectCard<'_>, width: u16) -> u16 {
    let desc = wrap_words(card.description, width).len() as u16;
    let tags = tag_rows(&card.tags, width).len() as u16;
    1 + desc + tags + 1
}

/// `settled` grown to `height` rows, moved up if needed to stay in `body`.
fn grow_within(settled: Rect, height: u16, body: Rect) -> Rect {
    let height = height.max(settled.height).min(body.height);
    let y = settled.y.min(body.bottom().saturating_sub(height));
    Rect {
        y,
        height,
        ..settled
    }
}

pub(super) fn render(
    buf: &mut Buffer,
    ctx: &PanelCtx<'_>,
    cards: &[ProjectCard<'_>],
    hits: &mut Vec<HitArea>,
) {
    let columns = ctx.layout.project_columns();
    let rows = cards.len().div_ceil(columns as usize) as u16;
    let height = card_height(ctx.body, rows);

    // The revealed card grows over its neighbours, so it is drawn last
    let (revealed, resting): (Vec<_>, Vec<_>) = cards.iter().partition(|c| c.revealed);
    for card in resting.into_iter().chain(revealed) {
        let mut settled = grid_cell(ctx.body, columns, CARD_GAP, height, ROW_GAP, card.index)
            .intersection(ctx.body);
        if settled.is_empty() {
            continue;
        }
        if card.revealed {
            let needed = revealed_rows(card, settled.width.saturating_sub(2)) + 2;
            settled = grow_within(settled, needed, ctx.body);
        }
        let (rect, tint) = ctx.child_placement(card.index, settled);
        hits.push(HitArea::new(settled, ClickAction::ProjectCard(card.index)));
        if rect.is_empty() {
            continue;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(tint.style(Style::default().fg(if card.revealed {
                ACCENT_100
            } else {
                DARK_300
            })))
            .style(tint.style(Style::default().bg(DARK_200)));
        let inner = block.inner(rect);
        Clear.render(rect, buf);
        block.render(rect, buf);

        if card.revealed {
            render_details(buf, ctx, inner, card, tint, hits);
        } else {
            render_thumbnail(buf, inner, card, tint);
        }
    }
}

/// The image is never loaded; the placeholder names it instead.
fn render_thumbnail(buf: &mut Buffer, inner: Rect, card: &ProjectCard<'_>, tint: Tint) {
    if inner.is_empty() {
        return;
    }
    let fill = THUMBNAIL_FILL.repeat(inner.width as usize);
    let lines: Vec<Line> = (0..inner.height)
        .map(|_| Line::raw(fill.clone()))
        .collect();
    Paragraph::new(lines)
        .style(tint.style(Style::default().fg(DARK_300).bg(DARK_200)))
        .render(inner, buf);

    let label = format!(" ▣ {} ", card.image_name());
    let width = (label.width() as u16).min(inner.width);
    let middle = Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + inner.height / 2,
        width,
        height: 1,
    };
    Paragraph::new(label)
        .style(tint.style(Style::default().fg(TEXT_DIM).bg(DARK_200)))
        .render(middle, buf);
}

fn render_details(
    buf: &mut Buffer,
    ctx: &PanelCtx<'_>,
    inner: Rect,
    card: &ProjectCard<'_>,
    card_tint: Tint,
    hits: &mut Vec<HitArea>,
) {
    if inner.is_empty() {
        return;
    }
    let app = ctx.app;
    let elapsed = app.clock_ms.saturating_sub(app.hover_changed_ms);
    let preset = app.motion.apply(CARD_REVEAL);
    let step = app.motion.stagger(CARD_REVEAL_STEP);
    // Each revealed part is faded by its own phase on top of the card's
    let part = |index: usize| {
        let phase = preset.enter_at(elapsed.saturating_sub(step.delay_for(index)));
        (
            phase.offset_y,
            Tint::new(phase.opacity * card_tint.opacity, DARK_100),
        )
    };
    let row = |y: u16, height: u16| Rect {
        y: inner.y + y,
        height,
        ..inner
    };
    let tags = tag_rows(&card.tags, inner.width);
    let tag_height = (tags.len() as u16).min(inner.height.saturating_sub(2));
    let desc_height = inner.height.saturating_sub(2 + tag_height);

    let (dy, tint) = part(0);
    Paragraph::new(Line::styled(
        card.title.to_string(),
        tint.style(
            Style::default()
                .fg(TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        ),
    ))
    .render(offset_rect(row(0, 1), dy, inner), buf);

    if desc_height > 0 {
        let (dy, tint) = part(1);
        let lines: Vec<Line> = wrap_words(card.description, inner.width)
            .into_iter()
            .map(Line::raw)
            .collect();
        Paragraph::new(lines)
            .style(tint.style(Style::default().fg(TEXT_BODY)))
            .render(offset_rect(row(1, desc_height), dy, inner), buf);
    }

    if tag_height > 0 {
        let (dy, tint) = part(2);
        let top = inner.height - 1 - tag_height;
        let lines: Vec<Line> = tags
            .iter()
            .map(|tags| {
                let mut spans = Vec::new();
                for (i, tag) in tags.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::styled(
                        format!(" {} ", tag),
                        tint.style(Style::default().fg(ACCENT_100).bg(DARK_300)),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(offset_rect(row(top, tag_height), dy, inner), buf);
    }

    if inner.height >= 2 {
        let (dy, tint) = part(3);
        let buttons = row(inner.height - 1, 1);
        let live = button_rect(buttons, 0, LIVE_LABEL);
        let code = button_rect(buttons, live.width + 2, CODE_LABEL);

        let registry = &app.hit_registry;
        let live_bg = if registry.is_pointer_over(live) {
            ACCENT_200
        } else {
            ACCENT_100
        };
        let code_bg = if registry.is_pointer_over(code) {
            ACCENT_100
        } else {
            DARK_300
        };
        draw_button(
            buf,
            offset_rect(live, dy, inner),
            LIVE_LABEL,
            tint.style(Style::default().fg(DARK_100).bg(live_bg)),
        );
        draw_button(
            buf,
            offset_rect(code, dy, inner),
            CODE_LABEL,
            tint.style(Style::default().fg(TEXT_BRIGHT).bg(code_bg)),
        );

        if !live.is_empty() {
            hits.push(HitArea::new(live, ClickAction::OpenProjectLive(card.index)));
        }
        if !code.is_empty() {
            hits.push(HitArea::new(code, ClickAction::OpenProjectCode(card.index)));
        }
    }
}

/// Rect of a button starting `x` columns into `row`, clipped to it.
fn button_rect(row: Rect, x: u16, label: &str) -> Rect {
    let x = x.min(row.width);
    let width = (label.width() as u16).min(row.width - x);
    Rect {
        x: row.x + x,
        width,
        ..row
    }
}

fn draw_button(buf: &mut Buffer, rect: Rect, label: &str, style: Style) {
    if rect.is_empty() {
        return;
    }
    Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Left)
        .render(rect, buf);
}
