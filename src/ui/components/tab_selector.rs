//! Tab Selector Component
//!
//! A horizontal tab selector. Uses a `▶` marker for the selected item with
//! responsive spacing, and reports where each tab lands so callers can
//! register hit areas.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{ACCENT_100, ACCENT_200, TEXT_BRIGHT, TEXT_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

const MARKER: &str = "▶ ";
const MARKER_BLANK: &str = "  ";

/// Gap between tabs. Labels are never shortened, so narrow terminals
/// squeeze the gaps instead.
fn spacing(ctx: &LayoutContext) -> &'static str {
    if ctx.is_extra_small() {
        " "
    } else if ctx.is_compact() {
        "  "
    } else {
        "    "
    }
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `hovered` - Index of the tab under the pointer, if any
/// * `ctx` - Layout context for responsive sizing
///
/// # Example
/// ```ignore
/// let items = vec![TabItem::new("About"), TabItem::new("Skills")];
/// let line = render_tab_selector(&items, 0, None, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    hovered: Option<usize>,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = item.label;

        if idx == selected {
            let marker_style = Style::default()
                .fg(ACCENT_100)
                .add_modifier(Modifier::BOLD);
            let text_style = Style::default()
                .fg(TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD);
            spans.push(Span::styled(MARKER, marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = if hovered == Some(idx) {
                Style::default().fg(ACCENT_200)
            } else {
                Style::default().fg(TEXT_DIM)
            };
            spans.push(Span::styled(MARKER_BLANK, text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        // Add spacing between tabs (except after last)
        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing(ctx)));
        }
    }

    Line::from(spans)
}

/// Column offset and width of each tab (marker included) within the line
/// produced by [`render_tab_selector`].
pub fn tab_offsets(items: &[TabItem<'_>], ctx: &LayoutContext) -> Vec<(u16, u16)> {
    let marker = MARKER.width() as u16;
    let gap = spacing(ctx).width() as u16;
    let mut x = 0u16;
    items
        .iter()
        .map(|item| {
            let width = marker + item.label.width() as u16;
            let offset = (x, width);
            x += width + gap;
            offset
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
