//! Color theme constants for Folio UI
//!
//! Two fixed palettes: a dark background/surface ramp and an accent pair.

use ratatui::style::Color;

// ============================================================================
// Dark Palette
// ============================================================================

/// Page background
pub const DARK_100: Color = Color::Rgb(0x1a, 0x1b, 0x26);

/// Surface for tiles, cards and the contact box
pub const DARK_200: Color = Color::Rgb(0x24, 0x28, 0x3b);

/// Raised surface: hovered tiles, thumbnails, secondary buttons
pub const DARK_300: Color = Color::Rgb(0x41, 0x48, 0x68);

// ============================================================================
// Accent Palette
// ============================================================================

/// Primary accent: active tab, icons, title, tags
pub const ACCENT_100: Color = Color::Rgb(0x7a, 0xa2, 0xf7);

/// Secondary accent: hovered primary buttons
pub const ACCENT_200: Color = Color::Rgb(0xbb, 0x9a, 0xf7);

// ============================================================================
// Text
// ============================================================================

/// Headings and names
pub const TEXT_BRIGHT: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Body copy
pub const TEXT_BODY: Color = Color::Rgb(0xd1, 0xd5, 0xdb);

/// Secondary text and inactive tabs
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Status line errors
pub const TEXT_ERROR: Color = Color::Rgb(0xf7, 0x76, 0x8e);

/// Blend `color` toward `background` for an opacity in `0.0..=1.0`.
///
/// Non-RGB colors can't be blended and snap at the halfway point.
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    if opacity >= 1.0 {
        return color;
    }
    if opacity <= 0.0 {
        return background;
    }
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(r, br, opacity),
            mix(g, bg, opacity),
            mix(b, bb, opacity),
        ),
        (Color::Reset, _) => Color::Reset,
        _ if opacity >= 0.5 => color,
        _ => background,
    }
}

fn mix(fg: u8, bg: u8, opacity: f32) -> u8 {
    (bg as f32 + (fg as f32 - bg as f32) * opacity).round() as u8
}
