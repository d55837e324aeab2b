//! Responsive Layout System
//!
//! Provides a `LayoutContext` that encapsulates terminal dimensions and the
//! sizing decisions derived from them: content width, grid column counts
//! for the Skills and Projects panels, and the too-small cutoff.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Below this the UI shows a resize hint instead of the portfolio.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Widest the centred content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 110;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols)
    ExtraSmall,
    /// Small (< 80 cols)
    Small,
    /// Medium (< 120 cols)
    Medium,
    /// Large (>= 120 cols)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// assert_eq!(ctx.skill_columns(), 4);
/// assert_eq!(ctx.project_columns(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Get the width size category.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is in a "compact" state (narrow or short).
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    pub fn is_too_small(&self) -> bool {
        is_terminal_too_small(self.width, self.height)
    }

    /// Width of the centred content column.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(4).min(MAX_CONTENT_WIDTH)
    }

    /// Centre the content column inside `area`.
    pub fn content_rect(&self, area: Rect) -> Rect {
        centered_width(area, self.content_width())
    }

    /// Skill grid columns: 2, 3 or 4.
    pub fn skill_columns(&self) -> u16 {
        match self.width_category() {
            SizeCategory::ExtraSmall | SizeCategory::Small => 2,
            SizeCategory::Medium => 3,
            SizeCategory::Large => 4,
        }
    }

    /// Project grid columns: 1, 2 or 3.
    pub fn project_columns(&self) -> u16 {
        match self.width_category() {
            SizeCategory::ExtraSmall | SizeCategory::Small => 1,
            SizeCategory::Medium => 2,
            SizeCategory::Large => 3,
        }
    }

    /// Header height: avatar box plus spacing, smaller when compact.
    pub fn header_height(&self) -> u16 {
        if self.is_compact() {
            3
        } else {
            5
        }
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

/// Horizontally centre a column of `width` inside `area`.
pub fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Split `area` into `columns` equal cells per row with `gap` columns
/// between them, returning the rect of cell `index`.
///
/// Rows are `cell_height` tall with `row_gap` rows between them. The rect
/// may extend past the bottom of `area`; callers clip.
pub fn grid_cell(
    area: Rect,
    columns: u16,
    gap: u16,
    cell_height: u16,
    row_gap: u16,
    index: usize,
) -> Rect {
    let columns = columns.max(1);
    let total_gap = gap * (columns - 1);
    let cell_width = area.width.saturating_sub(total_gap) / columns;
    let col = (index % columns as usize) as u16;
    let row = (index / columns as usize) as u16;
    Rect {
        x: area.x + col * (cell_width + gap),
        y: area.y.saturating_add(row.saturating_mul(cell_height + row_gap)),
        width: cell_width,
        height: cell_height,
    }
}

// ============================================================================
// Tests
// ============================================================================
