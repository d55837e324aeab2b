//! Hit area system for pointer interactions.
//!
//! This module provides a registry-based approach to handling clickable regions
//! in the TUI. Components register hit areas during rendering, and the event
//! loop queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;

use crate::view_state::Section;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Navigation trigger for a section
    SelectSection(Section),
    /// Body of a project card (hover target)
    ProjectCard(usize),
    /// "Live Preview" button of a revealed card
    OpenProjectLive(usize),
    /// "Code" button of a revealed card
    OpenProjectCode(usize),
    /// Skill tile (hover styling only)
    SkillTile(usize),
    /// Row of the Contact panel
    OpenContact(usize),
}

impl ClickAction {
    /// Project card this area belongs to, including the card's buttons.
    pub fn project_card(&self) -> Option<usize> {
        match self {
            ClickAction::ProjectCard(i)
            | ClickAction::OpenProjectLive(i)
            | ClickAction::OpenProjectCode(i) => Some(*i),
            _ => None,
        }
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }

    /// Same area moved `dy` rows and clipped to `bounds`; `None` if nothing
    /// is left.
    pub fn shifted(&self, dy: i16, bounds: Rect) -> Option<HitArea> {
        let y = self.rect.y as i32 + dy as i32;
        let moved = Rect {
            y: y.clamp(0, u16::MAX as i32) as u16,
            ..self.rect
        };
        let clipped = moved.intersection(bounds);
        if clipped.is_empty() {
            return None;
        }
        Some(HitArea::new(clipped, self.action))
    }
}

#[inline]
pub(crate) fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && (x as u32) < rect.x as u32 + rect.width as u32
        && y >= rect.y
        && (y as u32) < rect.y as u32 + rect.height as u32
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. The pointer position survives clears, so hover styling can
/// be resolved while the next frame registers its areas.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Last known pointer position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Register a hit area from an existing HitArea struct.
    pub fn register_area(&mut self, area: HitArea) {
        self.areas.push(area);
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point,
    /// or None if no area was hit.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Record the pointer position.
    ///
    /// Returns true if the topmost area under the pointer changed
    /// (requiring a redraw).
    pub fn update_pointer(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_action();
        self.pointer = Some((x, y));
        self.hovered_action() != before
    }

    /// Forget the pointer (it left the terminal or the app lost focus).
    pub fn clear_pointer(&mut self) -> bool {
        let had_hover = self.hovered_action().is_some();
        self.pointer = None;
        had_hover
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Action of the topmost area under the pointer.
    pub fn hovered_action(&self) -> Option<ClickAction> {
        let (x, y) = self.pointer?;
        self.hit_test(x, y)
    }

    /// Project card under the pointer, if any.
    pub fn hovered_project_card(&self) -> Option<usize> {
        self.hovered_action().and_then(|a| a.project_card())
    }

    /// Whether the pointer is inside `rect`.
    ///
    /// Works for rects that are being drawn this frame and are not
    /// registered yet.
    pub fn is_pointer_over(&self, rect: Rect) -> bool {
        self.pointer
            .map(|(x, y)| rect_contains(rect, x, y))
            .unwrap_or(false)
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        // Iterate in reverse to find topmost (last registered) area first
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}
