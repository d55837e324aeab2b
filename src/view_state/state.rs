use super::section::Section;

/// Transient UI state: the active panel and the hovered project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_section: Section,
    hovered_project: Option<usize>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn hovered_project(&self) -> Option<usize> {
        self.hovered_project
    }

    pub fn is_project_hovered(&self, index: usize) -> bool {
        self.hovered_project == Some(index)
    }

    /// Make `section` the active panel.
    ///
    /// Selecting the active section again leaves the state untouched.
    /// Switching away clears the hovered card, since the cards are no
    /// longer on screen.
    pub fn select_section(&mut self, section: Section) {
        if self.active_section == section {
            return;
        }
        tracing::debug!(from = ?self.active_section, to = ?section, "Section selected");
        self.active_section = section;
        self.hovered_project = None;
    }

    /// Pointer (or keyboard focus) entered project card `index`.
    ///
    /// Returns false and leaves the state untouched when `index` is not a
    /// card, i.e. `index >= project_count`.
    pub fn hover_start(&mut self, index: usize, project_count: usize) -> bool {
        if index >= project_count {
            tracing::debug!(index, project_count, "Ignoring hover on missing card");
            return false;
        }
        self.hovered_project = Some(index);
        true
    }

    /// Pointer left project card `index`.
    ///
    /// Only clears the hover if `index` is the hovered card, so a late
    /// leave from a previous card can't clear the current one.
    pub fn hover_end(&mut self, index: usize) {
        if self.hovered_project == Some(index) {
            self.hovered_project = None;
        }
    }
}
