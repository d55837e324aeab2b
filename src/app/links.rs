//! Opening outbound links through the injected opener.

use crate::profile::{href_for, ContactLink};

use super::{App, StatusMessage, CONTACT_LINK_COUNT};

impl App {
    /// Hand `url` to the opener. Failures go to the status line, never up.
    pub fn open_link(&mut self, url: &str) -> bool {
        let opened = match self.opener.open(url) {
            Ok(()) => {
                tracing::info!(url, "Opened link");
                self.status = Some(StatusMessage::info(format!("Opened {}", url), self.clock_ms));
                true
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to open link");
                self.status = Some(StatusMessage::error(e.user_message(), self.clock_ms));
                false
            }
        };
        self.mark_dirty();
        opened
    }

    /// Open the live demo of project `index`.
    pub fn open_project_live(&mut self, index: usize) -> bool {
        let Some(project) = self.profile.projects.get(index) else {
            return false;
        };
        let url = href_for(&project.live_url);
        self.open_link(&url)
    }

    /// Open the source repository of project `index`.
    pub fn open_project_code(&mut self, index: usize) -> bool {
        let Some(project) = self.profile.projects.get(index) else {
            return false;
        };
        let url = href_for(&project.github_url);
        self.open_link(&url)
    }

    /// Open contact link `index` (0 email, 1 professional network, 2 source hosting).
    pub fn open_contact(&mut self, index: usize) -> bool {
        if index >= CONTACT_LINK_COUNT {
            return false;
        }
        let target = ContactLink::all(&self.profile.contact)[index].target();
        self.open_link(&target)
    }

    /// Open whatever the keyboard focus is on in the active panel.
    pub fn open_focused(&mut self) -> bool {
        use crate::view_state::Section;
        match self.view.active_section() {
            Section::Projects => match self.view.hovered_project() {
                Some(i) => self.open_project_live(i),
                None => false,
            },
            Section::Contact => self.open_contact(self.contact_cursor),
            _ => false,
        }
    }
}
