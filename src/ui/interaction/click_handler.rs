//! Click action handler for the mouse interaction system.
//!
//! This module processes click actions dispatched from the hit area registry,
//! translating them into App state mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
///
/// Called from the event loop when a left click lands on a registered hit
/// area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectSection(section) => {
            app.select_section(section);
            tracing::debug!("Click: SelectSection({:?})", section);
        }
        // A tap on a card with no prior pointer movement still reveals it
        ClickAction::ProjectCard(index) => {
            app.pointer_over_card(Some(index));
            tracing::debug!("Click: ProjectCard({})", index);
        }
        ClickAction::OpenProjectLive(index) => {
            tracing::debug!("Click: OpenProjectLive({})", index);
            app.open_project_live(index);
        }
        ClickAction::OpenProjectCode(index) => {
            tracing::debug!("Click: OpenProjectCode({})", index);
            app.open_project_code(index);
        }
        ClickAction::OpenContact(index) => {
            app.contact_cursor = index;
            tracing::debug!("Click: OpenContact({})", index);
            app.open_contact(index);
        }
        // Skill tiles only carry a hover style
        ClickAction::SkillTile(index) => {
            tracing::debug!("Click: SkillTile({}) - no action", index);
        }
    }
}
