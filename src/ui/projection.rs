//! Pure projection of the profile and view state into panel content.
//!
//! Nothing here touches a terminal: [`project`] answers *what* the active
//! panel contains, the renderers in [`crate::ui::panels`] decide how it
//! looks.

use crate::profile::{ContactLink, ProfileRecord};
use crate::view_state::{Section, ViewState};

/// One tile of the Skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry<'a> {
    pub name: &'a str,
    pub glyph: &'static str,
}

/// One card of the Projects grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub index: usize,
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    /// One tag per technology, in declared order.
    pub tags: Vec<&'a str>,
    pub live_url: &'a str,
    pub github_url: &'a str,
    /// Whether the card shows its details instead of the thumbnail.
    pub revealed: bool,
}

impl ProjectCard<'_> {
    /// File name of the thumbnail, shown on the placeholder.
    pub fn image_name(&self) -> &str {
        let trimmed = self.image_url.trim_end_matches('/');
        let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
        name.split(['?', '#']).next().unwrap_or(name)
    }
}

/// Content of exactly one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent<'a> {
    About { heading: &'static str, bio: &'a str },
    Skills { heading: &'static str, entries: Vec<SkillEntry<'a>> },
    Projects { heading: &'static str, cards: Vec<ProjectCard<'a>> },
    Contact { heading: &'static str, links: [ContactLink<'a>; 3] },
}

impl PanelContent<'_> {
    pub fn section(&self) -> Section {
        match self {
            PanelContent::About { .. } => Section::About,
            PanelContent::Skills { .. } => Section::Skills,
            PanelContent::Projects { .. } => Section::Projects,
            PanelContent::Contact { .. } => Section::Contact,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            PanelContent::About { heading, .. }
            | PanelContent::Skills { heading, .. }
            | PanelContent::Projects { heading, .. }
            | PanelContent::Contact { heading, .. } => heading,
        }
    }

    /// Number of staggered children (the bio counts as one).
    pub fn item_count(&self) -> usize {
        match self {
            PanelContent::About { .. } => 1,
            PanelContent::Skills { entries, .. } => entries.len(),
            PanelContent::Projects { cards, .. } => cards.len(),
            PanelContent::Contact { links, .. } => links.len(),
        }
    }
}

/// Content of the active section.
pub fn project<'a>(profile: &'a ProfileRecord, view: &ViewState) -> PanelContent<'a> {
    project_section(profile, view, view.active_section())
}

/// Content of `section`, which may differ from the active section while a
/// panel is leaving the screen.
pub fn project_section<'a>(
    profile: &'a ProfileRecord,
    view: &ViewState,
    section: Section,
) -> PanelContent<'a> {
    let heading = section.heading();
    match section {
        Section::About => PanelContent::About {
            heading,
            bio: &profile.bio,
        },
        Section::Skills => PanelContent::Skills {
            heading,
            entries: profile
                .skills
                .iter()
                .map(|skill| SkillEntry {
                    name: &skill.name,
                    glyph: skill.icon.glyph(),
                })
                .collect(),
        },
        Section::Projects => PanelContent::Projects {
            heading,
            cards: profile
                .projects
                .iter()
                .enumerate()
                .map(|(index, project)| ProjectCard {
                    index,
                    title: &project.title,
                    description: &project.description,
                    image_url: &project.image_url,
                    tags: project.technologies.iter().map(String::as_str).collect(),
                    live_url: &project.live_url,
                    github_url: &project.github_url,
                    revealed: view.is_project_hovered(index),
                })
                .collect(),
        },
        Section::Contact => PanelContent::Contact {
            heading,
            links: ContactLink::all(&profile.contact),
        },
    }
}
