use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Everything the portfolio shows about its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub image_url: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: SkillIcon,
}

impl Skill {
    pub fn new(name: impl Into<String>, icon: SkillIcon) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

/// Icon identifier for a skill tile.
///
/// Unknown identifiers in a profile file deserialize to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    React,
    JavaScript,
    NodeJs,
    Java,
    MySql,
    Html,
    Css,
    Docker,
    Git,
    #[default]
    #[serde(other)]
    Generic,
}

impl SkillIcon {
    /// Terminal glyph drawn on the skill tile.
    pub fn glyph(&self) -> &'static str {
        match self {
            SkillIcon::React => "⚛",
            SkillIcon::JavaScript => "JS",
            SkillIcon::NodeJs => "⬢",
            SkillIcon::Java => "☕",
            SkillIcon::MySql => "⛁",
            SkillIcon::Html => "</>",
            SkillIcon::Css => "#",
            SkillIcon::Docker => "⛴",
            SkillIcon::Git => "⎇",
            SkillIcon::Generic => "◆",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    #[serde(default)]
    pub leetcode_url: String,
}

impl ProfileRecord {
    /// Check the content rules a file-supplied profile must satisfy.
    pub fn validate(&self) -> FolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::invalid_profile("name must not be empty"));
        }
        if let Some(idx) = self
            .projects
            .iter()
            .position(|p| p.title.trim().is_empty())
        {
            return Err(FolioError::invalid_profile(format!(
                "project #{} has an empty title",
                idx + 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        assert!(ProfileRecord::sample().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut profile = ProfileRecord::sample();
        profile.name = "   ".to_string();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_untitled_project_rejected() {
        let mut profile = ProfileRecord::sample();
        profile.projects[1].title.clear();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("project #2"));
    }

    #[test]
    fn test_unknown_icon_is_generic() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Rust","icon":"ferris"}"#).unwrap();
        assert_eq!(skill.icon, SkillIcon::Generic);
        let skill: Skill = serde_json::from_str(r#"{"name":"Git","icon":"git"}"#).unwrap();
        assert_eq!(skill.icon, SkillIcon::Git);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(ProfileRecord::sample()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json["projects"][0].get("liveUrl").is_some());
        assert!(json["contact"].get("linkedinUrl").is_some());
    }
}
