//! Loading profile files from disk.

mod common;

use std::io::Write;

use common::{buffer_to_string, render_app, TestAppBuilder};
use folio::error::FolioError;
use folio::profile::{load_profile, resolve_profile, ProfileRecord, SkillIcon};
use folio::view_state::Section;
use tempfile::NamedTempFile;

fn write_profile(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const CUSTOM_PROFILE: &str = r#"{
    "name": "Ada Lovelace",
    "title": "Analyst",
    "imageUrl": "https://example.com/ada.png",
    "bio": "Wrote the first published algorithm.",
    "skills": [
        { "name": "Mathematics", "icon": "generic" },
        { "name": "Rust", "icon": "ferris" },
        { "name": "Git", "icon": "git" }
    ],
    "projects": [
        {
            "title": "Note G",
            "description": "Bernoulli numbers on the Analytical Engine.",
            "imageUrl": "https://example.com/note-g.png",
            "technologies": ["Punched cards"],
            "liveUrl": "example.com/note-g",
            "githubUrl": "https://example.com/note-g/source"
        }
    ],
    "contact": {
        "email": "ada@example.com",
        "linkedinUrl": "linkedin.example/ada",
        "githubUrl": "https://example.com/ada"
    }
}"#;

#[test]
fn test_sample_survives_json_dump_and_load() {
    let sample = ProfileRecord::sample();
    let file = write_profile(&serde_json::to_string_pretty(&sample).unwrap());
    let loaded = load_profile(file.path()).unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn test_custom_profile_loads_and_renders() {
    let file = write_profile(CUSTOM_PROFILE);
    let profile = resolve_profile(Some(file.path())).unwrap();
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.skills[1].icon, SkillIcon::Generic);
    assert_eq!(profile.skills[2].icon, SkillIcon::Git);
    assert_eq!(profile.contact.leetcode_url, "");

    let (mut app, opener) = TestAppBuilder::new()
        .with_profile(profile)
        .without_animations()
        .build();
    app.select_section(Section::Skills);
    let text = buffer_to_string(&render_app(&mut app, 100, 40));
    assert!(text.contains("Ada Lovelace"));
    assert!(text.contains("Mathematics"));

    app.open_project_live(0);
    app.open_contact(1);
    assert_eq!(
        opener.opened(),
        vec![
            "https://example.com/note-g".to_string(),
            "https://linkedin.example/ada".to_string(),
        ]
    );
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, FolioError::ProfileRead { .. }));
    assert!(err.user_message().contains("absent.json"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let file = write_profile("{ \"name\": ");
    let err = load_profile(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::ProfileParse { .. }));
}

#[test]
fn test_blank_project_title_is_rejected() {
    let json = CUSTOM_PROFILE.replace("\"Note G\"", "\"  \"");
    let file = write_profile(&json);
    let err = load_profile(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::InvalidProfile { .. }));
}
