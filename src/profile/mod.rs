//! Profile data: the immutable record a portfolio renders.
//!
//! A [`ProfileRecord`] is built once at startup, either from the built-in
//! [`ProfileRecord::sample`] or from a JSON file via [`load_profile`], and is
//! shared read-only for the rest of the process.

mod links;
mod loader;
mod record;
mod sample;

pub use links::{href_for, mailto, ContactLink, ContactLinkKind};
pub use loader::{load_profile, parse_profile, resolve_profile};
pub use record::{Contact, ProfileRecord, Project, Skill, SkillIcon};
