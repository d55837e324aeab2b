//! Mock implementations for testing.

mod link_opener;

pub use link_opener::RecordingLinkOpener;
