//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SystemLinkOpener`] - Opens links with the platform opener via `open`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingLinkOpener`] - Records opened links, optionally failing

pub mod mock;
pub mod system_opener;

pub use mock::RecordingLinkOpener;
pub use system_opener::SystemLinkOpener;
