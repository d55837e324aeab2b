//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`LinkOpener`] - Hands outbound links to whatever opens them

pub mod link_opener;

pub use link_opener::LinkOpener;
