//! Error handling for Folio.
//!
//! Rendering and view-state transitions are infallible; errors only come
//! from the edges of the program:
//!
//! - **Profile loading**: reading, parsing and validating a profile file
//! - **Terminal**: entering/leaving TUI mode and drawing frames
//! - **Links**: handing an outbound link to the OS opener
//!
//! # Example
//!
//! ```ignore
//! use folio::error::{FolioError, FolioResult};
//!
//! fn run() -> FolioResult<()> {
//!     let profile = folio::profile::load_profile("me.json".as_ref())?;
//!     println!("{}", profile.name);
//!     Ok(())
//! }
//! ```

mod folio_error;

pub use folio_error::FolioError;

/// Result alias used across the library.
pub type FolioResult<T> = Result<T, FolioError>;
