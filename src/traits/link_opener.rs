//! Link opener trait abstraction.
//!
//! Outbound links (mailto, profile pages, project demos) are never fetched
//! by Folio; they are handed to an opener. Production code uses the OS
//! opener, tests use a recorder.

use crate::error::FolioResult;

/// Something that can open a URL outside the TUI.
pub trait LinkOpener: Send {
    /// Open `url`. The URL is already normalised (has a scheme).
    fn open(&self, url: &str) -> FolioResult<()>;
}
