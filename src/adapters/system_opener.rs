//! Link opener backed by the platform's default handler.

use crate::error::{FolioError, FolioResult};
use crate::traits::LinkOpener;

/// Opens links in a new browser context (or mail client for `mailto:`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> FolioResult<()> {
        open::that_detached(url).map_err(|e| FolioError::LinkOpen {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
