//! Recording link opener for testing.

use std::sync::{Arc, Mutex};

use crate::error::{FolioError, FolioResult};
use crate::traits::LinkOpener;

/// Link opener that records every URL instead of opening it.
///
/// Clones share the same record, so a test can keep one handle while the
/// app owns another.
///
/// # Example
///
/// ```
/// use folio::adapters::mock::RecordingLinkOpener;
/// use folio::traits::LinkOpener;
///
/// let opener = RecordingLinkOpener::new();
/// opener.open("https://example.com").unwrap();
/// assert_eq!(opener.opened(), vec!["https://example.com".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opener whose every `open` call fails (after recording the URL).
    pub fn failing() -> Self {
        let opener = Self::default();
        opener.set_should_fail(true);
        opener
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    /// URLs passed to `open`, in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn last_opened(&self) -> Option<String> {
        self.opened.lock().unwrap().last().cloned()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> FolioResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if *self.should_fail.lock().unwrap() {
            return Err(FolioError::LinkOpen {
                url: url.to_string(),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}
