//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `folio::adapters::mock`.

pub use folio::adapters::mock::RecordingLinkOpener;
