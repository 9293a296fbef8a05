//! # Pipeline Events
//!
//! Notifications sent from the background scan to the foreground.

use super::{FileProgress, ScanError, ScanOutput};

#[derive(Debug)]
pub enum ScanEvent {
    /// A file is about to be read
    Progress(FileProgress),
    /// The batch finished; the result set now belongs to the receiver
    Completed(ScanOutput),
    /// The batch was aborted; no result set exists
    Failed(ScanError),
}

impl ScanEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScanEvent::Progress(_))
    }
}
