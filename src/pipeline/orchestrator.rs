use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::events::ScanEvent;
use super::{FileProgress, ProgressReporter, ScanError, ScanOptions, scan_files};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Completed,
    Failed,
}

#[derive(Debug, Error)]
pub enum ScanRequestError {
    #[error("a scan is already in progress")]
    Busy,
    #[error("no input files given")]
    NoInputs,
    #[error("failed to start scan worker: {0}")]
    Spawn(#[from] io::Error),
}

struct ChannelReporter {
    tx: Sender<ScanEvent>,
}

impl ProgressReporter for ChannelReporter {
    fn on_progress(&self, progress: &FileProgress) {
        if let Err(err) = self.tx.send(ScanEvent::Progress(progress.clone())) {
            debug!("progress dropped, receiver gone: {err}");
        }
    }
}

/// Runs at most one batch scan at a time on a background thread.
///
/// The foreground polls for [`ScanEvent`]s. State moves to `Completed` or
/// `Failed` when the terminal event is handed out; a new request is accepted
/// in any state except `Scanning`. A running scan cannot be cancelled.
pub struct ScanOrchestrator {
    options: ScanOptions,
    state: ScanState,
    events: Option<Receiver<ScanEvent>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ScanOrchestrator {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            state: ScanState::Idle,
            events: None,
            worker: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    pub fn start(&mut self, paths: Vec<PathBuf>) -> Result<(), ScanRequestError> {
        if self.is_scanning() {
            warn!("scan request rejected: a scan is already running");
            return Err(ScanRequestError::Busy);
        }
        if paths.is_empty() {
            return Err(ScanRequestError::NoInputs);
        }

        let (tx, rx) = unbounded::<ScanEvent>();
        let options = self.options;
        let file_count = paths.len();
        let worker = thread::Builder::new()
            .name("mediasift-scan".to_string())
            .spawn(move || {
                let reporter = ChannelReporter { tx: tx.clone() };
                let event = match scan_files(&paths, &options, &reporter) {
                    Ok(output) => ScanEvent::Completed(output),
                    Err(err) => ScanEvent::Failed(err),
                };
                if tx.send(event).is_err() {
                    debug!("scan result dropped, receiver gone");
                }
            })?;

        info!("scan started for {file_count} file(s)");
        self.events = Some(rx);
        self.worker = Some(worker);
        self.state = ScanState::Scanning;
        Ok(())
    }

    /// Non-blocking poll.
    pub fn try_next_event(&mut self) -> Option<ScanEvent> {
        let rx = self.events.as_ref()?;
        match rx.try_recv() {
            Ok(event) => Some(self.observe(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(self.observe(ScanEvent::Failed(ScanError::WorkerLost)))
            }
        }
    }

    /// Blocks until the next event. `None` when no scan is in flight.
    pub fn next_event(&mut self) -> Option<ScanEvent> {
        let rx = self.events.as_ref()?;
        let event = rx
            .recv()
            .unwrap_or(ScanEvent::Failed(ScanError::WorkerLost));
        Some(self.observe(event))
    }

    pub fn next_event_timeout(&mut self, timeout: Duration) -> Option<ScanEvent> {
        let rx = self.events.as_ref()?;
        match rx.recv_timeout(timeout) {
            Ok(event) => Some(self.observe(event)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                Some(self.observe(ScanEvent::Failed(ScanError::WorkerLost)))
            }
        }
    }

    fn observe(&mut self, event: ScanEvent) -> ScanEvent {
        match &event {
            ScanEvent::Progress(progress) => debug!("{progress}"),
            ScanEvent::Completed(output) => {
                info!("scan completed with {} unique link(s)", output.results.len());
                self.finish(ScanState::Completed);
            }
            ScanEvent::Failed(err) => {
                warn!("scan failed: {err}");
                self.finish(ScanState::Failed);
            }
        }
        event
    }

    fn finish(&mut self, state: ScanState) {
        self.state = state;
        self.events = None;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("scan worker panicked");
            }
        }
    }
}
