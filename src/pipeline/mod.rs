//! # Pipeline Module
//!
//! Drives a batch scan. Files are read one at a time through the chunk
//! scanner, every candidate is validated and folded into a single unique set,
//! and the set is classified and ordered into the final result set.
//! Any read failure aborts the whole batch.

pub mod events;
pub mod orchestrator;

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::chunk::ChunkScanner;
use crate::config::Config;
use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_OVERLAP};
use crate::evidence::{ByteSource, FileSource, display_name};
use crate::links::{Deduplicator, ResultSet, is_valid_link};
use crate::scanner::{self, UrlMatcher};

pub use events::ScanEvent;
pub use orchestrator::{ScanOrchestrator, ScanRequestError, ScanState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub block_size: usize,
    pub overlap: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl ScanOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            block_size: cfg.block_size_bytes,
            overlap: cfg.overlap_bytes,
        }
    }
}

/// Counters collected during a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files: u64,
    pub bytes_read: u64,
    pub blocks: u64,
    pub candidates: u64,
    pub accepted: u64,
    pub unique: u64,
}

#[derive(Debug)]
pub struct ScanOutput {
    pub results: ResultSet,
    pub stats: ScanStats,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid url pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("scan worker exited without reporting a result")]
    WorkerLost,
}

/// Emitted before each file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProgress {
    /// Zero-based position of the file in the batch.
    pub index: usize,
    pub total: usize,
    pub file_name: String,
}

impl FileProgress {
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for FileProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processing ({}/{}): {}",
            self.ordinal(),
            self.total,
            self.file_name
        )
    }
}

/// Progress callback for batch scans.
pub trait ProgressReporter: Send + Sync {
    fn on_progress(&self, progress: &FileProgress);
}

pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&self, _progress: &FileProgress) {}
}

/// Scan `paths` in order and build the result set.
pub fn scan_files(
    paths: &[PathBuf],
    options: &ScanOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ScanOutput, ScanError> {
    ScanRunner::new(*options)?.run(paths, reporter)
}

struct ScanRunner {
    matcher: Box<dyn UrlMatcher>,
    options: ScanOptions,
    dedup: Deduplicator,
    stats: ScanStats,
}

impl ScanRunner {
    fn new(options: ScanOptions) -> Result<Self, ScanError> {
        Ok(Self {
            matcher: scanner::build_matcher()?,
            options,
            dedup: Deduplicator::new(),
            stats: ScanStats::default(),
        })
    }

    fn run(
        mut self,
        paths: &[PathBuf],
        reporter: &dyn ProgressReporter,
    ) -> Result<ScanOutput, ScanError> {
        info!(
            "scan start files={} block_size={} overlap={}",
            paths.len(),
            self.options.block_size,
            self.options.overlap
        );

        for (index, path) in paths.iter().enumerate() {
            reporter.on_progress(&FileProgress {
                index,
                total: paths.len(),
                file_name: display_name(path),
            });
            let read_error = |source| ScanError::Read {
                path: path.clone(),
                source,
            };
            let source = FileSource::open(path).map_err(read_error)?;
            debug!("scanning {} ({} bytes)", path.display(), source.len());
            self.scan_source(&source).map_err(read_error)?;
            self.stats.files += 1;
        }

        self.stats.unique = self.dedup.len() as u64;
        let results = ResultSet::from_deduplicator(self.dedup);
        info!(
            "scan_summary files={} bytes_read={} blocks={} candidates={} accepted={} unique={}",
            self.stats.files,
            self.stats.bytes_read,
            self.stats.blocks,
            self.stats.candidates,
            self.stats.accepted,
            self.stats.unique
        );
        Ok(ScanOutput {
            results,
            stats: self.stats,
        })
    }

    fn scan_source(&mut self, source: &dyn ByteSource) -> io::Result<()> {
        let blocks = ChunkScanner::new(
            source,
            self.matcher.as_ref(),
            self.options.block_size,
            self.options.overlap,
        );
        for scan in blocks {
            let scan = scan?;
            self.stats.blocks += 1;
            self.stats.bytes_read += scan.block.bytes_read as u64;
            self.stats.candidates += scan.candidates.len() as u64;
            for candidate in scan.candidates {
                if is_valid_link(&candidate.text) {
                    self.stats.accepted += 1;
                    self.dedup.insert(candidate.text);
                }
            }
        }
        Ok(())
    }
}
