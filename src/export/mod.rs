//! # Export Module
//!
//! Writes the currently filtered links to a file. The destination is always
//! overwritten. Plain text is the interchange format; JSON Lines and CSV add
//! run provenance for each link.

pub mod csv;
pub mod jsonl;
pub mod text;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::links::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Jsonl,
    Csv,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("nothing to export")]
    Empty,
}

/// Run provenance written next to each link by the structured formats.
#[derive(Debug, Clone, Default)]
pub struct ExportContext {
    pub run_id: String,
    pub tool_version: String,
    pub config_hash: String,
}

pub trait LinkSink {
    fn record_link(&mut self, link: &Link) -> Result<(), ExportError>;
    fn flush(&mut self) -> Result<(), ExportError>;
}

pub fn build_sink(
    format: ExportFormat,
    ctx: &ExportContext,
    file: File,
) -> Result<Box<dyn LinkSink>, ExportError> {
    let writer = BufWriter::new(file);
    match format {
        ExportFormat::Text => Ok(Box::new(text::TextSink::new(writer))),
        ExportFormat::Jsonl => Ok(Box::new(jsonl::JsonlSink::new(ctx, writer))),
        ExportFormat::Csv => Ok(Box::new(csv::CsvSink::new(ctx, writer)?)),
    }
}

/// Write `links` to `path`, returning how many were written.
///
/// An empty sequence is refused before the destination is touched.
pub fn export_links<'a, I>(
    links: I,
    format: ExportFormat,
    path: &Path,
    ctx: &ExportContext,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Link>,
{
    let mut links = links.into_iter().peekable();
    if links.peek().is_none() {
        return Err(ExportError::Empty);
    }

    let file = File::create(path)?;
    let mut sink = build_sink(format, ctx, file)?;
    let mut written = 0usize;
    for link in links {
        sink.record_link(link)?;
        written += 1;
    }
    sink.flush()?;

    info!("exported {written} link(s) as {format:?} to {}", path.display());
    Ok(written)
}
