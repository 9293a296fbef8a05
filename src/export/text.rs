use std::io::Write;

use crate::export::{ExportError, LinkSink};
use crate::links::Link;

/// One URL per line, UTF-8, no trailing newline.
pub struct TextSink<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first: true,
        }
    }
}

impl<W: Write> LinkSink for TextSink<W> {
    fn record_link(&mut self, link: &Link) -> Result<(), ExportError> {
        if !self.first {
            self.writer.write_all(b"\n")?;
        }
        self.first = false;
        self.writer.write_all(link.url.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
