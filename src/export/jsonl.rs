use std::io::Write;

use serde::Serialize;

use crate::export::{ExportContext, ExportError, LinkSink};
use crate::links::Link;

pub struct JsonlSink<W: Write> {
    run_id: String,
    tool_version: String,
    config_hash: String,
    writer: W,
}

#[derive(Serialize)]
struct LinkRecord<'a> {
    run_id: &'a str,
    #[serde(flatten)]
    link: &'a Link,
    config_hash: &'a str,
    tool_version: &'a str,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(ctx: &ExportContext, writer: W) -> Self {
        Self {
            run_id: ctx.run_id.clone(),
            tool_version: ctx.tool_version.clone(),
            config_hash: ctx.config_hash.clone(),
            writer,
        }
    }
}

impl<W: Write> LinkSink for JsonlSink<W> {
    fn record_link(&mut self, link: &Link) -> Result<(), ExportError> {
        let record = LinkRecord {
            run_id: &self.run_id,
            link,
            config_hash: &self.config_hash,
            tool_version: &self.tool_version,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
