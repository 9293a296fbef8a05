use std::io::Write;

use serde::Serialize;

use crate::export::{ExportContext, ExportError, LinkSink};
use crate::links::{Category, Link};

pub struct CsvSink<W: Write> {
    run_id: String,
    tool_version: String,
    config_hash: String,
    writer: csv::Writer<W>,
}

#[derive(Serialize)]
struct LinkCsv<'a> {
    run_id: &'a str,
    url: &'a str,
    category: Category,
    extension: &'a str,
    config_hash: &'a str,
    tool_version: &'a str,
}

impl<W: Write> CsvSink<W> {
    pub fn new(ctx: &ExportContext, writer: W) -> Result<Self, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record([
            "run_id",
            "url",
            "category",
            "extension",
            "config_hash",
            "tool_version",
        ])?;
        Ok(Self {
            run_id: ctx.run_id.clone(),
            tool_version: ctx.tool_version.clone(),
            config_hash: ctx.config_hash.clone(),
            writer,
        })
    }
}

impl<W: Write> LinkSink for CsvSink<W> {
    fn record_link(&mut self, link: &Link) -> Result<(), ExportError> {
        let record = LinkCsv {
            run_id: &self.run_id,
            url: &link.url,
            category: link.category,
            extension: &link.extension,
            config_hash: &self.config_hash,
            tool_version: &self.tool_version,
        };
        self.writer.serialize(record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
