use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use mediasift::{
    catalog::{Catalog, Page, Summary},
    cli,
    config,
    export::{self, ExportContext},
    logging,
    pipeline::{ScanEvent, ScanOptions, ScanOrchestrator},
    util,
};

fn main() -> Result<()> {
    let cli_opts = cli::parse();
    logging::init_logging(cli_opts.log_json);

    let loaded = config::load_config(cli_opts.config_path.as_deref())?;
    let mut cfg = loaded.config;
    util::apply_overrides(&mut cfg, &cli_opts)?;

    let inputs = util::collect_inputs(&cli_opts)?;
    if inputs.is_empty() {
        bail!("no input files; pass cache files or --preset");
    }

    let tool_version = env!("CARGO_PKG_VERSION");
    info!(
        "starting run_id={} config_hash={} files={} block_size={} overlap={}",
        cfg.run_id,
        loaded.config_hash,
        inputs.len(),
        cfg.block_size_bytes,
        cfg.overlap_bytes
    );

    let mut orchestrator = ScanOrchestrator::new(ScanOptions::from_config(&cfg));
    orchestrator.start(inputs)?;

    let output = loop {
        match orchestrator.next_event() {
            Some(ScanEvent::Progress(progress)) => info!("{progress}"),
            Some(ScanEvent::Completed(output)) => break output,
            Some(ScanEvent::Failed(err)) => return Err(err).context("scan failed"),
            None => bail!("scan ended without a result"),
        }
    };
    info!(
        "found {} unique link(s) across {} file(s)",
        output.stats.unique, output.stats.files
    );

    let filter = util::filter_from_cli(cfg.filter, &cli_opts);
    let mut catalog = Catalog::new(filter, cfg.default_page_capacity)?;
    catalog.replace_results(output.results);

    match catalog.jump(&cli_opts.page) {
        Ok(selection) if selection.clamped => {
            warn!("page {} is out of range; showing page {}", cli_opts.page, selection.page)
        }
        Ok(_) => {}
        Err(err) => warn!("{err}; showing page {}", catalog.current_page()),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_page(&mut out, &catalog.page(), catalog.summary())?;
    out.flush()?;

    if let Some(dest) = cli_opts.export.as_deref() {
        let path = util::resolve_export_path(dest, &cfg);
        let ctx = ExportContext {
            run_id: cfg.run_id.clone(),
            tool_version: tool_version.to_string(),
            config_hash: loaded.config_hash.clone(),
        };
        let format = util::format_from_cli(cli_opts.export_format);
        export::export_links(catalog.filtered(), format, &path, &ctx)
            .with_context(|| format!("exporting to {}", path.display()))?;
    }

    info!("mediasift run finished");
    Ok(())
}

fn print_page(out: &mut impl Write, page: &Page<'_>, summary: Summary) -> io::Result<()> {
    writeln!(out, "{summary}")?;
    for record in &page.records {
        writeln!(out, "{:<6} {}  [{}]", record.label, record.url, record.action)?;
    }
    Ok(())
}
