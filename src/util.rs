//! # Utility Module
//!
//! Glue between the command line, the loaded configuration and the library:
//! CLI enum conversion, config overrides and input/output path resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, warn};

use crate::catalog::FilterConfig;
use crate::cli::{CliOptions, ExportFormatArg, PresetArg};
use crate::config::Config;
use crate::constants::{KIB, MIN_OVERLAP};
use crate::export::ExportFormat;
use crate::presets::{self, Preset};

/// Convert CLI export format to internal enum
pub fn format_from_cli(format: ExportFormatArg) -> ExportFormat {
    match format {
        ExportFormatArg::Text => ExportFormat::Text,
        ExportFormatArg::Jsonl => ExportFormat::Jsonl,
        ExportFormatArg::Csv => ExportFormat::Csv,
    }
}

pub fn preset_from_cli(preset: PresetArg) -> Preset {
    match preset {
        PresetArg::Cn => Preset::Cn,
        PresetArg::Global => Preset::Global,
    }
}

/// Config filter with the CLI `--no-*` switches applied on top.
pub fn filter_from_cli(base: FilterConfig, opts: &CliOptions) -> FilterConfig {
    FilterConfig {
        image: base.image && !opts.no_images,
        video: base.video && !opts.no_videos,
        other: base.other && !opts.no_other,
    }
}

/// Apply size overrides from the command line.
pub fn apply_overrides(cfg: &mut Config, opts: &CliOptions) -> Result<()> {
    if let Some(kib) = opts.block_size_kib {
        if kib == 0 {
            bail!("--block-size-kib must be at least 1");
        }
        cfg.block_size_bytes = kib_to_bytes(kib)?;
    }
    if let Some(kib) = opts.overlap_kib {
        let bytes = kib_to_bytes(kib)?;
        if bytes < MIN_OVERLAP {
            bail!("--overlap-kib must cover at least {MIN_OVERLAP} bytes");
        }
        cfg.overlap_bytes = bytes;
    }
    if let Some(size) = opts.page_size {
        if size == 0 {
            bail!("--page-size must be at least 1");
        }
        if size > cfg.max_page_capacity {
            warn!(
                "page size {} exceeds max_page_capacity {}; using the maximum",
                size, cfg.max_page_capacity
            );
        }
        cfg.default_page_capacity = size.min(cfg.max_page_capacity);
    }
    Ok(())
}

fn kib_to_bytes(kib: u64) -> Result<usize> {
    usize::try_from(kib.saturating_mul(KIB))
        .map_err(|_| anyhow!("{kib} KiB does not fit in memory"))
}

/// Explicit inputs first, then the preset directory listing.
pub fn collect_inputs(opts: &CliOptions) -> Result<Vec<PathBuf>> {
    let mut inputs = opts.inputs.clone();
    if let Some(preset) = opts.preset.map(preset_from_cli) {
        let dir = preset
            .cache_dir()
            .ok_or_else(|| anyhow!("no config directory on this platform for preset {preset:?}"))?;
        let files = presets::list_cache_files(&dir)
            .with_context(|| format!("listing cache directory {}", dir.display()))?;
        info!("preset {:?}: {} file(s) in {}", preset, files.len(), dir.display());
        inputs.extend(files);
    }
    Ok(inputs)
}

/// A directory destination gets the configured export file name appended.
pub fn resolve_export_path(path: &Path, cfg: &Config) -> PathBuf {
    if path.is_dir() {
        path.join(&cfg.export_file_name)
    } else {
        path.to_path_buf()
    }
}
