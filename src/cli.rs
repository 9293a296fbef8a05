use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetArg {
    Cn,
    Global,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormatArg {
    Text,
    Jsonl,
    Csv,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Cache files to scan, in order
    pub inputs: Vec<PathBuf>,

    /// Scan every file in a launcher's default cache directory
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Optional path to config file (YAML)
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Block size, in KiB (overrides config when set)
    #[arg(long)]
    pub block_size_kib: Option<u64>,

    /// Block overlap, in KiB (overrides config when set)
    #[arg(long)]
    pub overlap_kib: Option<u64>,

    /// Hide image links
    #[arg(long)]
    pub no_images: bool,

    /// Hide video links
    #[arg(long)]
    pub no_videos: bool,

    /// Hide links that are neither images nor videos
    #[arg(long)]
    pub no_other: bool,

    /// Page to print (1-based)
    #[arg(long, default_value = "1")]
    pub page: String,

    /// Links per page (overrides config when set)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write the filtered links to this file or directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormatArg::Text)]
    pub export_format: ExportFormatArg,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
