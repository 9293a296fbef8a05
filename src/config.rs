use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::catalog::FilterConfig;
use crate::constants::MIN_OVERLAP;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub run_id: String,
    pub block_size_bytes: usize,
    pub overlap_bytes: usize,
    pub default_page_capacity: usize,
    pub max_page_capacity: usize,
    pub export_file_name: String,
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_hash: String,
}

pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let bytes: Vec<u8> = if let Some(p) = path {
        std::fs::read(p).with_context(|| format!("reading config {}", p.display()))?
    } else {
        include_bytes!("../config/default.yml").to_vec()
    };

    let mut config: Config = serde_yaml::from_slice(&bytes).context("parsing config")?;
    if config.run_id.trim().is_empty() {
        config.run_id = generate_run_id();
    }
    validate(&config)?;

    let config_hash = hash_bytes(&bytes);

    Ok(LoadedConfig { config, config_hash })
}

fn validate(cfg: &Config) -> Result<()> {
    if cfg.block_size_bytes == 0 {
        bail!("block_size_bytes must be at least 1");
    }
    if cfg.overlap_bytes < MIN_OVERLAP {
        bail!(
            "overlap_bytes ({}) must be at least {MIN_OVERLAP}",
            cfg.overlap_bytes
        );
    }
    if cfg.default_page_capacity == 0 {
        bail!("default_page_capacity must be at least 1");
    }
    if cfg.max_page_capacity < cfg.default_page_capacity {
        bail!(
            "max_page_capacity ({}) is smaller than default_page_capacity ({})",
            cfg.max_page_capacity,
            cfg.default_page_capacity
        );
    }
    if cfg.export_file_name.trim().is_empty() {
        bail!("export_file_name must not be empty");
    }
    Ok(())
}

fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    hex::encode(digest)
}

fn generate_run_id() -> String {
    let now = chrono::Utc::now();
    format!("{}_{}", now.format("%Y%m%dT%H%M%SZ"), rand_suffix())
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("{:08x}", nanos)
}
