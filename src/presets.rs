//! Default cache locations of the game launchers whose web caches carry the
//! media links this tool is usually pointed at.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Mainland China launcher
    Cn,
    /// Global launcher
    Global,
}

impl Preset {
    /// Cache directory relative to the platform config directory.
    pub fn relative_cache_dir(self) -> PathBuf {
        let (vendor, version) = match self {
            Preset::Cn => ("miHoYo", "1_1"),
            Preset::Global => ("Cognosphere", "1_0"),
        };
        [vendor, "HYP", version, "fedata", "Cache", "Cache_Data"]
            .iter()
            .collect()
    }

    /// `None` when the platform has no config directory.
    pub fn cache_dir(self) -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(self.relative_cache_dir()))
    }
}

/// Regular files directly inside `dir`, sorted by name.
pub fn list_cache_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    debug!("{} cache file(s) in {}", files.len(), dir.display());
    Ok(files)
}
