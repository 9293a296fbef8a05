//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use mediasift::links::ResultSet;
use mediasift::pipeline::{self, NoProgress, ScanOptions, ScanOutput};

/// Deterministic binary filler that never forms a URL on its own.
pub fn noise(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 & 0x8f).collect()
}

/// Copy `data` into `target` at `offset`, growing `target` as needed.
pub fn insert_bytes(target: &mut Vec<u8>, offset: usize, data: &[u8]) {
    let end = offset + data.len();
    if end > target.len() {
        target.resize(end, 0u8);
    }
    target[offset..end].copy_from_slice(data);
}

pub fn write_input(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write input");
    path
}

pub fn scan(paths: &[PathBuf], block_size: usize, overlap: usize) -> ScanOutput {
    let options = ScanOptions {
        block_size,
        overlap,
    };
    pipeline::scan_files(paths, &options, &NoProgress).expect("scan")
}

pub fn urls(results: &ResultSet) -> Vec<String> {
    results.iter().map(|link| link.url.clone()).collect()
}
