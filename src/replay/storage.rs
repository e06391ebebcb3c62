//! Replay file storage.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use super::replay_data::ReplayData;

/// Default replay file name for a chart.
pub fn replay_file_name(chart_sha256: &str) -> String {
    format!("{chart_sha256}.json.gz")
}

/// Save replay data as gzip-compressed JSON, creating parent directories.
pub fn save_replay<P: AsRef<Path>>(path: P, data: &ReplayData) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create replay directory: {}", dir.display()))?;
    }

    // Serialize to JSON.
    let json = data.to_json().context("Failed to serialize replay data")?;

    // Compress with GZIP.
    let file = File::create(path)
        .with_context(|| format!("Failed to create replay file: {}", path.display()))?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(json.as_bytes())
        .context("Failed to write compressed data")?;
    encoder.finish().context("Failed to finish compression")?;

    Ok(path.to_path_buf())
}

/// Load replay data written by `save_replay`.
pub fn load_replay<P: AsRef<Path>>(path: P) -> Result<ReplayData> {
    let path = path.as_ref();

    // Read and decompress.
    let file = File::open(path)
        .with_context(|| format!("Failed to open replay file: {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut json = String::new();
    decoder
        .read_to_string(&mut json)
        .context("Failed to decompress replay data")?;

    ReplayData::from_json(&json).context("Failed to deserialize replay data")
}
