use crate::constants::OUTPUT_DIR_NAME;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use image::Rgba;

pub fn hex_to_rgba(hex: &str) -> Result<Rgba<u8>> {
    let hex = hex.trim_start_matches('#');

    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(anyhow!("Expected #RRGGBB or #RRGGBBAA, got '#{}'", hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| anyhow!("Invalid hex color '#{}': {}", hex, e))
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if hex.len() == 8 { channel(6..8)? } else { 255 };

    Ok(Rgba([r, g, b, a]))
}

/// Creates the `outlined` subdirectory inside `folder`. Safe to call when it
/// already exists.
pub fn prepare_output_dir(folder: &Path) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(anyhow!("{} is not a directory", folder.display()));
    }

    let output_dir = folder.join(OUTPUT_DIR_NAME);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    Ok(output_dir)
}

/// Pairs every PNG directly inside `folder` with its destination under
/// `output_dir`, keeping filenames. Non-PNG files and subdirectories are
/// skipped; nothing is recursed into.
pub fn collect_png_jobs(folder: &Path, output_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read directory {}", folder.display()))?;

    let mut jobs = Vec::new();

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory {}", folder.display()))?
            .path();

        if !path.is_file() || !is_png(&path) {
            continue;
        }

        if let Some(file_name) = path.file_name() {
            let output_path = output_dir.join(file_name);
            jobs.push((path, output_path));
        }
    }

    Ok(jobs)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| e == "png")
}
