//! Path resolution and raw readers for the workspace `data/` tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the workspace `data/` directory.
///
/// `GREENWOLD_DATA` overrides; otherwise prefer the top-level workspace
/// `data/` so tests and tools can run from any crate.
#[must_use]
pub fn data_root() -> PathBuf {
    if let Ok(p) = std::env::var("GREENWOLD_DATA") {
        return PathBuf::from(p);
    }
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a raw file under `data/` and return its string.
pub fn read_data(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}
