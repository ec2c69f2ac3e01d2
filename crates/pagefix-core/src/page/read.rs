use anyhow::{Context, Result};
use fs_err as fs;
use sha2::{Digest, Sha256};
use std::path::Path;

/// A page loaded from disk, ready for normalization.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Full page text.
    pub content: String,

    /// Hex-encoded SHA-256 of the page bytes.
    pub sha256: String,
}

/// Read a page as UTF-8 text and fingerprint it.
pub fn read_page(path: &Path) -> Result<PageContext> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read page: {}", path.display()))?;

    Ok(PageContext {
        sha256: sha256_hex(&content),
        content,
    })
}

pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
