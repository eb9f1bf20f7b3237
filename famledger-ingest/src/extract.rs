//! Document-to-text extraction.
//!
//! Extraction never fails from the caller's point of view: any error
//! (missing file, corrupt PDF, unreadable bytes) is logged and becomes
//! an empty string.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

/// Source of plain text for a statement document.
pub trait TextExtractor: Send + Sync {
    /// Best-effort plain text; empty on any failure.
    fn extract_text(&self, path: &Path) -> String;
}

/// Reads the file as UTF-8 text (invalid bytes replaced).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        or_empty(path, read_plain(path))
    }
}

/// Dispatches on extension: `.pdf` through `pdf-extract`, everything else as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        let result = if is_pdf(path) {
            read_pdf(path)
        } else {
            read_plain(path)
        };
        or_empty(path, result)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn read_plain(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

fn read_pdf(path: &Path) -> Result<String> {
    // pdf-extract panics on some malformed documents
    let text = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path)))
        .map_err(|_| anyhow!("pdf extraction panicked on {}", path.display()))?
        .map_err(|e| anyhow!("extract text from {}: {e}", path.display()))?;
    Ok(text.trim().to_string())
}

fn or_empty(path: &Path, result: Result<String>) -> String {
    match result {
        Ok(text) => {
            debug!(path = %path.display(), chars = text.len(), "extracted document text");
            text
        }
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "text extraction failed");
            String::new()
        }
    }
}
