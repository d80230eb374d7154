//! Document Cache — extracts the résumé text once and serves it read-only.
//!
//! PDFs go through `pdf-extract`; `.txt` / `.md` files are read verbatim.
//! Initialization is guarded by a `OnceCell`, so concurrent first requests
//! trigger a single extraction.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error reading document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error extracting text from {path}: {message}")]
    Extraction { path: PathBuf, message: String },
}

pub struct DocumentCache {
    path: PathBuf,
    text: OnceCell<String>,
}

impl DocumentCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: OnceCell::new(),
        }
    }

    /// A cache that is already loaded. Used by tests and callers that hold the text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            text: OnceCell::new_with(Some(text.into())),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.text.initialized()
    }

    /// Returns the cached text, extracting it on first call. A failed
    /// extraction leaves the cache empty so the next call retries.
    pub async fn text(&self) -> Result<&str, DocumentError> {
        let text = self
            .text
            .get_or_try_init(|| extract_document(self.path.clone()))
            .await?;
        Ok(text.as_str())
    }
}

async fn extract_document(path: PathBuf) -> Result<String, DocumentError> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| DocumentError::Io {
        path: path.clone(),
        source,
    })?;

    let text = if is_plain_text(&path) {
        String::from_utf8(bytes).map_err(|e| DocumentError::Extraction {
            path: path.clone(),
            message: e.to_string(),
        })?
    } else {
        let pdf_path = path.clone();
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| DocumentError::Extraction {
                path: pdf_path.clone(),
                message: e.to_string(),
            })?
            .map_err(|e| DocumentError::Extraction {
                path: pdf_path,
                message: e.to_string(),
            })?
    };

    info!(
        "Loaded document {} ({} chars)",
        path.display(),
        text.chars().count()
    );
    Ok(text)
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "txt" | "md" | "markdown"))
        .unwrap_or(false)
}
