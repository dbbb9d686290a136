//! Error types for sitemap generation

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SitemapError>;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read manifest {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest exists but is not valid JSON (or has wrongly typed fields)
    #[error("invalid manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configured site or repository URL that cannot be used as an absolute `loc`
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
