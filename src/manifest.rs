//! Tool manifest (`index.json`) loading

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SitemapError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub tools: Vec<ToolRecord>,
}

/// One entry of the manifest's `tools` list. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ToolRecord {
    /// The slug, if present and non-empty
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SitemapError::ManifestNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(SitemapError::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|source| SitemapError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "Loaded {} tool record(s) from {}",
            manifest.tools.len(),
            path.display()
        );
        Ok(manifest)
    }
}
