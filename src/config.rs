use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.htmls.dev";
pub const DEFAULT_CONTRIBUTING_URL: &str =
    "https://github.com/justhtmls/html-tools/blob/main/CONTRIBUTING.md";
pub const DEFAULT_MANIFEST: &str = "index.json";
pub const DEFAULT_OUTPUT: &str = "sitemap.xml";

/// Per-site config file name, looked up in the site root
pub const SITE_CONFIG_FILE: &str = "sitemap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin of the site, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the contributing-guide entry points (the guide lives in the repo, not on the site)
    #[serde(default = "default_contributing_url")]
    pub contributing_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Manifest path, relative to the site root unless absolute
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Output path, relative to the site root unless absolute
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            contributing_url: default_contributing_url(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            output: default_output(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_contributing_url() -> String {
    DEFAULT_CONTRIBUTING_URL.to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl PathsConfig {
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

impl Config {
    /// Load config for the site at `root`: explicit path, then
    /// `<root>/sitemap.toml`, then the user config directory, then defaults.
    /// A config file that exists but cannot be parsed is an error.
    pub fn load_with_path(root: &Path, path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path.display());
            return Self::load_from_path(config_path);
        }

        let site_config = root.join(SITE_CONFIG_FILE);
        if site_config.is_file() {
            debug!("Loaded config from {}", site_config.display());
            return Self::load_from_path(&site_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sitemap-gen").join("config.toml");
            if user_config.is_file() {
                debug!("Loaded config from {}", user_config.display());
                return Self::load_from_path(&user_config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}
