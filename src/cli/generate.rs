use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::dates;
use crate::error::SitemapError;
use crate::manifest::Manifest;
use crate::sitemap::{Sitemap, SitemapBuilder};
use crate::util::write_atomic;

/// Load the manifest and build the sitemap for the site at `root`.
/// Nothing is written.
pub fn build_sitemap(
    root: &Path,
    config: &Config,
    today: NaiveDate,
) -> Result<Sitemap, SitemapError> {
    let manifest = Manifest::load(&config.paths.manifest_path(root))?;
    let builder = SitemapBuilder::new(root, &config.site, today)?;
    Ok(builder.build(&manifest))
}

/// Replace `path` with the rendered sitemap.
pub fn write_sitemap(sitemap: &Sitemap, path: &Path) -> Result<(), SitemapError> {
    let xml = sitemap.to_xml();
    write_atomic(path, xml.as_bytes()).map_err(|source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run(path: String, config_path: Option<String>, dry_run: bool) -> Result<()> {
    let root = Path::new(&path);
    info!("Site root: {}", root.display());

    let config = Config::load_with_path(root, config_path.as_deref().map(Path::new))?;
    let output: PathBuf = config.paths.output_path(root);
    info!("Manifest: {}", config.paths.manifest_path(root).display());
    info!("Output: {}", output.display());

    let sitemap = build_sitemap(root, &config, dates::today())?;
    info!("Collected {} URL(s)", sitemap.len());

    if dry_run {
        print!("{}", sitemap.to_xml());
        return Ok(());
    }

    write_sitemap(&sitemap, &output)?;

    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| output.display().to_string());
    println!("✓ Generated {}", name);
    println!("  - URLs: {}", sitemap.len());
    println!("  - Path: {}", output.display());
    Ok(())
}
