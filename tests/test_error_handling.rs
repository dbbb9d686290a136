// Failure paths: none of them may touch an existing sitemap
mod common;

use common::{date, write_manifest};
use sitemap_gen::cli::generate::{build_sitemap, run, write_sitemap};
use sitemap_gen::config::Config;
use sitemap_gen::error::SitemapError;
use sitemap_gen::sitemap::Sitemap;
use std::fs;
use tempfile::TempDir;

const PREVIOUS: &str = "<urlset>previous</urlset>\n";

/// Explicit config file so the user's own config dir is never consulted
fn config_file(dir: &TempDir, contents: &str) -> Option<String> {
    let path = dir.path().join("test-config.toml");
    fs::write(&path, contents).unwrap();
    Some(path.to_str().unwrap().to_string())
}

fn site_with_previous_sitemap() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sitemap.xml"), PREVIOUS).unwrap();
    tmp
}

#[test]
fn test_missing_manifest_leaves_sitemap_untouched() {
    let tmp = site_with_previous_sitemap();
    let config = config_file(&tmp, "");
    let result = run(tmp.path().to_str().unwrap().to_string(), config, false);

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("manifest not found"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap(),
        PREVIOUS
    );
}

#[test]
fn test_invalid_json_leaves_sitemap_untouched() {
    let tmp = site_with_previous_sitemap();
    write_manifest(tmp.path(), r#"{"tools": [{"slug": "a",]}"#);
    let config = config_file(&tmp, "");
    let result = run(tmp.path().to_str().unwrap().to_string(), config, false);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid manifest"));
    // Parse position is reported through the error chain
    assert!(format!("{:#}", err).contains("line 1"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap(),
        PREVIOUS
    );
}

#[test]
fn test_manifest_that_is_not_an_object() {
    let tmp = TempDir::new().unwrap();
    write_manifest(tmp.path(), r#"["json-formatter"]"#);
    let err = build_sitemap(tmp.path(), &Config::default(), date("2026-10-19")).unwrap_err();
    assert!(matches!(err, SitemapError::ManifestParse { .. }));
}

#[test]
fn test_manifest_is_a_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("index.json")).unwrap();
    let err = build_sitemap(tmp.path(), &Config::default(), date("2026-10-19")).unwrap_err();
    assert!(matches!(err, SitemapError::ManifestRead { .. }));
}

#[test]
fn test_write_into_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("public").join("sitemap.xml");
    let err = write_sitemap(&Sitemap::default(), &path).unwrap_err();
    assert!(matches!(err, SitemapError::Write { .. }));
    assert!(!path.exists());
}

#[test]
fn test_invalid_base_url_in_config() {
    let tmp = site_with_previous_sitemap();
    write_manifest(tmp.path(), r#"{"tools": []}"#);
    let config = config_file(&tmp, "[site]\nbase_url = \"htmls.dev\"\n");

    let result = run(tmp.path().to_str().unwrap().to_string(), config, false);
    assert!(result.unwrap_err().to_string().contains("invalid URL"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap(),
        PREVIOUS
    );
}
