//! Shared helpers

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Check that a slug can be used as a path under `tools/`. Slugs may be
/// nested (`text/upper`); each `/`-separated segment is percent-encoded on
/// its own when it goes into a URL. Rejects `.`/`..` segments, which URL
/// path building would drop, and control characters.
pub fn check_slug(slug: &str) -> Result<&str, String> {
    if slug.is_empty() {
        return Err("Empty slug".to_string());
    }
    if let Some(c) = slug.chars().find(|c| c.is_control()) {
        return Err(format!("Control character {:?} in slug: {}", c, slug));
    }
    if slug_segments(slug).any(|segment| segment == "." || segment == "..") {
        return Err(format!("Relative path component in slug: {}", slug));
    }
    Ok(slug)
}

/// `/`-separated segments of a slug, in order
pub fn slug_segments(slug: &str) -> impl Iterator<Item = &str> {
    slug.split('/')
}

/// Write `contents` to `path` via a temp file in the same directory, so
/// readers see either the old file or the complete new one. A symlinked
/// `path` is written through: its target is replaced, the link is kept.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    let target: PathBuf = if is_link {
        // Dangling links fall back to replacing the link itself
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    };
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;

    // Temp files are created 0600; keep the old file's mode, or use 0644
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path)
            .map(|m| m.permissions().mode())
            .unwrap_or(0o644);
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
