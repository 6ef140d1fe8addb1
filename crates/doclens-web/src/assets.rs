//! Embedded front-end assets.
//!
//! The served bytes are compiled in. [`write_assets`] additionally
//! materializes them on disk at server start so they can be inspected,
//! leaving files that already exist untouched.

use anyhow::Result;
use std::path::Path;

pub const INDEX_HTML: &str = include_str!("../../../assets/web/index.html");
pub const STYLE_CSS: &str = include_str!("../../../assets/web/style.css");
pub const SCRIPT_JS: &str = include_str!("../../../assets/web/script.js");

/// Write the front-end files under `root`, skipping any that exist.
/// Returns the paths written.
pub fn write_assets(root: &Path) -> Result<Vec<String>> {
    let files = [
        ("templates/index.html", INDEX_HTML),
        ("static/style.css", STYLE_CSS),
        ("static/script.js", SCRIPT_JS),
    ];

    let mut written = Vec::new();

    for (rel, content) in files {
        let path = root.join(rel);
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        written.push(path.display().to_string());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_assets_creates_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_assets(dir.path()).unwrap();

        assert_eq!(written.len(), 3);
        let index = dir.path().join("templates/index.html");
        assert_eq!(std::fs::read_to_string(&index).unwrap(), INDEX_HTML);
        assert!(dir.path().join("static/style.css").exists());
        assert!(dir.path().join("static/script.js").exists());
    }

    #[test]
    fn test_write_assets_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let index = dir.path().join("templates/index.html");
        std::fs::create_dir_all(index.parent().unwrap()).unwrap();
        std::fs::write(&index, "customized").unwrap();

        let written = write_assets(dir.path()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read_to_string(&index).unwrap(), "customized");
    }

    #[test]
    fn test_write_assets_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path()).unwrap();
        let written = write_assets(dir.path()).unwrap();
        assert!(written.is_empty());
    }
}
