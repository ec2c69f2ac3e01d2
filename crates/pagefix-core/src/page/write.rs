use anyhow::{Context, Result};
use fs_err as fs;
use std::path::{Path, PathBuf};

/// Path of the backup written next to `page`.
pub fn backup_path(page: &Path, suffix: &str) -> PathBuf {
    let mut name = page.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Save `original` as the page's backup, then overwrite the page with `fixed`.
///
/// The backup is written first so a failed page write never loses the
/// original text. An existing backup is overwritten.
pub fn write_fixed(page: &Path, original: &str, fixed: &str, suffix: &str) -> Result<PathBuf> {
    let backup = backup_path(page, suffix);
    fs::write(&backup, original).with_context(|| format!("write backup {}", backup.display()))?;
    fs::write(page, fixed).with_context(|| format!("write page {}", page.display()))?;
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("site/about.html"), ".bak"),
            PathBuf::from("site/about.html.bak")
        );
    }

    #[test]
    fn writes_backup_then_page() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, "old").unwrap();

        let backup = write_fixed(&page, "old", "new", ".bak").unwrap();

        assert_eq!(backup, dir.path().join("index.html.bak"));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "old");
        assert_eq!(std::fs::read_to_string(&page).unwrap(), "new");
    }

    #[test]
    fn overwrites_existing_backup() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("faq.html");
        std::fs::write(dir.path().join("faq.html.bak"), "stale").unwrap();

        write_fixed(&page, "fresh", "fixed", ".bak").unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("faq.html.bak")).unwrap(),
            "fresh"
        );
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("missing-dir").join("index.html");

        let err = write_fixed(&page, "a", "b", ".bak").unwrap_err();
        assert!(format!("{err:#}").contains("write backup"));
    }
}
