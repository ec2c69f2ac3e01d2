use std::path::PathBuf;

/// Pages the fixer knows about, relative to the site root, in processing order.
pub const PUBLIC_PAGES: [&str; 14] = [
    "index.html",
    "hire-staff.html",
    "hire-us.html",
    "about.html",
    "contact.html",
    "apply.html",
    "jobs.html",
    "job-detail.html",
    "faq.html",
    "pricing.html",
    "blog.html",
    "privacy.html",
    "terms.html",
    "post-job.html",
];

/// Shared scripts the fixed pages include. They must be deployed next to the
/// pages; the fixer does not create or check them.
pub const SHARED_SCRIPTS: [&str; 4] = [
    "vergo-nav.js",
    "vergo-footer.js",
    "vergo-analytics.js",
    "vergo-utils.js",
];

pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// Run configuration for a batch of pages.
#[derive(Debug, Clone)]
pub struct FixConfig {
    /// Directory the page names are resolved against.
    pub root: PathBuf,

    /// Page names to process, in order.
    pub pages: Vec<String>,

    /// Appended to a page path to name its backup.
    pub backup_suffix: String,

    /// Normalize and report without writing anything.
    pub dry_run: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages: PUBLIC_PAGES.iter().map(|p| p.to_string()).collect(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            dry_run: false,
        }
    }
}

impl FixConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_all_public_pages_in_order() {
        let cfg = FixConfig::default();
        assert_eq!(cfg.pages.len(), 14);
        assert_eq!(cfg.pages[0], "index.html");
        assert_eq!(cfg.pages[1], "hire-staff.html");
        assert_eq!(cfg.pages[13], "post-job.html");
        assert_eq!(cfg.backup_suffix, ".bak");
        assert!(!cfg.dry_run);
    }

    #[test]
    fn with_root_keeps_defaults() {
        let cfg = FixConfig::with_root("/srv/public");
        assert_eq!(cfg.root, PathBuf::from("/srv/public"));
        assert_eq!(cfg.pages.len(), PUBLIC_PAGES.len());
    }
}
