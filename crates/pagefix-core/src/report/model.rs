use serde::Serialize;

use crate::SCHEMA_VERSION;
use crate::config::SHARED_SCRIPTS;
use crate::report::summary::{RunSummary, summarize};
use crate::rules::catalog::RuleId;

/// Top-level report for one fixing run.
///
/// Page entries keep the configured page order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub root: String,
    pub dry_run: bool,
    pub pages: Vec<PageReport>,
    pub summary: RunSummary,
    /// Scripts the fixed pages now include; they are expected to exist
    /// next to the pages.
    pub shared_scripts: Vec<String>,
}

impl RunReport {
    pub fn new(tool: ToolInfo, root: String, dry_run: bool, pages: Vec<PageReport>) -> Self {
        let summary = summarize(&pages);
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            root,
            dry_run,
            pages,
            summary,
            shared_scripts: SHARED_SCRIPTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// What happened to one page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PageStatus {
    Fixed,
    Unchanged,
    /// The page does not exist under the run root.
    Skipped,
    Failed { error: String },
}

/// Per-page entry in the run report.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page: String,
    pub status: PageStatus,
    pub rule_ids: Vec<RuleId>,
    /// Fix labels, in application order.
    pub fixes: Vec<String>,
    pub backup: Option<String>,
    pub sha256_before: Option<String>,
    pub sha256_after: Option<String>,
}

impl PageReport {
    fn bare(page: &str, status: PageStatus) -> Self {
        Self {
            page: page.to_string(),
            status,
            rule_ids: vec![],
            fixes: vec![],
            backup: None,
            sha256_before: None,
            sha256_after: None,
        }
    }

    pub fn skipped(page: &str) -> Self {
        Self::bare(page, PageStatus::Skipped)
    }

    pub fn failed(page: &str, error: impl Into<String>) -> Self {
        Self::bare(
            page,
            PageStatus::Failed {
                error: error.into(),
            },
        )
    }

    pub fn unchanged(page: &str, sha256: String) -> Self {
        Self {
            sha256_before: Some(sha256.clone()),
            sha256_after: Some(sha256),
            ..Self::bare(page, PageStatus::Unchanged)
        }
    }

    pub fn fixed(
        page: &str,
        fixes: &[RuleId],
        backup: Option<String>,
        sha256_before: String,
        sha256_after: String,
    ) -> Self {
        Self {
            rule_ids: fixes.to_vec(),
            fixes: fixes.iter().map(|r| r.label().to_string()).collect(),
            backup,
            sha256_before: Some(sha256_before),
            sha256_after: Some(sha256_after),
            ..Self::bare(page, PageStatus::Fixed)
        }
    }
}
