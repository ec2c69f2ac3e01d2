//! Run outcome summary.
//!
//! Counts page outcomes and derives the process exit code:
//!
//!   - Any failed page → 1
//!   - Else            → 0
//!
//! Skipped pages do not fail a run; a missing page is expected on sites
//! that do not carry every known page.

use serde::Serialize;

use crate::report::model::{PageReport, PageStatus};

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub fixed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub exit_code: i32,
}

pub fn summarize(pages: &[PageReport]) -> RunSummary {
    let mut summary = RunSummary::default();

    for page in pages {
        match page.status {
            PageStatus::Fixed => summary.fixed += 1,
            PageStatus::Unchanged => summary.unchanged += 1,
            PageStatus::Skipped => summary.skipped += 1,
            PageStatus::Failed { .. } => summary.failed += 1,
        }
    }

    summary.exit_code = if summary.failed > 0 { 1 } else { 0 };
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_clean() {
        assert_eq!(summarize(&[]), RunSummary::default());
    }

    #[test]
    fn any_failure_sets_exit_code() {
        let pages = vec![
            PageReport::unchanged("index.html", "h".into()),
            PageReport::failed("about.html", "permission denied"),
            PageReport::skipped("blog.html"),
        ];
        let s = summarize(&pages);
        assert_eq!(s.failed, 1);
        assert_eq!(s.unchanged, 1);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.exit_code, 1);
    }

    #[test]
    fn skipped_pages_do_not_fail_the_run() {
        let pages = vec![PageReport::skipped("a.html"), PageReport::skipped("b.html")];
        let s = summarize(&pages);
        assert_eq!(s.skipped, 2);
        assert_eq!(s.exit_code, 0);
    }
}
