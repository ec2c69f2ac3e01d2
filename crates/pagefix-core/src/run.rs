//! Batch driver: applies the normalizer to every configured page.
//!
//! Each page is independent. A page that cannot be read or written is
//! recorded as failed and the batch moves on; the only fatal condition is
//! a root that contains none of the configured pages.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::FixConfig;
use crate::error::FixError;
use crate::normalize::normalize;
use crate::page::read::{read_page, sha256_hex};
use crate::page::write::write_fixed;
use crate::report::model::{PageReport, RunReport, ToolInfo};

/// Normalize every configured page under `config.root`.
///
/// Changed pages are backed up and rewritten unless `config.dry_run` is set.
pub fn fix_pages(config: &FixConfig, tool: ToolInfo) -> Result<RunReport, FixError> {
    let root = config.root.as_path();

    if !config.pages.iter().any(|p| root.join(p).is_file()) {
        return Err(FixError::NoPagesFound {
            root: root.to_path_buf(),
        });
    }

    let pages = config
        .pages
        .iter()
        .map(|page| fix_page(root, page, config))
        .collect();

    Ok(RunReport::new(
        tool,
        root.display().to_string(),
        config.dry_run,
        pages,
    ))
}

fn fix_page(root: &Path, page: &str, config: &FixConfig) -> PageReport {
    let path = root.join(page);

    if !path.is_file() {
        warn!(page, "not found, skipping");
        return PageReport::skipped(page);
    }

    let ctx = match read_page(&path) {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(page, error = %format!("{e:#}"), "read failed");
            return PageReport::failed(page, format!("{e:#}"));
        }
    };

    let normalized = normalize(&ctx.content, page);
    if !normalized.changed {
        debug!(page, "no changes needed");
        return PageReport::unchanged(page, ctx.sha256);
    }

    let backup = if config.dry_run {
        None
    } else {
        match write_fixed(&path, &ctx.content, &normalized.content, &config.backup_suffix) {
            Ok(backup) => Some(backup.display().to_string()),
            Err(e) => {
                warn!(page, error = %format!("{e:#}"), "write failed");
                return PageReport::failed(page, format!("{e:#}"));
            }
        }
    };

    info!(page, fixes = normalized.fixes.len(), dry_run = config.dry_run, "fixed");
    PageReport::fixed(
        page,
        &normalized.fixes,
        backup,
        ctx.sha256,
        sha256_hex(&normalized.content),
    )
}
