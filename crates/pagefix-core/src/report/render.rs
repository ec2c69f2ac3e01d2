use crate::report::model::{PageStatus, RunReport};

pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", report.tool.name, report.tool.version));
    out.push_str(&format!("Processing pages in {}", report.root));
    if report.dry_run {
        out.push_str(" (dry run)");
    }
    out.push_str("\n\n");

    for page in &report.pages {
        match &page.status {
            PageStatus::Fixed => {
                out.push_str(&format!("  fixed     {}\n", page.page));
                for fix in &page.fixes {
                    out.push_str(&format!("      - {fix}\n"));
                }
            }
            PageStatus::Unchanged => {
                out.push_str(&format!("  ok        {} (no changes needed)\n", page.page));
            }
            PageStatus::Skipped => {
                out.push_str(&format!("  skipped   {} (not found, skipping)\n", page.page));
            }
            PageStatus::Failed { error } => {
                out.push_str(&format!("  failed    {}: {error}\n", page.page));
            }
        }
    }

    out.push('\n');
    let verb = if report.dry_run { "Would fix" } else { "Fixed" };
    out.push_str(&format!("{verb} {} files\n", report.summary.fixed));
    if report.summary.failed > 0 {
        out.push_str(&format!("Failed {} files\n", report.summary.failed));
    }
    if !report.dry_run && report.summary.fixed > 0 {
        out.push_str("Backups saved as *.bak\n");
    }

    out.push_str("\nMake sure these files exist alongside the pages:\n");
    for script in &report.shared_scripts {
        out.push_str(&format!("  - {script}\n"));
    }
    out
}
