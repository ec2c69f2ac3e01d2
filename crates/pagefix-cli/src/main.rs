use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pagefix_core::config::FixConfig;
use pagefix_core::report::{model::ToolInfo, render};
use pagefix_core::rules::catalog::RuleId;
use pagefix_core::{RULE_CATALOG_VERSION, fix_pages};

mod args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    if args.list_rules {
        print!("{}", render_catalog());
        return Ok(());
    }

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let config = FixConfig {
        dry_run: args.dry_run,
        ..FixConfig::with_root(&args.root)
    };

    debug!(root = %config.root.display(), dry_run = config.dry_run, "starting run");
    let report = fix_pages(&config, tool)?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    std::process::exit(report.summary.exit_code);
}

fn render_catalog() -> String {
    let mut out = format!("rule catalog {RULE_CATALOG_VERSION} (applied in this order)\n");
    for rule in RuleId::ALL {
        out.push_str(&format!("  {:<12} {}\n", rule.as_str(), rule.description()));
    }
    out
}
