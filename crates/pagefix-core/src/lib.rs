pub mod config;
pub mod error;
pub mod normalize;
pub mod page;
pub mod report;
pub mod rules;
pub mod run;

pub use error::FixError;
pub use normalize::{Normalized, normalize};
pub use run::fix_pages;

/// JSON schema version of run reports.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub const RULE_CATALOG_VERSION: &str = "0.1.0";
