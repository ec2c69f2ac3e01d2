//! Fatal errors for a fixing run.
//!
//! Per-page failures are not errors at this level: they are recorded in the
//! run report and the batch continues.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    /// None of the configured pages exist; nothing was touched.
    #[error("no known pages found in {}; run from the site's public directory", .root.display())]
    NoPagesFound { root: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_found_names_the_directory() {
        let err = FixError::NoPagesFound {
            root: PathBuf::from("/tmp/site"),
        };
        let msg = err.to_string();
        assert!(msg.contains("no known pages found"));
        assert!(msg.contains("/tmp/site"));
    }
}
