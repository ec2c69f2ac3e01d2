//! Idempotent page normalizer.
//!
//! Threads a page through every rule in `RuleId::ALL` order. One pass is
//! not always a fixed point: stripping shared includes can bring two
//! duplicate tags together that an earlier rule already looked at. The
//! normalizer therefore repeats the pass until nothing changes, so that
//! normalizing its own output is always a no-op.
//!
//! The loop terminates: every rule other than the shared-script block
//! strictly shortens the page, the block rewrite is a projection, and no
//! rule adds or removes a `</body>` marker.

use std::borrow::Cow;

use tracing::debug;

use crate::rules::catalog::RuleId;
use crate::rules::eval;

/// Result of normalizing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub content: String,
    /// Rules that changed the page, each once, in first-application order.
    pub fixes: Vec<RuleId>,
    pub changed: bool,
}

impl Normalized {
    pub fn labels(&self) -> Vec<&'static str> {
        self.fixes.iter().map(|r| r.label()).collect()
    }
}

/// Normalize `content`. `page_id` gates page-specific rules.
///
/// Pure and total: never touches storage, never fails.
pub fn normalize(content: &str, page_id: &str) -> Normalized {
    let mut current = content.to_string();
    let mut fixes: Vec<RuleId> = Vec::new();

    for pass in 1usize.. {
        let mut pass_changed = false;

        for rule in RuleId::ALL {
            let next = match eval::apply(rule, &current, page_id) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            if next == current {
                continue;
            }

            debug!(page = page_id, rule = %rule, pass, "rule applied");
            if !fixes.contains(&rule) {
                fixes.push(rule);
            }
            current = next;
            pass_changed = true;
        }

        if !pass_changed {
            break;
        }
    }

    let changed = current != content;
    Normalized {
        content: current,
        fixes,
        changed,
    }
}
