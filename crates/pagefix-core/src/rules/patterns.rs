//! Markup fragments and compiled patterns used by the page rules.
//!
//! Pages are matched as raw text. Every pattern here is anchored on an
//! exact fragment of the site's markup so that untouched regions of a page
//! are never rewritten.

use regex::Regex;
use std::sync::LazyLock;

/// Cloudflare email-obfuscation decoder include.
pub const EMAIL_DECODE_SCRIPT: &str = r#"<script data-cfasync="false" src="/cdn-cgi/scripts/5c5dd728/cloudflare-static/email-decode.min.js"></script>"#;

pub const BASE_STYLESHEET: &str = r#"<link rel="stylesheet" href="/vergo-styles.css">"#;
pub const MOBILE_STYLESHEET: &str = r#"<link rel="stylesheet" href="/vergo-mobile.css">"#;

pub const FOOTER_MARKER: &str = "<!-- Footer -->";

/// End-of-document marker; anchor for the shared script block.
pub const BODY_CLOSE: &str = "</body>";

/// Page identifiers containing this marker get the stylesheet rule.
pub const STYLESHEET_PAGE_MARKER: &str = "hire-staff";

/// Shared script sources, in the order they are included before `</body>`.
pub const SHARED_SCRIPT_SRCS: [&str; 4] = [
    "/vergo-utils.js",
    "/vergo-nav.js",
    "/vergo-footer.js",
    "/vergo-analytics.js",
];

/// Two or more email-decode includes separated only by whitespace.
pub static EMAIL_DUP_RE: LazyLock<Regex> =
    LazyLock::new(|| adjacent_run(EMAIL_DECODE_SCRIPT));

/// Two or more footer markers separated only by whitespace.
pub static FOOTER_DUP_RE: LazyLock<Regex> = LazyLock::new(|| adjacent_run(FOOTER_MARKER));

/// Mobile stylesheet(s), base stylesheet, then repeated mobile stylesheet(s).
pub static STYLESHEET_DUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mobile = regex::escape(MOBILE_STYLESHEET);
    let base = regex::escape(BASE_STYLESHEET);
    Regex::new(&format!(r"(?:{mobile}\s*)+{base}(?:\s*{mobile})+")).unwrap()
});

/// Inline `toggleMenu` block, optionally followed by `toggleDropdown` and a
/// DOM-ready listener.
///
/// Neither the function body nor the text after it may contain `<`, so a
/// match can never run past the first `</script>` into a later element.
pub static INLINE_NAV_VERBOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<script>\s*(?:'use strict';\s*)?function toggleMenu\(\)\s*\{[^}<]+\}[^<]*(?:function toggleDropdown[^<]*)?(?:document\.addEventListener[^<]*)?\s*</script>",
    )
    .unwrap()
});

/// Single-function inline `toggleMenu` block not caught by the verbose form.
pub static INLINE_NAV_SIMPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<script>\s*function toggleMenu\(\)[^<]+</script>").unwrap()
});

/// Any standalone shared script include, with the whitespace before it.
pub static SHARED_INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let srcs = SHARED_SCRIPT_SRCS
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r#"\s*<script src="(?:{srcs})"></script>"#)).unwrap()
});

/// End-of-document marker with the whitespace before it.
pub static BODY_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\s*{}", regex::escape(BODY_CLOSE))).unwrap());

pub static EXCESS_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{4,}").unwrap());

/// Canonical replacement for `\s*</body>`: newline, the four shared
/// includes indented by two spaces, then the marker.
pub static SHARED_SCRIPT_BLOCK: LazyLock<String> = LazyLock::new(|| {
    let mut block = String::from("\n");
    for src in SHARED_SCRIPT_SRCS {
        block.push_str(&format!("  <script src=\"{src}\"></script>\n"));
    }
    block.push_str(BODY_CLOSE);
    block
});

fn adjacent_run(fragment: &str) -> Regex {
    let escaped = regex::escape(fragment);
    Regex::new(&format!(r"{escaped}(?:\s*{escaped})+")).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        LazyLock::force(&EMAIL_DUP_RE);
        LazyLock::force(&FOOTER_DUP_RE);
        LazyLock::force(&STYLESHEET_DUP_RE);
        LazyLock::force(&INLINE_NAV_VERBOSE_RE);
        LazyLock::force(&INLINE_NAV_SIMPLE_RE);
        LazyLock::force(&SHARED_INCLUDE_RE);
        LazyLock::force(&BODY_CLOSE_RE);
        LazyLock::force(&EXCESS_NEWLINES_RE);
    }

    #[test]
    fn shared_block_lists_scripts_in_order() {
        let block = SHARED_SCRIPT_BLOCK.as_str();
        assert_eq!(
            block,
            "\n  <script src=\"/vergo-utils.js\"></script>\n  <script src=\"/vergo-nav.js\"></script>\n  <script src=\"/vergo-footer.js\"></script>\n  <script src=\"/vergo-analytics.js\"></script>\n</body>"
        );
    }

    #[test]
    fn include_pattern_matches_every_shared_script() {
        for src in SHARED_SCRIPT_SRCS {
            let tag = format!("\n  <script src=\"{src}\"></script>");
            assert!(SHARED_INCLUDE_RE.is_match(&tag), "{src}");
        }
        assert!(!SHARED_INCLUDE_RE.is_match(r#"<script src="/other.js"></script>"#));
    }

    #[test]
    fn single_occurrence_is_not_a_duplicate_run() {
        assert!(!EMAIL_DUP_RE.is_match(EMAIL_DECODE_SCRIPT));
        assert!(!FOOTER_DUP_RE.is_match(FOOTER_MARKER));
    }
}
