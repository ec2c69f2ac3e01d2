//! Rule evaluation over raw page text.
//!
//! Each rule is a pure text transformation. A rule whose trigger is absent
//! returns the input borrowed and unchanged; callers detect a firing rule
//! by comparing its output to its input.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::rules::catalog::RuleId;
use crate::rules::patterns::*;

/// Apply a single rule to `content`.
///
/// `page_id` only gates the stylesheet rule.
pub fn apply<'a>(rule: RuleId, content: &'a str, page_id: &str) -> Cow<'a, str> {
    match rule {
        RuleId::EmailScriptDup => collapse_email_scripts(content),
        RuleId::StylesheetDup => collapse_stylesheets(content, page_id),
        RuleId::FooterCommentDup => collapse_footer_comments(content),
        RuleId::InlineNavVerbose => strip_inline_nav_verbose(content),
        RuleId::InlineNavSimple => strip_inline_nav_simple(content),
        RuleId::SharedScripts => normalize_shared_scripts(content),
        RuleId::BlankLines => collapse_blank_lines(content),
    }
}

pub fn collapse_email_scripts(content: &str) -> Cow<'_, str> {
    replace_until_stable(&EMAIL_DUP_RE, content, EMAIL_DECODE_SCRIPT)
}

pub fn collapse_stylesheets<'a>(content: &'a str, page_id: &str) -> Cow<'a, str> {
    if !page_id.contains(STYLESHEET_PAGE_MARKER) {
        return Cow::Borrowed(content);
    }
    let canonical = format!("{BASE_STYLESHEET}\n  {MOBILE_STYLESHEET}");
    replace_until_stable(&STYLESHEET_DUP_RE, content, &canonical)
}

pub fn collapse_footer_comments(content: &str) -> Cow<'_, str> {
    replace_until_stable(&FOOTER_DUP_RE, content, FOOTER_MARKER)
}

pub fn strip_inline_nav_verbose(content: &str) -> Cow<'_, str> {
    replace_until_stable(&INLINE_NAV_VERBOSE_RE, content, "")
}

pub fn strip_inline_nav_simple(content: &str) -> Cow<'_, str> {
    replace_until_stable(&INLINE_NAV_SIMPLE_RE, content, "")
}

/// Strip every shared script include and re-insert the canonical block
/// before each `</body>`.
///
/// Pages without `</body>` are left alone; no marker is synthesized.
pub fn normalize_shared_scripts(content: &str) -> Cow<'_, str> {
    if !content.contains(BODY_CLOSE) {
        return Cow::Borrowed(content);
    }

    let stripped = SHARED_INCLUDE_RE.replace_all(content, "");
    let rebuilt = BODY_CLOSE_RE.replace_all(&stripped, NoExpand(SHARED_SCRIPT_BLOCK.as_str()));

    if rebuilt == content {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(rebuilt.into_owned())
    }
}

/// At most two blank lines between content.
pub fn collapse_blank_lines(content: &str) -> Cow<'_, str> {
    EXCESS_NEWLINES_RE.replace_all(content, "\n\n\n")
}

/// Replace all matches of `re`, repeating until no match remains.
///
/// A single pass can leave behind a match formed by joining the text
/// around a removed span. Every replacement used here is shorter than the
/// smallest match of its pattern, so the loop terminates.
fn replace_until_stable<'a>(re: &Regex, content: &'a str, replacement: &str) -> Cow<'a, str> {
    if !re.is_match(content) {
        return Cow::Borrowed(content);
    }

    let mut current = re.replace_all(content, NoExpand(replacement)).into_owned();
    while re.is_match(&current) {
        current = re.replace_all(&current, NoExpand(replacement)).into_owned();
    }
    Cow::Owned(current)
}
