use serde::{Serialize, Serializer};

/// Identifier of a page normalization rule.
///
/// Variants are declared in pipeline order; `RuleId::ALL` preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    EmailScriptDup,
    StylesheetDup,
    FooterCommentDup,
    InlineNavVerbose,
    InlineNavSimple,
    SharedScripts,
    BlankLines,
}

impl RuleId {
    /// Every rule, in the order the normalizer applies them.
    pub const ALL: [RuleId; 7] = [
        RuleId::EmailScriptDup,
        RuleId::StylesheetDup,
        RuleId::FooterCommentDup,
        RuleId::InlineNavVerbose,
        RuleId::InlineNavSimple,
        RuleId::SharedScripts,
        RuleId::BlankLines,
    ];

    /// Stable external identifier used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::EmailScriptDup => "R-EMAIL-01",
            RuleId::StylesheetDup => "R-CSS-01",
            RuleId::FooterCommentDup => "R-FOOTER-01",
            RuleId::InlineNavVerbose => "R-NAV-01",
            RuleId::InlineNavSimple => "R-NAV-02",
            RuleId::SharedScripts => "R-SHARED-01",
            RuleId::BlankLines => "R-BLANK-01",
        }
    }

    /// Human-readable fix label reported when the rule changes a page.
    pub fn label(&self) -> &'static str {
        match self {
            RuleId::EmailScriptDup => "Removed duplicate email-decode script",
            RuleId::StylesheetDup => "Fixed duplicate CSS imports",
            RuleId::FooterCommentDup => "Removed duplicate footer comment",
            RuleId::InlineNavVerbose => "Removed inline nav scripts (now in vergo-nav.js)",
            RuleId::InlineNavSimple => "Removed simple inline toggleMenu",
            RuleId::SharedScripts => "Added shared component scripts",
            RuleId::BlankLines => "Collapsed excess blank lines",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleId::EmailScriptDup => {
                "Collapse adjacent duplicate Cloudflare email-decode script includes into one."
            }
            RuleId::StylesheetDup => {
                "On hire-staff pages, rewrite a repeated mobile stylesheet sequence to base then mobile."
            }
            RuleId::FooterCommentDup => "Collapse adjacent duplicate <!-- Footer --> markers.",
            RuleId::InlineNavVerbose => {
                "Remove inline scripts defining toggleMenu with optional toggleDropdown and listeners."
            }
            RuleId::InlineNavSimple => "Remove simple single-function inline toggleMenu scripts.",
            RuleId::SharedScripts => {
                "Strip shared script includes and re-insert the canonical block before </body>."
            }
            RuleId::BlankLines => "Collapse runs of four or more newlines to three.",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
