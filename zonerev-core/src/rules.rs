//! Directional suffix rules for ids and display names

use std::fmt;
use std::str::FromStr;

/// A single directed suffix replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix to look for
    pub from: &'static str,
    /// Replacement suffix
    pub to: &'static str,
}

impl SuffixRule {
    const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Apply the rule, returning `None` when `value` lacks the suffix.
    pub fn apply(&self, value: &str) -> Option<String> {
        value
            .strip_suffix(self.from)
            .map(|stem| format!("{stem}{}", self.to))
    }
}

/// Compass rules. Each pair is listed in both directions, so a pair is fully
/// checked before the next pair is tried.
const COMPASS_RULES: &[SuffixRule] = &[
    SuffixRule::new("_out", "_in"),
    SuffixRule::new("_in", "_out"),
    SuffixRule::new("_north", "_south"),
    SuffixRule::new("_south", "_north"),
    SuffixRule::new("_east", "_west"),
    SuffixRule::new("_west", "_east"),
    SuffixRule::new(" IN", " OUT"),
    SuffixRule::new(" OUT", " IN"),
    SuffixRule::new(" NORTH", " SOUTH"),
    SuffixRule::new(" SOUTH", " NORTH"),
    SuffixRule::new(" EAST", " WEST"),
    SuffixRule::new(" WEST", " EAST"),
];

const LEGACY_RULES: &[SuffixRule] = &[
    SuffixRule::new("_out", "_in"),
    SuffixRule::new("_in", "_out"),
    SuffixRule::new(" IN", " OUT"),
    SuffixRule::new(" OUT", " IN"),
];

/// Outcome of a suffix fixup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fixup {
    /// A rule matched and produced a new value
    Converted(String),
    /// No rule matched; the caller should keep the value and warn
    Unchanged,
}

impl Fixup {
    /// The converted value, or `original` when nothing matched.
    pub fn into_value(self, original: &str) -> String {
        match self {
            Fixup::Converted(value) => value,
            Fixup::Unchanged => original.to_string(),
        }
    }

    /// Whether a rule matched
    pub fn is_converted(&self) -> bool {
        matches!(self, Fixup::Converted(_))
    }
}

/// Suffix rule profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// `_in`/`_out`, `_north`/`_south`, `_east`/`_west` and their
    /// upper-case, space-prefixed display forms
    #[default]
    Compass,
    /// Only `_in`/`_out` and ` IN`/` OUT`
    Legacy,
}

impl RuleSet {
    /// Ordered rules for this profile
    pub fn rules(&self) -> &'static [SuffixRule] {
        match self {
            RuleSet::Compass => COMPASS_RULES,
            RuleSet::Legacy => LEGACY_RULES,
        }
    }

    /// Swap the directional suffix of `value` using the first matching rule.
    pub fn fixup(&self, value: &str) -> Fixup {
        self.rules()
            .iter()
            .find_map(|rule| rule.apply(value))
            .map_or(Fixup::Unchanged, Fixup::Converted)
    }

    /// Profile name as accepted by [`RuleSet::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            RuleSet::Compass => "compass",
            RuleSet::Legacy => "legacy",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compass" => Ok(RuleSet::Compass),
            "legacy" => Ok(RuleSet::Legacy),
            other => Err(format!(
                "unknown rule set '{other}' (expected 'compass' or 'legacy')"
            )),
        }
    }
}
