//! Exception conditions attached to rule targets.
//!
//! A condition is written `+text` (apply only if `text` holds) or `-text`
//! (apply only if it does not). `text` holds for an item when it is
//!
//! 1. the label of a modifier on the same item (case-insensitive),
//! 2. a wildcard pattern matching the item's internal type name, or
//! 3. the item's blueprint name (case-insensitive).

use core::str::FromStr;

use crate::modifier::ModifierEntry;

use super::error::RuleParseError;

/// What the item being engineered looks like to a condition.
#[derive(Clone, Copy, Debug)]
pub struct ItemContext<'a> {
    pub item_type: &'a str,
    pub blueprint: &'a str,
    pub modifiers: &'a [ModifierEntry],
}

impl<'a> ItemContext<'a> {
    pub fn new(item_type: &'a str, blueprint: &'a str, modifiers: &'a [ModifierEntry]) -> Self {
        Self {
            item_type,
            blueprint,
            modifiers,
        }
    }

    fn has_modifier(&self, label: &str) -> bool {
        self.modifiers.iter().any(|m| m.has_label(label))
    }
}

/// Whether a condition must hold (`+`) or must not hold (`-`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionSense {
    Require,
    Forbid,
}

impl ConditionSense {
    const fn sign(self) -> char {
        match self {
            Self::Require => '+',
            Self::Forbid => '-',
        }
    }
}

/// One signed exception condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Condition {
    pub sense: ConditionSense,
    pub text: String,
}

impl Condition {
    pub fn require(text: impl Into<String>) -> Self {
        Self {
            sense: ConditionSense::Require,
            text: text.into(),
        }
    }

    pub fn forbid(text: impl Into<String>) -> Self {
        Self {
            sense: ConditionSense::Forbid,
            text: text.into(),
        }
    }

    /// Whether the condition text matches the item.
    pub fn holds(&self, item: &ItemContext<'_>) -> bool {
        item.has_modifier(&self.text)
            || wildcard_match(&self.text, item.item_type)
            || item.blueprint.eq_ignore_ascii_case(&self.text)
    }

    /// Whether the target guarded by this condition may be applied.
    pub fn permits(&self, item: &ItemContext<'_>) -> bool {
        match self.sense {
            ConditionSense::Require => self.holds(item),
            ConditionSense::Forbid => !self.holds(item),
        }
    }
}

impl FromStr for Condition {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sense, text) = match s.chars().next() {
            Some('+') => (ConditionSense::Require, &s[1..]),
            Some('-') => (ConditionSense::Forbid, &s[1..]),
            _ => return Err(RuleParseError::MissingSign(s.to_owned())),
        };
        let text = text.trim();
        if text.is_empty() {
            return Err(RuleParseError::EmptyCondition(s.to_owned()));
        }
        Ok(Self {
            sense,
            text: text.to_owned(),
        })
    }
}

impl TryFrom<String> for Condition {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

impl core::fmt::Display for Condition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.sense.sign(), self.text)
    }
}

/// Case-insensitive glob match supporting `*` (any run) and `?` (one char).
///
/// A pattern without wildcards is a plain case-insensitive comparison.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().flat_map(char::to_lowercase).collect();
    let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

    let (mut p, mut t) = (0, 0);
    // Last `*` seen and the text position it is currently absorbing up to.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match star {
                Some((star_p, star_t)) => {
                    p = star_p + 1;
                    t = star_t + 1;
                    star = Some((star_p, star_t + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
