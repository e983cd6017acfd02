//! Modifier rule table.
//!
//! Maps each modifier label the crafting system emits to the stats it
//! changes. The first target of a rule is the **primary**: its new value is
//! the modifier's value. Every further target is a **secondary**: it is
//! scaled by the modifier's ratio (or divided by it when inverted).
//!
//! ```text
//! RateOfFire ─┬─ RateOfFire        (primary, set to Value)
//!             ├─ DamagePerSecond   (× ratio)
//!             └─ BurstInterval     (÷ ratio, unless hpt_railgun*)
//! ```

mod builtin;
pub mod condition;
mod error;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::stats::StatName;

pub use condition::{Condition, ConditionSense, ItemContext, wildcard_match};
pub use error::RuleParseError;

static BUILTIN: LazyLock<ModifierRuleTable> = LazyLock::new(builtin::modifier_rules);

/// One stat a modifier rule writes to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    pub stat: StatName,

    /// Secondary propagation divides by the ratio instead of multiplying.
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert: bool,

    /// All conditions must permit the target for it to be applied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exceptions: Vec<Condition>,
}

impl TargetSpec {
    pub fn new(stat: StatName) -> Self {
        Self {
            stat,
            invert: false,
            exceptions: Vec::new(),
        }
    }

    /// Divide by the ratio when propagating (builder pattern).
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Add an exception condition (builder pattern).
    pub fn when(mut self, condition: Condition) -> Self {
        self.exceptions.push(condition);
        self
    }

    /// Whether every exception permits this target on the given item.
    pub fn permits(&self, item: &ItemContext<'_>) -> bool {
        self.exceptions.iter().all(|c| c.permits(item))
    }

    /// Scale `current` by a secondary ratio.
    pub fn propagate(&self, current: f64, ratio: f64) -> f64 {
        if self.invert {
            current / ratio
        } else {
            current * ratio
        }
    }
}

/// Targets for one modifier label, primary first.
///
/// Always holds at least one target; construct through [`ModifierRule::new`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawModifierRule"))]
pub struct ModifierRule {
    label: String,
    targets: Vec<TargetSpec>,
}

impl ModifierRule {
    pub fn new(label: impl Into<String>, targets: Vec<TargetSpec>) -> Result<Self, RuleParseError> {
        let label = label.into();
        if targets.is_empty() {
            return Err(RuleParseError::EmptyRule(label));
        }
        Ok(Self { label, targets })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every target, primary first.
    pub fn targets(&self) -> &[TargetSpec] {
        &self.targets
    }

    pub fn primary(&self) -> &TargetSpec {
        &self.targets[0]
    }

    pub fn secondaries(&self) -> &[TargetSpec] {
        &self.targets[1..]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawModifierRule {
    label: String,
    targets: Vec<TargetSpec>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawModifierRule> for ModifierRule {
    type Error = RuleParseError;

    fn try_from(raw: RawModifierRule) -> Result<Self, Self::Error> {
        Self::new(raw.label, raw.targets)
    }
}

/// Case-insensitive lookup from modifier label to [`ModifierRule`].
#[derive(Clone, Debug, Default)]
pub struct ModifierRuleTable {
    rules: HashMap<String, ModifierRule>,
}

impl ModifierRuleTable {
    /// The table shipped with the crate, built once on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rules; a later rule for the same label replaces an
    /// earlier one.
    pub fn from_rules(rules: impl IntoIterator<Item = ModifierRule>) -> Self {
        let mut table = Self::new();
        for rule in rules {
            table.insert(rule);
        }
        table
    }

    /// Insert a rule, returning the one it replaced.
    pub fn insert(&mut self, rule: ModifierRule) -> Option<ModifierRule> {
        let replaced = self.rules.insert(rule.label.to_ascii_lowercase(), rule);
        if let Some(old) = &replaced {
            tracing::debug!("modifier rule `{}` replaced", old.label);
        }
        replaced
    }

    pub fn get(&self, label: &str) -> Option<&ModifierRule> {
        self.rules.get(&label.to_ascii_lowercase())
    }

    /// The primary stat of the rule for `label`.
    pub fn primary_stat(&self, label: &str) -> Option<StatName> {
        self.get(label).map(|rule| rule.primary().stat)
    }

    /// All rules, in no particular order.
    pub fn rules(&self) -> impl Iterator<Item = &ModifierRule> + '_ {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
