//! What an engineering pass changed.

use crate::stats::{StatBlock, StatName, StatValue};

use super::warning::EngineeringWarning;

/// Why a stat changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ChangeSource {
    /// Set directly by the modifier with this label.
    Primary { label: String },
    /// Scaled by the ratio of the modifier with this label.
    Secondary { label: String },
    /// Blended in from this experimental effect.
    SpecialEffect { id: String },
}

/// One write to the result block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatChange {
    pub stat: StatName,
    pub before: StatValue,
    pub after: StatValue,
    pub source: ChangeSource,
    /// For primary changes, whether the modifier counts as an improvement
    /// (taking less-is-good into account).
    pub improved: Option<bool>,
}

impl core::fmt::Display for StatChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {} -> {}", self.stat, self.before, self.after)?;
        match &self.source {
            ChangeSource::Primary { label } => write!(f, " ({label})")?,
            ChangeSource::Secondary { label } => write!(f, " (via {label})")?,
            ChangeSource::SpecialEffect { id } => write!(f, " ({id})")?,
        }
        match self.improved {
            Some(true) => write!(f, " better"),
            Some(false) => write!(f, " worse"),
            None => Ok(()),
        }
    }
}

/// Result block plus the trail of changes and warnings that produced it.
///
/// Serializes for reporting only; outcomes are not read back.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EngineeringOutcome {
    pub stats: StatBlock,
    pub changes: Vec<StatChange>,
    pub warnings: Vec<EngineeringWarning>,
}

impl EngineeringOutcome {
    /// The last change written to `stat`, if any.
    pub fn last_change(&self, stat: StatName) -> Option<&StatChange> {
        self.changes.iter().rev().find(|c| c.stat == stat)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
