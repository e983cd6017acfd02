//! How an experimental effect's delta is blended into a stat.
//!
//! Blend modes are configured as numbers:
//!
//! | value | mode     | result                          |
//! |-------|----------|---------------------------------|
//! | `0`   | replace  | `delta`                         |
//! | `1`   | add      | `current + delta`               |
//! | `N`   | percent  | `current × (1 + delta / N)`     |
//!
//! Stats without an entry use the percent mode with the configured default
//! divisor (100).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::rules::RuleParseError;
use crate::stats::StatName::{self, *};

static BUILTIN: LazyLock<SpecialEffectBlendTable> = LazyLock::new(|| SpecialEffectBlendTable {
    modes: BUILTIN_MODES
        .iter()
        .map(|(stat, mode)| (*stat, *mode))
        .collect(),
});

const BUILTIN_MODES: &[(StatName, BlendMode)] = &[
    (KineticResistance, BlendMode::Add),
    (ThermalResistance, BlendMode::Add),
    (ExplosiveResistance, BlendMode::Add),
    (CausticResistance, BlendMode::Add),
    (HullStrengthBonus, BlendMode::Add),
    (ShieldStrengthBonus, BlendMode::Add),
    (ModuleDefenceAbsorption, BlendMode::Add),
    (Jitter, BlendMode::Add),
    (BreachMin, BlendMode::Add),
    (BreachMax, BlendMode::Add),
    (BurstSize, BlendMode::Add),
    (RoundsPerShot, BlendMode::Replace),
    (AmmoClipSize, BlendMode::Percent(100.0)),
    (AmmoMaximum, BlendMode::Percent(100.0)),
    (InterdictorFacingLimit, BlendMode::Add),
    (ScanAngle, BlendMode::Add),
    (MaxActiveDrones, BlendMode::Add),
    (DroneFuelCapacity, BlendMode::Add),
    (AfmRepairCapacity, BlendMode::Add),
    (Capacity, BlendMode::Add),
];

/// Blend rule for one stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub enum BlendMode {
    Replace,
    Add,
    /// Multiply by `1 + delta / divisor`.
    Percent(f64),
}

impl BlendMode {
    /// Decode the numeric form used in configuration.
    pub fn from_value(stat: StatName, value: f64) -> Result<Self, RuleParseError> {
        Self::decode(value).ok_or(RuleParseError::InvalidBlendMode { stat, value })
    }

    fn decode(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(if value == 0.0 {
            Self::Replace
        } else if value == 1.0 {
            Self::Add
        } else {
            Self::Percent(value)
        })
    }

    /// Numeric form used in configuration.
    pub fn value(self) -> f64 {
        match self {
            Self::Replace => 0.0,
            Self::Add => 1.0,
            Self::Percent(divisor) => divisor,
        }
    }

    pub fn blend(self, current: f64, delta: f64) -> f64 {
        match self {
            Self::Replace => delta,
            Self::Add => current + delta,
            Self::Percent(divisor) => current * (1.0 + delta / divisor),
        }
    }
}

impl TryFrom<f64> for BlendMode {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::decode(value)
            .ok_or_else(|| format!("blend mode must be a finite non-negative number, got {value}"))
    }
}

impl From<BlendMode> for f64 {
    fn from(mode: BlendMode) -> Self {
        mode.value()
    }
}

/// Per-stat blend modes for experimental effects.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpecialEffectBlendTable {
    modes: BTreeMap<StatName, BlendMode>,
}

impl SpecialEffectBlendTable {
    /// The table shipped with the crate, built once on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the numeric configuration form.
    pub fn from_values(
        values: impl IntoIterator<Item = (StatName, f64)>,
    ) -> Result<Self, RuleParseError> {
        let mut table = Self::new();
        for (stat, value) in values {
            table.set(stat, BlendMode::from_value(stat, value)?);
        }
        Ok(table)
    }

    pub fn set(&mut self, stat: StatName, mode: BlendMode) -> Option<BlendMode> {
        self.modes.insert(stat, mode)
    }

    /// Configured mode for `stat`, if it has one.
    pub fn get(&self, stat: StatName) -> Option<BlendMode> {
        self.modes.get(&stat).copied()
    }

    /// Mode for `stat`, falling back to percent with `default_divisor`.
    pub fn mode_or(&self, stat: StatName, default_divisor: f64) -> BlendMode {
        self.get(stat).unwrap_or(BlendMode::Percent(default_divisor))
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
