//! Engineering engine: applies modifiers and an experimental effect to a
//! base stat block.
//!
//! # Passes
//!
//! ```text
//! base ──clone──▶ result
//!                  │ 1. footprint: primary stat of every resolvable modifier,
//!                  │    text entries included
//!                  │ 2. modifiers: numeric entries only; primaries set,
//!                  │    secondaries scale by ratio
//!                  │ 3. effect:    blend deltas, skipping primary stats
//!                  ▼
//!               outcome
//! ```
//!
//! The engine is lenient: unknown labels, stats the item does not have and
//! unknown effects are reported as [`EngineeringWarning`]s and skipped, never
//! raised as errors. The base block is never mutated and the result always
//! has exactly the base block's stat slots.

mod report;
mod warning;

use std::collections::BTreeSet;

use crate::blend::SpecialEffectBlendTable;
use crate::config::EngineeringConfig;
use crate::effects::{EffectCatalog, SpecialEffectOracle};
use crate::modifier::ModifierEntry;
use crate::rules::{ItemContext, ModifierRuleTable};
use crate::stats::{StatBlock, StatName};

pub use report::{ChangeSource, EngineeringOutcome, StatChange};
pub use warning::EngineeringWarning;

/// Applies engineering modifiers using a rule table, a blend table and an
/// effect catalog.
///
/// Holds only shared references to immutable tables, so one engine can serve
/// any number of threads.
///
/// # Example
/// ```
/// # use engineering_core::{EngineeringEngine, ModifierEntry, StatBlock, StatName};
/// let base = StatBlock::new()
///     .with(StatName::DamagePerSecond, 23.299664)
///     .with(StatName::Damage, 3.46);
/// let modifiers = [ModifierEntry::new("DamagePerSecond", 38.12291, 23.299664)];
///
/// let engine = EngineeringEngine::builtin();
/// let result = engine.apply(&base, &modifiers, None, "hpt_multicannon_gimbal_huge", "");
///
/// assert_eq!(result.value(StatName::DamagePerSecond), Some(38.12291));
/// assert!((result.value(StatName::Damage).unwrap() - 5.661).abs() < 0.01);
/// ```
#[derive(Clone, Copy)]
pub struct EngineeringEngine<'a> {
    rules: &'a ModifierRuleTable,
    blends: &'a SpecialEffectBlendTable,
    effects: &'a dyn SpecialEffectOracle,
    config: &'a EngineeringConfig,
}

static DEFAULT_CONFIG: EngineeringConfig = EngineeringConfig::new();

impl EngineeringEngine<'static> {
    /// Engine over the built-in tables and default configuration.
    pub fn builtin() -> Self {
        Self {
            rules: ModifierRuleTable::builtin(),
            blends: SpecialEffectBlendTable::builtin(),
            effects: EffectCatalog::builtin(),
            config: &DEFAULT_CONFIG,
        }
    }
}

impl<'a> EngineeringEngine<'a> {
    pub fn new(
        rules: &'a ModifierRuleTable,
        blends: &'a SpecialEffectBlendTable,
        effects: &'a dyn SpecialEffectOracle,
        config: &'a EngineeringConfig,
    ) -> Self {
        Self {
            rules,
            blends,
            effects,
            config,
        }
    }

    pub fn with_rules(mut self, rules: &'a ModifierRuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_blends(mut self, blends: &'a SpecialEffectBlendTable) -> Self {
        self.blends = blends;
        self
    }

    pub fn with_effects(mut self, effects: &'a dyn SpecialEffectOracle) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_config(mut self, config: &'a EngineeringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rules(&self) -> &'a ModifierRuleTable {
        self.rules
    }

    pub fn config(&self) -> &'a EngineeringConfig {
        self.config
    }

    /// Compute the engineered stat block.
    ///
    /// * `special_effect` - experimental effect id; `None` or empty skips
    ///   the effect pass
    /// * `item_type` / `blueprint` - only used to evaluate rule exceptions
    pub fn apply(
        &self,
        base: &StatBlock,
        modifiers: &[ModifierEntry],
        special_effect: Option<&str>,
        item_type: &str,
        blueprint: &str,
    ) -> StatBlock {
        self.apply_with_report(base, modifiers, special_effect, item_type, blueprint)
            .stats
    }

    /// Compute the engineered stat block along with every change and warning.
    pub fn apply_with_report(
        &self,
        base: &StatBlock,
        modifiers: &[ModifierEntry],
        special_effect: Option<&str>,
        item_type: &str,
        blueprint: &str,
    ) -> EngineeringOutcome {
        let mut pass = Pass {
            outcome: EngineeringOutcome {
                stats: base.clone(),
                ..EngineeringOutcome::default()
            },
            item: ItemContext::new(item_type, blueprint, modifiers),
            primary_touched: BTreeSet::new(),
        };

        self.collect_primaries(&mut pass);
        self.apply_modifiers(&mut pass);
        if let Some(id) = special_effect.filter(|id| !id.is_empty()) {
            self.apply_special_effect(&mut pass, id);
        }

        tracing::debug!(
            "engineered `{}`: {} change(s), {} warning(s)",
            item_type,
            pass.outcome.changes.len(),
            pass.outcome.warnings.len()
        );
        pass.outcome
    }

    // Text entries are part of the footprint.
    fn collect_primaries(&self, pass: &mut Pass<'_>) {
        let modifiers = pass.item.modifiers;
        for entry in modifiers {
            match self.rules.get(&entry.label) {
                Some(rule) => {
                    pass.primary_touched.insert(rule.primary().stat);
                }
                None => pass.warn(EngineeringWarning::UnknownModifier {
                    label: entry.label.clone(),
                    item_type: pass.item.item_type.to_owned(),
                }),
            }
        }
    }

    fn apply_modifiers(&self, pass: &mut Pass<'_>) {
        let modifiers = pass.item.modifiers;
        for entry in modifiers.iter().filter(|m| m.is_numeric()) {
            // Unknown labels were reported while collecting primaries.
            let Some(rule) = self.rules.get(&entry.label) else {
                continue;
            };

            let ratio = entry.ratio();
            if !ratio.is_finite() {
                tracing::debug!(
                    "modifier `{}` has non-finite ratio {} ({} / {})",
                    entry.label,
                    ratio,
                    entry.value,
                    entry.original_value
                );
            }

            for (index, target) in rule.targets().iter().enumerate() {
                let primary = index == 0;

                if !primary && pass.primary_touched.contains(&target.stat) {
                    tracing::trace!(
                        "{} set by a primary modifier, skipping {} propagation",
                        target.stat,
                        entry.label
                    );
                    continue;
                }

                if !target.permits(&pass.item) {
                    tracing::trace!("{} excluded for `{}`", target.stat, entry.label);
                    continue;
                }

                let Some(current) = pass.outcome.stats.value(target.stat) else {
                    pass.warn(EngineeringWarning::MissingStat {
                        label: entry.label.clone(),
                        stat: target.stat,
                        item_type: pass.item.item_type.to_owned(),
                    });
                    continue;
                };

                let (value, source, improved) = if primary {
                    (
                        entry.value,
                        ChangeSource::Primary {
                            label: entry.label.clone(),
                        },
                        Some(entry.is_improvement()),
                    )
                } else {
                    (
                        target.propagate(current, ratio),
                        ChangeSource::Secondary {
                            label: entry.label.clone(),
                        },
                        None,
                    )
                };

                self.write(pass, target.stat, value, source, improved);
            }
        }
    }

    fn apply_special_effect(&self, pass: &mut Pass<'_>, id: &str) {
        let Some(effect) = self.effects.effect(id) else {
            pass.warn(EngineeringWarning::UnknownSpecialEffect {
                id: id.to_owned(),
                item_type: pass.item.item_type.to_owned(),
            });
            return;
        };

        for (stat, delta) in effect.deltas() {
            if pass.primary_touched.contains(&stat) {
                tracing::trace!("{} set by a primary modifier, skipping effect `{}`", stat, id);
                continue;
            }

            let Some(current) = pass.outcome.stats.value(stat) else {
                pass.warn(EngineeringWarning::MissingEffectStat {
                    id: id.to_owned(),
                    stat,
                    item_type: pass.item.item_type.to_owned(),
                });
                continue;
            };

            let mode = self
                .blends
                .mode_or(stat, self.config.default_blend_divisor());
            let source = ChangeSource::SpecialEffect { id: id.to_owned() };
            self.write(pass, stat, mode.blend(current, delta), source, None);
        }
    }

    fn write(
        &self,
        pass: &mut Pass<'_>,
        stat: StatName,
        value: f64,
        source: ChangeSource,
        improved: Option<bool>,
    ) {
        if let Some((before, after)) =
            pass.outcome
                .stats
                .update(stat, value, self.config.integer_rounding())
        {
            pass.outcome.changes.push(StatChange {
                stat,
                before,
                after,
                source,
                improved,
            });
        }
    }
}

impl core::fmt::Debug for EngineeringEngine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineeringEngine")
            .field("rules", &self.rules.len())
            .field("blends", &self.blends.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// Working state of one `apply` call.
struct Pass<'m> {
    outcome: EngineeringOutcome,
    item: ItemContext<'m>,
    primary_touched: BTreeSet<StatName>,
}

impl Pass<'_> {
    fn warn(&mut self, warning: EngineeringWarning) {
        tracing::warn!("{}", warning);
        self.outcome.warnings.push(warning);
    }
}
