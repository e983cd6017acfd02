//! Flat stat record for one module.

use std::collections::BTreeMap;

use super::name::StatName;
use super::value::{IntegerRounding, StatValue};

/// The named characteristics of one module.
///
/// A stat either has a slot (with its subtype) or is absent. Modification
/// only ever rewrites existing slots: see [`StatBlock::update`].
///
/// # Example
/// ```
/// # use engineering_core::stats::{StatBlock, StatName, StatValue};
/// let block = StatBlock::new()
///     .with(StatName::Mass, 16.0)
///     .with(StatName::AmmoClipSize, 90.0);
///
/// assert_eq!(block.get(StatName::AmmoClipSize), Some(StatValue::Int(90)));
/// assert_eq!(block.get(StatName::Damage), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatBlock {
    slots: BTreeMap<StatName, StatValue>,
}

impl StatBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stat (builder pattern), coerced to the stat's declared subtype.
    pub fn with(mut self, name: StatName, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a stat, coerced to the stat's declared subtype.
    ///
    /// This is for building base blocks; the engine never calls it.
    pub fn insert(&mut self, name: StatName, value: f64) -> Option<StatValue> {
        let value = StatValue::from_f64(name.kind(), value, IntegerRounding::Nearest);
        self.slots.insert(name, value)
    }

    /// Insert a value with an explicit subtype.
    pub fn insert_value(&mut self, name: StatName, value: StatValue) -> Option<StatValue> {
        self.slots.insert(name, value)
    }

    /// Rewrite an existing slot, keeping its subtype.
    ///
    /// Returns `(before, after)` or `None` if the stat is absent, in which
    /// case the block is left untouched.
    pub fn update(
        &mut self,
        name: StatName,
        value: f64,
        rounding: IntegerRounding,
    ) -> Option<(StatValue, StatValue)> {
        let slot = self.slots.get_mut(&name)?;
        let before = *slot;
        *slot = before.with_value(value, rounding);
        Some((before, *slot))
    }

    pub fn get(&self, name: StatName) -> Option<StatValue> {
        self.slots.get(&name).copied()
    }

    /// Stat value widened to `f64`.
    pub fn value(&self, name: StatName) -> Option<f64> {
        self.get(name).map(StatValue::as_f64)
    }

    pub fn contains(&self, name: StatName) -> bool {
        self.slots.contains_key(&name)
    }

    /// Present stats in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (StatName, StatValue)> + '_ {
        self.slots.iter().map(|(name, value)| (*name, *value))
    }

    /// Names of the present stats in vocabulary order.
    pub fn names(&self) -> impl Iterator<Item = StatName> + '_ {
        self.slots.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<(StatName, f64)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (StatName, f64)>>(iter: I) -> Self {
        let mut block = Self::new();
        for (name, value) in iter {
            block.insert(name, value);
        }
        block
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.slots.iter())
    }
}

// Numbers are read as f64 and coerced through the stat's declared subtype so
// that `Mass: 2` and `AmmoClipSize: 90.0` both land in the right slot type.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<StatName, f64>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_follows_declared_kind() {
        let block = StatBlock::new()
            .with(StatName::Mass, 2.0)
            .with(StatName::AmmoClipSize, 89.7);

        assert_eq!(block.get(StatName::Mass), Some(StatValue::Float(2.0)));
        assert_eq!(block.get(StatName::AmmoClipSize), Some(StatValue::Int(90)));
    }

    #[test]
    fn update_never_creates_slots() {
        let mut block = StatBlock::new().with(StatName::Mass, 2.0);

        assert_eq!(
            block.update(StatName::Integrity, 50.0, IntegerRounding::Nearest),
            None
        );
        assert!(!block.contains(StatName::Integrity));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn update_preserves_explicit_subtype() {
        let mut block = StatBlock::new();
        block.insert_value(StatName::Mass, StatValue::Int(4));

        let (before, after) = block
            .update(StatName::Mass, 3.4, IntegerRounding::Nearest)
            .unwrap();
        assert_eq!(before, StatValue::Int(4));
        assert_eq!(after, StatValue::Int(3));
    }

    #[test]
    fn iteration_is_in_vocabulary_order() {
        let block: StatBlock = [(StatName::Damage, 1.0), (StatName::Mass, 2.0)]
            .into_iter()
            .collect();
        let names: Vec<StatName> = block.names().collect();
        assert_eq!(names, vec![StatName::Mass, StatName::Damage]);
    }
}
