//! Applied engineering modifiers.

/// One modifier applied to a module by the crafting system.
///
/// Numeric modifiers carry the new value and the value it replaced; their
/// ratio drives propagation to secondary stats. Text modifiers (`value_str`
/// set, e.g. a damage-type tag) are display-only.
///
/// The serde form matches the persisted record: `Label`, `Value`,
/// `OriginalValue`, optional `ValueStr`, and `LessIsGood` written as `0`/`1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct ModifierEntry {
    pub label: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub value: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub original_value: f64,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value_str: Option<String>,

    /// Advisory only: a lower value is the improvement. Never affects the
    /// arithmetic.
    #[cfg_attr(feature = "serde", serde(default, with = "flag_as_int"))]
    pub less_is_good: bool,
}

impl ModifierEntry {
    /// Numeric modifier.
    pub fn new(label: impl Into<String>, value: f64, original_value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            original_value,
            value_str: None,
            less_is_good: false,
        }
    }

    /// Text-valued modifier with no numeric effect.
    pub fn text(label: impl Into<String>, value_str: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0.0,
            original_value: 0.0,
            value_str: Some(value_str.into()),
            less_is_good: false,
        }
    }

    /// Mark the modifier as less-is-good (builder pattern).
    pub fn less_is_good(mut self, less_is_good: bool) -> Self {
        self.less_is_good = less_is_good;
        self
    }

    /// Returns true unless a non-empty `value_str` makes this display-only.
    pub fn is_numeric(&self) -> bool {
        self.value_str.as_deref().is_none_or(str::is_empty)
    }

    /// `value / original_value`.
    ///
    /// A zero original value yields whatever IEEE-754 division gives
    /// (`±∞` or `NaN`); callers propagate it unchanged.
    pub fn ratio(&self) -> f64 {
        self.value / self.original_value
    }

    /// Whether the change from `original_value` to `value` is an improvement.
    pub fn is_improvement(&self) -> bool {
        if self.less_is_good {
            self.value < self.original_value
        } else {
            self.value > self.original_value
        }
    }

    /// Case-insensitive label comparison.
    pub fn has_label(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
    }
}

#[cfg(feature = "serde")]
mod flag_as_int {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Int(i64),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => b,
            Flag::Int(i) => i != 0,
        })
    }
}
