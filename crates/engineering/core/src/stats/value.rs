//! Tagged numeric value stored in a stat slot.

use super::name::StatKind;

/// How a fractional result is coerced into an integer slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IntegerRounding {
    /// Round half away from zero.
    #[default]
    Nearest,
    /// Drop the fractional part.
    Truncate,
}

impl IntegerRounding {
    /// Coerce `value` into an integer.
    ///
    /// Non-finite input saturates the way `f64 as i64` does (`NaN` → 0,
    /// `±∞` → `i64::MIN`/`i64::MAX`).
    pub fn apply(self, value: f64) -> i64 {
        match self {
            Self::Nearest => value.round() as i64,
            Self::Truncate => value.trunc() as i64,
        }
    }
}

/// A present stat value with its numeric subtype.
///
/// Absence is modelled by the slot not existing in the
/// [`StatBlock`](super::StatBlock), never by a sentinel value here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StatValue {
    Float(f64),
    Int(i64),
}

impl StatValue {
    /// Build a value of the given subtype from a float.
    pub fn from_f64(kind: StatKind, value: f64, rounding: IntegerRounding) -> Self {
        match kind {
            StatKind::Float => Self::Float(value),
            StatKind::Integer => Self::Int(rounding.apply(value)),
        }
    }

    /// The value widened to `f64` for arithmetic.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Float(v) => v,
            Self::Int(v) => v as f64,
        }
    }

    /// The subtype of this value.
    pub fn kind(self) -> StatKind {
        match self {
            Self::Float(_) => StatKind::Float,
            Self::Int(_) => StatKind::Integer,
        }
    }

    /// Replace the number while keeping this value's subtype.
    pub fn with_value(self, value: f64, rounding: IntegerRounding) -> Self {
        Self::from_f64(self.kind(), value, rounding)
    }
}

impl core::fmt::Display for StatValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_modes() {
        assert_eq!(IntegerRounding::Nearest.apply(76.6), 77);
        assert_eq!(IntegerRounding::Nearest.apply(76.5), 77);
        assert_eq!(IntegerRounding::Nearest.apply(-2.5), -3);
        assert_eq!(IntegerRounding::Truncate.apply(76.9), 76);
        assert_eq!(IntegerRounding::Truncate.apply(-2.9), -2);
    }

    #[test]
    fn with_value_keeps_subtype() {
        let clip = StatValue::Int(90);
        assert_eq!(clip.with_value(76.8, IntegerRounding::Nearest), StatValue::Int(77));

        let mass = StatValue::Float(8.0);
        assert_eq!(mass.with_value(6.4, IntegerRounding::Nearest), StatValue::Float(6.4));
    }

    #[test]
    fn non_finite_saturates() {
        assert_eq!(IntegerRounding::Nearest.apply(f64::NAN), 0);
        assert_eq!(IntegerRounding::Nearest.apply(f64::INFINITY), i64::MAX);
    }
}
