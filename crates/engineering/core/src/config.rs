use crate::error::{EngineError, ErrorSeverity};
use crate::stats::IntegerRounding;

/// Rejected configuration value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("default_blend_divisor must be a finite positive number, got {0}")]
    InvalidBlendDivisor(f64),
}

impl EngineError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBlendDivisor(_) => "invalid_blend_divisor",
        }
    }
}

/// Engine configuration constants and tunable parameters.
///
/// Fields are only reachable through checked setters, so every config an
/// engine sees has a usable blend divisor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEngineeringConfig"))]
pub struct EngineeringConfig {
    /// How fractional results are written into integer stats.
    integer_rounding: IntegerRounding,

    /// Divisor for stats with no entry in the blend table: an effect delta
    /// of `d` scales the stat by `1 + d / default_blend_divisor`.
    default_blend_divisor: f64,
}

impl EngineeringConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BLEND_DIVISOR: f64 = 100.0;

    pub const fn new() -> Self {
        Self {
            integer_rounding: IntegerRounding::Nearest,
            default_blend_divisor: Self::DEFAULT_BLEND_DIVISOR,
        }
    }

    pub fn integer_rounding(&self) -> IntegerRounding {
        self.integer_rounding
    }

    pub fn default_blend_divisor(&self) -> f64 {
        self.default_blend_divisor
    }

    pub fn with_integer_rounding(mut self, integer_rounding: IntegerRounding) -> Self {
        self.integer_rounding = integer_rounding;
        self
    }

    /// Set the fallback percent divisor; it must be finite and positive.
    pub fn with_default_blend_divisor(mut self, default_blend_divisor: f64) -> Result<Self, ConfigError> {
        if !default_blend_divisor.is_finite() || default_blend_divisor <= 0.0 {
            return Err(ConfigError::InvalidBlendDivisor(default_blend_divisor));
        }
        self.default_blend_divisor = default_blend_divisor;
        Ok(self)
    }
}

impl Default for EngineeringConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawEngineeringConfig {
    integer_rounding: IntegerRounding,
    default_blend_divisor: f64,
}

#[cfg(feature = "serde")]
impl Default for RawEngineeringConfig {
    fn default() -> Self {
        Self {
            integer_rounding: IntegerRounding::Nearest,
            default_blend_divisor: EngineeringConfig::DEFAULT_BLEND_DIVISOR,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawEngineeringConfig> for EngineeringConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEngineeringConfig) -> Result<Self, Self::Error> {
        Self::new()
            .with_integer_rounding(raw.integer_rounding)
            .with_default_blend_divisor(raw.default_blend_divisor)
    }
}
