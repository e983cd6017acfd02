use crate::error::{EngineError, ErrorSeverity};
use crate::stats::StatName;

/// Malformed rule or blend table data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuleParseError {
    #[error("exception `{0}` must start with `+` or `-`")]
    MissingSign(String),

    #[error("exception `{0}` has an empty condition")]
    EmptyCondition(String),

    #[error("modifier `{0}` has no target stats")]
    EmptyRule(String),

    #[error("blend divisor for {stat} must be a finite non-negative number, got {value}")]
    InvalidBlendMode { stat: StatName, value: f64 },
}

impl EngineError for RuleParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSign(_) => "missing_sign",
            Self::EmptyCondition(_) => "empty_condition",
            Self::EmptyRule(_) => "empty_rule",
            Self::InvalidBlendMode { .. } => "invalid_blend_mode",
        }
    }
}
