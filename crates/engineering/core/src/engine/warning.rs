use crate::error::{EngineError, ErrorSeverity};
use crate::stats::StatName;

/// Non-fatal problem met while engineering a module.
///
/// Each warning means one modifier, target or effect was skipped; the rest of
/// the result is unaffected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EngineeringWarning {
    #[error("unknown modifier `{label}` on `{item_type}`")]
    UnknownModifier { label: String, item_type: String },

    #[error("modifier `{label}` targets {stat}, which `{item_type}` does not have")]
    MissingStat {
        label: String,
        stat: StatName,
        item_type: String,
    },

    #[error("unknown special effect `{id}` on `{item_type}`")]
    UnknownSpecialEffect { id: String, item_type: String },

    #[error("special effect `{id}` targets {stat}, which `{item_type}` does not have")]
    MissingEffectStat {
        id: String,
        stat: StatName,
        item_type: String,
    },
}

impl EngineError for EngineeringWarning {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownModifier { .. } => "unknown_modifier",
            Self::MissingStat { .. } => "missing_stat",
            Self::UnknownSpecialEffect { .. } => "unknown_special_effect",
            Self::MissingEffectStat { .. } => "missing_effect_stat",
        }
    }
}
