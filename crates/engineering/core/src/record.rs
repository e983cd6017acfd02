//! Engineering record attached to a fitted module.

use crate::engine::{EngineeringEngine, EngineeringOutcome};
use crate::error::{EngineError, ErrorSeverity};
use crate::modifier::ModifierEntry;
use crate::modules::ModuleOracle;

/// Error applying an engineering record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineeringError {
    #[error("unknown module type `{item_type}`")]
    UnknownModule { item_type: String },
}

impl EngineError for EngineeringError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownModule { .. } => "unknown_module",
        }
    }
}

/// The engineering applied to one module: which blueprint, by whom, and the
/// resulting modifiers.
///
/// The serde form uses the persisted field names (`BlueprintName`,
/// `ExperimentalEffect`, `Modifiers`, ...).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct EngineeringRecord {
    pub engineer: String,
    #[cfg_attr(feature = "serde", serde(rename = "EngineerID"))]
    pub engineer_id: u64,
    #[cfg_attr(feature = "serde", serde(rename = "BlueprintID"))]
    pub blueprint_id: u64,
    pub blueprint_name: String,
    pub level: u32,
    pub quality: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub experimental_effect: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "ExperimentalEffect_Localised",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub experimental_effect_localised: Option<String>,
    pub modifiers: Vec<ModifierEntry>,
}

impl EngineeringRecord {
    pub fn new(blueprint_name: impl Into<String>, level: u32) -> Self {
        Self {
            blueprint_name: blueprint_name.into(),
            level,
            ..Self::default()
        }
    }

    /// Add a modifier (builder pattern).
    pub fn with_modifier(mut self, modifier: ModifierEntry) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Set the experimental effect id (builder pattern).
    pub fn with_experimental_effect(mut self, id: impl Into<String>) -> Self {
        self.experimental_effect = Some(id.into());
        self
    }

    /// Engineer the module `item_type` as described by this record.
    ///
    /// The only hard failure is an item type the oracle does not know: with no
    /// base stats there is nothing to modify.
    pub fn apply(
        &self,
        engine: &EngineeringEngine<'_>,
        modules: &dyn ModuleOracle,
        item_type: &str,
    ) -> Result<EngineeringOutcome, EngineeringError> {
        let module = modules
            .module(item_type)
            .ok_or_else(|| EngineeringError::UnknownModule {
                item_type: item_type.to_owned(),
            })?;

        tracing::debug!(
            "applying {} G{} to `{}` ({} modifier(s))",
            self.blueprint_name,
            self.level,
            module.item_type,
            self.modifiers.len()
        );

        Ok(engine.apply_with_report(
            &module.stats,
            &self.modifiers,
            self.experimental_effect.as_deref(),
            &module.item_type,
            &self.blueprint_name,
        ))
    }
}
