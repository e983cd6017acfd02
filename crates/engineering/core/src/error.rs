//! Common error infrastructure for engineering-core.
//!
//! This module provides the shared classification used by every error and
//! warning type in the crate. Domain-specific types (e.g.
//! [`EngineeringWarning`](crate::engine::EngineeringWarning),
//! [`RuleParseError`](crate::rules::RuleParseError)) are defined next to the
//! code that produces them.
//!
//! # Design Principles
//!
//! - **Lenient application**: unresolved references degrade to a local no-op
//!   and are reported as [`ErrorSeverity::Recoverable`] warnings
//! - **Strict construction**: malformed table data is rejected up front as
//!   [`ErrorSeverity::Validation`]
//! - **Stable codes**: every variant has a `snake_case` code for logs and tests

/// Severity level of an error or warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The affected modifier, target or effect was skipped; the rest of the
    /// result is still valid.
    ///
    /// Examples: unknown modifier label, stat missing from the base item
    Recoverable,

    /// Invalid input that must be fixed before it can be used.
    ///
    /// Examples: unknown stat name in a rule table, unknown module type
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if processing continues past this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all engineering-core errors and warnings.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by whether processing can continue, not by impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
