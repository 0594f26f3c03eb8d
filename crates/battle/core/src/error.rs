//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. [`SetupError`](crate::engine::SetupError),
//! [`SkillError`](crate::combat::SkillError)) live next to the code that
//! raises them. This module holds the shared classification they all report
//! through.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failing stage has its own error enum
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Local Recovery**: conditions the simulator can absorb (fizzled skills,
//!   turn limit) never escape as errors from a running battle

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the battle absorbs the condition and keeps going
/// - **Validation**: invalid input, rejected before any turn runs
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: the component cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the simulation continues.
    ///
    /// Examples: skill fizzled for lack of targets, turn ceiling reached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty roster, duplicate combatant id, referenced skill or
    /// stat row missing
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: poisoned ranking lock, log encoding failure
    Internal,

    /// Fatal error - cannot continue.
    ///
    /// Examples: skill or stat oracle missing from the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or a dead component.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics and for asserting on variants in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
