//! Error types for profile composition

use thiserror::Error;

use crate::role::{RoleKey, TabId};

/// Errors from the Rolefolio core.
///
/// Recoverable viewer-facing conditions (empty role set, rejected tab clicks,
/// stale identity results) are modelled as outcomes by the engine, not as
/// errors. What remains here are input errors and programming errors.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("duplicate role profile: {0}")]
    DuplicateRole(RoleKey),

    /// The UI offered a (role, tab) pair the dispatcher does not recognize.
    #[error("tab {tab} is not offered for role {role}")]
    TabOutOfDomain { role: RoleKey, tab: TabId },

    #[error("role {0} has no stored profile")]
    RoleNotInStore(RoleKey),

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LensError {
    /// Whether this error signals a bug in the caller rather than bad input.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            LensError::TabOutOfDomain { .. } | LensError::RoleNotInStore(_)
        )
    }
}

/// Result alias for Rolefolio operations.
pub type LensResult<T> = Result<T, LensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LensError::TabOutOfDomain {
            role: RoleKey::Employer,
            tab: TabId::Education,
        };
        assert_eq!(err.to_string(), "tab education is not offered for role EMPLOYER");
        assert!(err.is_programming_error());
    }

    #[test]
    fn input_errors_are_not_programming_errors() {
        assert!(!LensError::UnknownRole("ADMIN".into()).is_programming_error());
        assert!(!LensError::DuplicateRole(RoleKey::Client).is_programming_error());
    }
}
