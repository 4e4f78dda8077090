//! Policy errors.
//!
//! Predicates never fail; these are only produced by the `Authorizer`
//! guards and the assignment helpers that sit in front of writes.

use crate::assignment::AssignmentError;
use crate::authorizer::Action;
use teamdeck_common_core::UserId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    /// No profile was supplied.
    #[error("{action}: no signed-in user")]
    SignedOut { action: Action },

    /// The profile lacks the required grant.
    #[error("{action}: permission denied ({reason})")]
    PermissionDenied { action: Action, reason: String },

    /// The requested role/team pairing is inconsistent.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// A role change addressed to one user was applied to another profile.
    #[error("role change for {requested} does not match target {target}")]
    TargetMismatch { requested: UserId, target: UserId },

    /// The request payload failed validation.
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl PolicyError {
    /// Whether this is a refusal, as opposed to a malformed request.
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::SignedOut { .. } | Self::PermissionDenied { .. })
    }
}
