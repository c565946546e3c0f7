//! Error types for Propriety.
//!
//! [`Property`](crate::Property) itself never fails: policy violations are
//! build errors and failures of the held value propagate untouched. This
//! `Error` covers the run-time surfaces built on top of it: parsing policy
//! names and the checked access of `propriety-guard`.

use thiserror::Error;

use crate::policy::{Operation, PolicyKind};

/// Errors that can occur in Propriety operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller without owner access attempted an operation the policy forbids.
    #[error(
        "access denied: {caller} may not {operation} property `{property}` of {owner} (policy {policy})"
    )]
    AccessDenied {
        /// Name of the property.
        property: String,
        /// Type name of the owner.
        owner: String,
        /// Type name of the caller.
        caller: String,
        /// The forbidden operation.
        operation: Operation,
        /// The policy in force.
        policy: PolicyKind,
    },

    /// A policy name that does not match any known policy.
    #[error("Unknown access policy: {0}")]
    UnknownPolicy(String),
}

impl Error {
    /// Create an access denied error.
    pub fn access_denied(
        property: impl Into<String>,
        owner: impl Into<String>,
        caller: impl Into<String>,
        operation: Operation,
        policy: PolicyKind,
    ) -> Self {
        Self::AccessDenied {
            property: property.into(),
            owner: owner.into(),
            caller: caller.into(),
            operation,
            policy,
        }
    }

    /// Create an unknown policy error.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy(name.into())
    }

    /// Whether this error reports a policy violation.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

/// Result type alias using Propriety's Error type.
pub type Result<T> = std::result::Result<T, Error>;
