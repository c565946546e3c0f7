//! Access policies for [`Property`](crate::Property).
//!
//! A policy is a zero-sized tag type chosen as the third type parameter of a
//! property. The set of policies is closed: [`AccessPolicy`] is sealed, so no
//! crate outside this one can add a variant.
//!
//! Which accessors a property exposes to non-owner code is decided by two
//! capability traits:
//!
//! - [`ExternalRead`]: implemented by [`PublicGet`] and [`PublicGetSet`]
//! - [`ExternalWrite`]: implemented by [`PublicGetSet`] only
//!
//! | Policy | External read | External write |
//! |---|---|---|
//! | [`PrivateGetSet`] | no | no |
//! | [`PublicGet`] | yes | no |
//! | [`PublicGetSet`] | yes | yes |
//!
//! The owner always has both read and write access, whatever the policy.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A value operation subject to an access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Reading the held value.
    Read,
    /// Assigning or mutating the held value.
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => f.write_str("read"),
            Operation::Write => f.write_str("write"),
        }
    }
}

/// Runtime mirror of the three access policies.
///
/// Tag types map onto this enum through [`AccessPolicy::KIND`]. It exists for
/// diagnostics and for code that only learns the policy at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PolicyKind {
    /// Only the owner may read or write.
    #[default]
    PrivateGetSet,
    /// Anyone may read; only the owner may write.
    PublicGet,
    /// Anyone may read or write.
    PublicGetSet,
}

impl PolicyKind {
    /// All policies, most restrictive first.
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::PrivateGetSet,
        PolicyKind::PublicGet,
        PolicyKind::PublicGetSet,
    ];

    /// Whether non-owner code may read under this policy.
    pub const fn allows_external_read(self) -> bool {
        matches!(self, PolicyKind::PublicGet | PolicyKind::PublicGetSet)
    }

    /// Whether non-owner code may write under this policy.
    pub const fn allows_external_write(self) -> bool {
        matches!(self, PolicyKind::PublicGetSet)
    }

    /// Whether non-owner code may perform `operation` under this policy.
    pub const fn permits(self, operation: Operation) -> bool {
        match operation {
            Operation::Read => self.allows_external_read(),
            Operation::Write => self.allows_external_write(),
        }
    }

    /// The conventional snake_case name of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::PrivateGetSet => "private_get_set",
            PolicyKind::PublicGet => "public_get",
            PolicyKind::PublicGetSet => "public_get_set",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "private_get_set" | "private" => Ok(PolicyKind::PrivateGetSet),
            "public_get" | "read_only" => Ok(PolicyKind::PublicGet),
            "public_get_set" | "public" => Ok(PolicyKind::PublicGetSet),
            other => Err(Error::unknown_policy(other)),
        }
    }
}

/// A compile-time access policy tag.
///
/// Sealed: implemented only by [`PrivateGetSet`], [`PublicGet`] and
/// [`PublicGetSet`].
pub trait AccessPolicy: seal::Sealed + 'static {
    /// The runtime mirror of this policy.
    const KIND: PolicyKind;

    /// Whether non-owner code may read.
    const EXTERNAL_READ: bool = Self::KIND.allows_external_read();

    /// Whether non-owner code may write.
    const EXTERNAL_WRITE: bool = Self::KIND.allows_external_write();
}

/// Policies under which any caller may read the held value.
pub trait ExternalRead: AccessPolicy {}

/// Policies under which any caller may replace or mutate the held value.
pub trait ExternalWrite: ExternalRead {}

/// Only the owner may read or write. This is the default policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrivateGetSet;

/// Anyone may read; only the owner may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PublicGet;

/// Anyone may read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PublicGetSet;

impl seal::Sealed for PrivateGetSet {}
impl seal::Sealed for PublicGet {}
impl seal::Sealed for PublicGetSet {}

impl AccessPolicy for PrivateGetSet {
    const KIND: PolicyKind = PolicyKind::PrivateGetSet;
}

impl AccessPolicy for PublicGet {
    const KIND: PolicyKind = PolicyKind::PublicGet;
}

impl AccessPolicy for PublicGetSet {
    const KIND: PolicyKind = PolicyKind::PublicGetSet;
}

impl ExternalRead for PublicGet {}
impl ExternalRead for PublicGetSet {}

impl ExternalWrite for PublicGetSet {}

#[doc(hidden)]
mod seal {
    #[doc(hidden)]
    pub trait Sealed {}
}
