//! Run-time checked properties for Propriety.
//!
//! [`propriety_core::Property`] enforces its access policy at compile time.
//! When the policy is only known at run time (for instance parsed from a
//! configuration value), [`GuardedProperty`] applies the same policy table on
//! every access and reports violations as
//! [`Error::AccessDenied`](propriety_core::Error::AccessDenied), logged via
//! `tracing`.
//!
//! This is a weaker guarantee than the compile-time one: caller identities
//! are plain [`OwnerId`] values that any code can construct.
//!
//! # Modules
//!
//! - [`config`]: [`GuardConfig`] and [`ViolationMode`]
//! - [`guarded`]: The [`GuardedProperty`] wrapper
//! - [`identity`]: [`OwnerId`] caller identities

pub mod config;
pub mod guarded;
pub mod identity;

pub use config::{GuardConfig, ViolationMode};
pub use guarded::GuardedProperty;
pub use identity::OwnerId;
