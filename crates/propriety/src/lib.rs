//! Propriety — properties with compile-time access policies.
//!
//! Re-exports [`propriety_core`] at the crate root. With the `guard`
//! feature, the run-time checked variant is available as [`guard`].
//!
//! # Features
//!
//! - `guard`: Enable [`GuardedProperty`](guard::GuardedProperty)
//! - `full`: Everything above

pub use propriety_core::*;

#[cfg(feature = "guard")]
pub use propriety_guard as guard;
