//! Propriety Core — policy-gated properties.
//!
//! A [`Property<O, T, P>`](Property) holds a single value of type `T` for an
//! owning record `O`. The access policy `P` decides, at compile time, whether
//! code outside the owner may read or write the value:
//!
//! | Policy | External read | External write |
//! |---|---|---|
//! | [`PrivateGetSet`] (default) | no | no |
//! | [`PublicGet`] | yes | no |
//! | [`PublicGetSet`] | yes | yes |
//!
//! The owner always has full access by presenting its key, declared with
//! [`property_owner!`].
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`owner`]: The [`Owner`] trait and owner keys
//! - [`policy`]: Access policy tags and capability traits
//! - [`property`]: The [`Property`] wrapper
//!
//! # Example
//!
//! ```
//! mod dummy {
//!     use propriety_core::{Property, PublicGet, PublicGetSet};
//!
//!     propriety_core::property_owner! { struct DummyKey for Dummy; }
//!
//!     #[derive(Default)]
//!     pub struct Dummy {
//!         /// Anyone can change this.
//!         pub public_read_write: Property<Dummy, i32, PublicGetSet>,
//!         /// Anyone can read this; only `Dummy` can change it.
//!         pub public_read: Property<Dummy, i32, PublicGet>,
//!         /// Only `Dummy` can touch this.
//!         pub private_property: Property<Dummy, i32>,
//!     }
//!
//!     impl Dummy {
//!         pub fn sync(&mut self) {
//!             let key = DummyKey::grant();
//!             let value = *self.public_read_write;
//!             self.public_read.write(&key, value);
//!             self.private_property.write(&key, value * 2);
//!         }
//!     }
//! }
//!
//! let mut obj = dummy::Dummy::default();
//! let _val: i32 = *obj.public_read_write;
//! *obj.public_read_write = 13;
//! obj.sync();
//! assert_eq!(*obj.public_read, 13);
//! ```

pub mod error;
pub mod owner;
pub mod policy;
pub mod property;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use owner::Owner;
pub use policy::{
    AccessPolicy, ExternalRead, ExternalWrite, Operation, PolicyKind, PrivateGetSet, PublicGet,
    PublicGetSet,
};
pub use property::Property;
