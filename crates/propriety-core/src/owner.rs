//! Owner identity for properties.
//!
//! A [`Property`](crate::Property) grants unrestricted access to exactly one
//! owner type. Rust has no friend declarations, so owner access is proven by
//! presenting the owner's key: a zero-sized value that only the module
//! declaring the owner can construct.
//!
//! The [`property_owner!`](crate::property_owner) macro declares the key type,
//! implements [`Owner`] and adds a module-private `grant()` constructor:
//!
//! ```
//! mod counter {
//!     use propriety_core::{Property, PublicGet};
//!
//!     propriety_core::property_owner! {
//!         /// Owner key for [`Counter`].
//!         struct CounterKey for Counter;
//!     }
//!
//!     #[derive(Debug, Default)]
//!     pub struct Counter {
//!         pub hits: Property<Counter, u32, PublicGet>,
//!     }
//!
//!     impl Counter {
//!         pub fn hit(&mut self) {
//!             *self.hits.read_mut(&CounterKey::grant()) += 1;
//!         }
//!     }
//! }
//!
//! let mut counter = counter::Counter::default();
//! counter.hit();
//! counter.hit();
//! assert_eq!(*counter.hits, 2);
//! ```
//!
//! Outside the owner's module the key cannot be minted:
//!
//! ```compile_fail,E0624
//! mod counter {
//!     pub struct Counter;
//!     propriety_core::property_owner! { struct CounterKey for Counter; }
//! }
//!
//! fn main() {
//!     let _key = counter::CounterKey::grant();
//! }
//! ```
//!
//! ```compile_fail,E0451
//! mod counter {
//!     pub struct Counter;
//!     propriety_core::property_owner! { struct CounterKey for Counter; }
//! }
//!
//! fn main() {
//!     let _key = counter::CounterKey { _private: () };
//! }
//! ```
//!
//! The unit of trust is therefore the owner's module (and its child
//! modules), which is Rust's unit of privacy. Keep owners that should not
//! see each other's properties in separate modules.

/// A type that owns properties.
///
/// `Key` is the proof of ownership that owner-internal accessors such as
/// [`Property::read`](crate::Property::read) demand. Implementations should
/// make `Key` impossible to construct outside the owner's module; use
/// [`property_owner!`](crate::property_owner) rather than implementing this
/// trait by hand.
pub trait Owner {
    /// Zero-sized proof of owner access.
    type Key;
}

/// Declare the owner key for a type.
///
/// Expands to a `pub` key struct with a private field, an `Owner` impl that
/// names it, and a private `const fn grant() -> Key`. Because both the field
/// and `grant` are private, only the invoking module and its descendants can
/// produce a key.
///
/// Generic owners list their type parameters after the type name:
///
/// ```
/// mod stack {
///     use propriety_core::Property;
///
///     propriety_core::property_owner! { struct StackKey for Stack<T>; }
///
///     pub struct Stack<T> {
///         items: Property<Stack<T>, Vec<T>>,
///     }
///
///     impl<T> Stack<T> {
///         pub fn new() -> Self {
///             Self { items: Property::default() }
///         }
///
///         pub fn push(&mut self, item: T) {
///             self.items.read_mut(&StackKey::grant()).push(item);
///         }
///
///         pub fn len(&self) -> usize {
///             self.items.read(&StackKey::grant()).len()
///         }
///     }
/// }
///
/// let mut stack = stack::Stack::new();
/// stack.push("a");
/// assert_eq!(stack.len(), 1);
/// ```
#[macro_export]
macro_rules! property_owner {
    (
        $(#[$meta:meta])*
        struct $key:ident for $owner:ident < $($param:ident),+ $(,)? > $(;)?
    ) => {
        $crate::property_owner!(@key $(#[$meta])* $key);

        impl<$($param),+> $crate::Owner for $owner<$($param),+> {
            type Key = $key;
        }
    };
    (
        $(#[$meta:meta])*
        struct $key:ident for $owner:ty $(;)?
    ) => {
        $crate::property_owner!(@key $(#[$meta])* $key);

        impl $crate::Owner for $owner {
            type Key = $key;
        }
    };
    (@key $(#[$meta:meta])* $key:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $key {
            _private: (),
        }

        impl $key {
            #[allow(dead_code)]
            const fn grant() -> Self {
                Self { _private: () }
            }
        }
    };
}
