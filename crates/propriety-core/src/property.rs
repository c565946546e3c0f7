//! The [`Property`] wrapper.
//!
//! A property holds one value and exposes exactly the read/write surface its
//! access policy allows. Non-owner code gets the policy-gated surface
//! ([`get`](Property::get), [`set`](Property::set), `Deref`, `DerefMut`);
//! owner code gets everything through accessors that demand the owner key.
//!
//! ```
//! mod account {
//!     use propriety_core::{Property, PublicGet, PublicGetSet};
//!
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Debug, Clone, Default)]
//!     pub struct Account {
//!         pub nickname: Property<Account, String, PublicGetSet>,
//!         pub balance: Property<Account, i64, PublicGet>,
//!         pin: Property<Account, u16>,
//!     }
//!
//!     impl Account {
//!         pub fn deposit(&mut self, amount: i64) {
//!             *self.balance.read_mut(&AccountKey::grant()) += amount;
//!         }
//!
//!         pub fn set_pin(&mut self, pin: u16) {
//!             self.pin.write(&AccountKey::grant(), pin);
//!         }
//!
//!         pub fn check_pin(&self, pin: u16) -> bool {
//!             *self.pin.read(&AccountKey::grant()) == pin
//!         }
//!     }
//! }
//!
//! let mut account = account::Account::default();
//! account.nickname.set("savings".to_string());
//! account.deposit(40);
//! account.set_pin(1234);
//!
//! assert_eq!(account.nickname.as_str(), "savings");
//! assert_eq!(*account.balance, 40);
//! assert!(account.check_pin(1234));
//! ```
//!
//! Writing a read-only property from outside its owner does not compile:
//!
//! ```compile_fail,E0599
//! mod account {
//!     use propriety_core::{Property, PublicGet};
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub balance: Property<Account, i64, PublicGet>,
//!     }
//! }
//!
//! fn main() {
//!     let mut account = account::Account::default();
//!     account.balance.set(1_000_000);
//! }
//! ```
//!
//! ```compile_fail,E0594
//! mod account {
//!     use propriety_core::{Property, PublicGet};
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub balance: Property<Account, i64, PublicGet>,
//!     }
//! }
//!
//! fn main() {
//!     let mut account = account::Account::default();
//!     *account.balance = 1_000_000;
//! }
//! ```
//!
//! ```compile_fail,E0277
//! mod account {
//!     use propriety_core::{Property, PublicGet};
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub balance: Property<Account, i64, PublicGet>,
//!     }
//! }
//!
//! fn main() {
//!     let mut account = account::Account::default();
//!     account.balance = 1_000_000.into();
//! }
//! ```
//!
//! Nor does reading or writing a private one:
//!
//! ```compile_fail,E0614
//! mod account {
//!     use propriety_core::Property;
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub pin: Property<Account, u16>,
//!     }
//! }
//!
//! fn main() {
//!     let account = account::Account::default();
//!     let _pin: u16 = *account.pin;
//! }
//! ```
//!
//! ```compile_fail,E0599
//! mod account {
//!     use propriety_core::Property;
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub pin: Property<Account, u16>,
//!     }
//! }
//!
//! fn main() {
//!     let account = account::Account::default();
//!     let _pin = account.pin.get();
//! }
//! ```
//!
//! ```compile_fail,E0599
//! mod account {
//!     use propriety_core::Property;
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub pin: Property<Account, u16>,
//!     }
//! }
//!
//! fn main() {
//!     let mut account = account::Account::default();
//!     account.pin.set(1);
//! }
//! ```
//!
//! A key for a different owner is rejected as well:
//!
//! ```compile_fail,E0308
//! mod account {
//!     use propriety_core::Property;
//!     propriety_core::property_owner! { struct AccountKey for Account; }
//!
//!     #[derive(Default)]
//!     pub struct Account {
//!         pub pin: Property<Account, u16>,
//!     }
//! }
//!
//! mod intruder {
//!     propriety_core::property_owner! { struct IntruderKey for Intruder; }
//!     pub struct Intruder;
//!
//!     pub fn peek(account: &crate::account::Account) -> u16 {
//!         *account.pin.read(&IntruderKey::grant())
//!     }
//! }
//!
//! fn main() {}
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::owner::Owner;
use crate::policy::{AccessPolicy, ExternalRead, ExternalWrite, PolicyKind, PrivateGetSet};

/// A value whose visibility to non-owner code is fixed by an access policy.
///
/// # Type Parameters
///
/// - `O` — The owning type; holders of `O::Key` have unrestricted access
/// - `T` — The held value type
/// - `P` — The [`AccessPolicy`], defaulting to [`PrivateGetSet`]
///
/// # Layout
///
/// `O` and `P` are phantom, so a property has the same size and alignment
/// as `T`, and is `Send`/`Sync` exactly when `T` is.
///
/// # Copy semantics
///
/// `Clone`, `Copy` and moves are never gated by policy: a record full of
/// private properties can still derive `Clone`. Only the value accessors are
/// gated.
///
/// There is no `From<T>` conversion, so `record.field = 5.into()`
/// does not compile for a read-only field. Replacing the whole property with
/// an explicit `record.field = Property::new(v)` is a structural assignment,
/// though, and stays possible wherever the field itself is visible: a `pub`
/// [`PublicGet`](crate::PublicGet) field can be overwritten that way. Owners
/// that need the write restriction to hold keep the field private and hand
/// out `&Property` from a method:
///
/// ```
/// mod account {
///     use propriety_core::{Property, PublicGet};
///
///     propriety_core::property_owner! { struct AccountKey for Account; }
///
///     #[derive(Default)]
///     pub struct Account {
///         balance: Property<Account, i64, PublicGet>,
///     }
///
///     impl Account {
///         pub fn balance(&self) -> &Property<Account, i64, PublicGet> {
///             &self.balance
///         }
///
///         pub fn deposit(&mut self, amount: i64) {
///             *self.balance.read_mut(&AccountKey::grant()) += amount;
///         }
///     }
/// }
///
/// let mut account = account::Account::default();
/// account.deposit(7);
/// assert_eq!(**account.balance(), 7);
/// ```
pub struct Property<O: Owner, T, P: AccessPolicy = PrivateGetSet> {
    value: T,
    _marker: PhantomData<fn() -> (O, P)>,
}

// ============================================================================
// Construction and introspection
// ============================================================================

impl<O: Owner, T, P: AccessPolicy> Property<O, T, P> {
    /// Create a property holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// The runtime mirror of this property's policy.
    pub const fn policy() -> PolicyKind {
        P::KIND
    }

    /// Whether non-owner code may read this property.
    pub const fn is_public_read() -> bool {
        P::EXTERNAL_READ
    }

    /// Whether non-owner code may write this property.
    pub const fn is_public_write() -> bool {
        P::EXTERNAL_WRITE
    }
}

// ============================================================================
// Owner access
// ============================================================================

impl<O: Owner, T, P: AccessPolicy> Property<O, T, P> {
    /// Read the held value as the owner.
    pub fn read(&self, _key: &O::Key) -> &T {
        &self.value
    }

    /// Mutably borrow the held value as the owner.
    pub fn read_mut(&mut self, _key: &O::Key) -> &mut T {
        &mut self.value
    }

    /// Assign a new value as the owner, returning the stored value.
    pub fn write(&mut self, _key: &O::Key, value: T) -> &mut T {
        self.value = value;
        &mut self.value
    }

    /// Swap in a new value as the owner, returning the previous one.
    pub fn replace(&mut self, _key: &O::Key, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Unwrap the held value as the owner.
    pub fn into_inner(self, _key: &O::Key) -> T {
        self.value
    }
}

// ============================================================================
// External access
// ============================================================================

impl<O: Owner, T, P: ExternalRead> Property<O, T, P> {
    /// Read the held value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<O: Owner, T, P: ExternalWrite> Property<O, T, P> {
    /// Mutably borrow the held value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Assign a new value, returning the stored value.
    ///
    /// Like an assignment expression, the result can be used in place:
    /// `*prop.set(2) += 1` leaves `3` behind.
    pub fn set(&mut self, value: T) -> &mut T {
        self.value = value;
        &mut self.value
    }
}

impl<O: Owner, T, P: ExternalRead> Deref for Property<O, T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<O: Owner, T, P: ExternalWrite> DerefMut for Property<O, T, P> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<O: Owner, T, P: ExternalRead> AsRef<T> for Property<O, T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<O: Owner, T, P: ExternalWrite> AsMut<T> for Property<O, T, P> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<O: Owner, T, P: ExternalRead> Borrow<T> for Property<O, T, P> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

// ============================================================================
// Value semantics
// ============================================================================

impl<O: Owner, T: Default, P: AccessPolicy> Default for Property<O, T, P> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<O: Owner, T: Clone, P: AccessPolicy> Clone for Property<O, T, P> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<O: Owner, T: Copy, P: AccessPolicy> Copy for Property<O, T, P> {}

// Comparison, hashing and formatting reveal the value, so they follow the
// read policy. Debug is the exception: it redacts instead, so owners can
// still derive it.

impl<O: Owner, T: PartialEq, P: ExternalRead> PartialEq for Property<O, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<O: Owner, T: Eq, P: ExternalRead> Eq for Property<O, T, P> {}

impl<O: Owner, T: PartialOrd, P: ExternalRead> PartialOrd for Property<O, T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<O: Owner, T: Ord, P: ExternalRead> Ord for Property<O, T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<O: Owner, T: Hash, P: ExternalRead> Hash for Property<O, T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<O: Owner, T: fmt::Display, P: ExternalRead> fmt::Display for Property<O, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<O: Owner, T: fmt::Debug, P: AccessPolicy> fmt::Debug for Property<O, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Property");
        out.field("policy", &P::KIND);
        if P::EXTERNAL_READ {
            out.field("value", &self.value);
        } else {
            out.field("value", &format_args!("<private>"));
        }
        out.finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::policy::{PublicGet, PublicGetSet};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // The owner lives in its own module so that `external` below really is
    // outside it.
    mod widget {
        use super::super::Property;
        use crate::policy::{PublicGet, PublicGetSet};

        crate::property_owner! { struct WidgetKey for Widget; }

        #[derive(Debug, Clone, Default)]
        pub struct Widget {
            pub open: Property<Widget, i32, PublicGetSet>,
            pub read_only: Property<Widget, i32, PublicGet>,
            pub closed: Property<Widget, i32>,
            pub label: Property<Widget, String>,
        }

        impl Widget {
            pub fn with_read_only(value: i32) -> Self {
                Self {
                    read_only: Property::new(value),
                    ..Self::default()
                }
            }

            pub fn bump_read_only(&mut self) -> i32 {
                let key = WidgetKey::grant();
                *self.read_only.read_mut(&key) += 1;
                *self.read_only.read(&key)
            }

            pub fn closed(&self) -> i32 {
                *self.closed.read(&WidgetKey::grant())
            }

            pub fn set_closed(&mut self, value: i32) -> i32 {
                *self.closed.write(&WidgetKey::grant(), value)
            }

            pub fn label(&self) -> &str {
                self.label.read(&WidgetKey::grant())
            }

            pub fn relabel(&mut self, label: &str) -> String {
                self.label.replace(&WidgetKey::grant(), label.to_string())
            }

            pub fn into_label(self) -> String {
                self.label.into_inner(&WidgetKey::grant())
            }
        }

        #[test]
        fn test_owner_reads_and_writes_every_policy() {
            let key = WidgetKey::grant();
            let mut widget = Widget::default();

            widget.open.write(&key, 1);
            widget.read_only.write(&key, 2);
            widget.closed.write(&key, 3);

            assert_eq!(*widget.open.read(&key), 1);
            assert_eq!(*widget.read_only.read(&key), 2);
            assert_eq!(*widget.closed.read(&key), 3);
        }

        #[test]
        fn test_owner_write_returns_new_value() {
            let key = WidgetKey::grant();
            let mut widget = Widget::default();

            let stored = widget.closed.write(&key, 7);
            *stored += 1;
            assert_eq!(*widget.closed.read(&key), 8);
        }
    }

    use widget::Widget;

    fn assert_external_read<P: ExternalRead>() {}
    fn assert_external_write<P: ExternalWrite>() {}

    #[test]
    fn test_default_value_initialised() {
        let widget = Widget::default();
        assert_eq!(*widget.open, 0);
        assert_eq!(*widget.read_only, 0);
        assert_eq!(widget.closed(), 0);
        assert_eq!(widget.label(), "");
    }

    #[test]
    fn test_public_get_set_external_read_write() {
        let mut widget = Widget::default();
        widget.open.set(12);
        assert_eq!(*widget.open.get(), 12);

        *widget.open += 1;
        assert_eq!(*widget.open, 13);

        *widget.open.get_mut() *= 2;
        assert_eq!(*widget.open.as_ref(), 26);
    }

    #[test]
    fn test_set_returns_assigned_value() {
        let mut widget = Widget::default();
        let stored = widget.open.set(2);
        *stored += 1;
        assert_eq!(*widget.open, 3);
    }

    #[test]
    fn test_public_get_external_read_owner_write() {
        let mut widget = Widget::with_read_only(5);
        assert_eq!(*widget.read_only, 5);
        assert_eq!(*widget.read_only.get(), 5);

        assert_eq!(widget.bump_read_only(), 6);
        assert_eq!(*widget.read_only, 6);
    }

    #[test]
    fn test_private_get_set_via_owner_methods() {
        let mut widget = Widget::default();
        assert_eq!(widget.set_closed(41), 41);
        assert_eq!(widget.closed(), 41);
    }

    #[test]
    fn test_last_write_wins() {
        let mut widget = Widget::default();
        widget.set_closed(1);
        widget.set_closed(2);
        assert_eq!(widget.closed(), 2);
    }

    #[test]
    fn test_replace_and_into_inner() {
        let mut widget = Widget::default();
        assert_eq!(widget.relabel("first"), "");
        assert_eq!(widget.relabel("second"), "first");
        assert_eq!(widget.into_label(), "second");
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Widget::default();
        original.open.set(13);
        original.relabel("original");

        let copy = original.clone();
        assert_eq!(*copy.open, 13);
        assert_eq!(copy.label(), "original");

        original.open.set(99);
        original.relabel("changed");
        assert_eq!(*copy.open, 13);
        assert_eq!(copy.label(), "original");
    }

    #[test]
    fn test_clone_from_assigns_value() {
        let mut source = Widget::default();
        source.open.set(13);

        let mut target = Widget::default();
        target.open.clone_from(&source.open);
        assert_eq!(*target.open, 13);
    }

    #[test]
    fn test_move_transfers_value() {
        let mut widget = Widget::default();
        widget.open.set(13);
        widget.relabel("moved");

        let moved = widget;
        assert_eq!(*moved.open, 13);
        assert_eq!(moved.label(), "moved");
    }

    #[test]
    fn test_move_assign_property() {
        let mut source = Widget::default();
        let mut target = Widget::default();
        source.open.set(13);

        target.open = source.open;
        assert_eq!(*target.open, 13);
    }

    #[test]
    fn test_copy_when_value_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Property<Widget, i32>>();
        assert_copy::<Property<Widget, i32, PublicGetSet>>();
    }

    #[test]
    fn test_static_capabilities() {
        assert_external_read::<PublicGet>();
        assert_external_read::<PublicGetSet>();
        assert_external_write::<PublicGetSet>();

        assert!(Property::<Widget, i32, PublicGetSet>::is_public_read());
        assert!(Property::<Widget, i32, PublicGetSet>::is_public_write());
        assert!(Property::<Widget, i32, PublicGet>::is_public_read());
        assert!(!Property::<Widget, i32, PublicGet>::is_public_write());
        assert!(!Property::<Widget, i32>::is_public_read());
        assert!(!Property::<Widget, i32>::is_public_write());
    }

    #[test]
    fn test_default_policy_is_private() {
        assert_eq!(Property::<Widget, i32>::policy(), PolicyKind::PrivateGetSet);
    }

    #[test]
    fn test_capabilities_are_const() {
        const OPEN: bool = Property::<Widget, u8, PublicGetSet>::is_public_write();
        const CLOSED: bool = Property::<Widget, u8>::is_public_read();
        assert!(OPEN);
        assert!(!CLOSED);
    }

    #[test]
    fn test_zero_cost_layout() {
        use std::mem::{align_of, size_of};
        assert_eq!(size_of::<Property<Widget, u64>>(), size_of::<u64>());
        assert_eq!(size_of::<Property<Widget, String, PublicGet>>(), size_of::<String>());
        assert_eq!(align_of::<Property<Widget, u16>>(), align_of::<u16>());
    }

    #[test]
    fn test_send_sync_follow_value() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Property<Widget, String>>();
        assert_send_sync::<Widget>();
    }

    #[test]
    fn test_new_holds_value() {
        let prop: Property<Widget, i32, PublicGet> = Property::new(8);
        assert_eq!(*prop, 8);
    }

    #[test]
    fn test_comparisons_for_readable_policies() {
        let a: Property<Widget, i32, PublicGet> = Property::new(1);
        let b: Property<Widget, i32, PublicGet> = Property::new(2);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, Property::new(1));
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_hash_for_readable_policies() {
        let mut set: HashSet<Property<Widget, &str, PublicGetSet>> = HashSet::new();
        set.insert(Property::new("a"));
        set.insert(Property::new("a"));
        set.insert(Property::new("b"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"a"));
    }

    #[test]
    fn test_display_for_readable_policies() {
        let prop: Property<Widget, i32, PublicGet> = Property::new(42);
        assert_eq!(prop.to_string(), "42");
    }

    #[test]
    fn test_debug_redacts_private_value() {
        let mut widget = Widget::default();
        widget.set_closed(31337);
        widget.open.set(7);

        let closed = format!("{:?}", widget.closed);
        assert!(closed.contains("private_get_set") || closed.contains("PrivateGetSet"));
        assert!(closed.contains("<private>"));
        assert!(!closed.contains("31337"));

        let open = format!("{:?}", widget.open);
        assert!(open.contains('7'));
        assert!(!open.contains("<private>"));
    }

    #[test]
    fn test_owner_derive_debug_redacts() {
        let mut widget = Widget::default();
        widget.set_closed(31337);
        let debug_str = format!("{widget:?}");
        assert!(debug_str.contains("Widget"));
        assert!(!debug_str.contains("31337"));
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(writes in proptest::collection::vec(any::<i32>(), 1..32)) {
            let mut widget = Widget::default();
            for value in &writes {
                widget.set_closed(*value);
            }
            prop_assert_eq!(widget.closed(), *writes.last().unwrap());
        }

        #[test]
        fn prop_clone_does_not_alias(before in any::<i32>(), after in any::<i32>()) {
            let mut original = Widget::default();
            original.open.set(before);
            let copy = original.clone();
            original.open.set(after);
            prop_assert_eq!(*copy.open, before);
            prop_assert_eq!(*original.open, after);
        }

        #[test]
        fn prop_external_and_owner_views_agree(value in i32::MIN..i32::MAX) {
            let mut widget = Widget::with_read_only(value);
            prop_assert_eq!(*widget.read_only, value);
            prop_assert_eq!(widget.bump_read_only(), value + 1);
            prop_assert_eq!(*widget.read_only, value + 1);
        }
    }
}
