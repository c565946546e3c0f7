//! The [`GuardedProperty`] wrapper.

use std::fmt;

use propriety_core::{AccessPolicy, Error, Operation, Owner, PolicyKind, Property, Result};

use crate::config::{GuardConfig, ViolationMode};
use crate::identity::OwnerId;

/// A property whose access policy is checked at run time.
///
/// Behaves like [`Property`] with the policy table applied on every access
/// instead of at compile time. Callers identify themselves with an
/// [`OwnerId`]; the owner always passes, everyone else is held to the policy.
/// Since any code can claim any identity, this is a guard against mistakes
/// rather than a security boundary. Prefer [`Property`] whenever the policy
/// is known when the code is written.
///
/// # Example
///
/// ```
/// use propriety_core::PolicyKind;
/// use propriety_guard::{GuardedProperty, OwnerId};
///
/// struct Account;
/// struct Auditor;
///
/// let policy: PolicyKind = "public_get".parse().unwrap();
/// let mut balance = GuardedProperty::new::<Account>("balance", policy, 100_i64);
///
/// assert_eq!(*balance.read(OwnerId::of::<Auditor>()).unwrap(), 100);
/// assert!(balance.write(OwnerId::of::<Auditor>(), 0).is_err());
///
/// balance.write(OwnerId::of::<Account>(), 250).unwrap();
/// assert_eq!(*balance.read(OwnerId::of::<Auditor>()).unwrap(), 250);
/// ```
pub struct GuardedProperty<T> {
    name: String,
    owner: OwnerId,
    policy: PolicyKind,
    config: GuardConfig,
    value: T,
}

impl<T> GuardedProperty<T> {
    /// Create a guarded property named `name`, owned by `O`.
    pub fn new<O: ?Sized + 'static>(name: impl Into<String>, policy: PolicyKind, value: T) -> Self {
        Self {
            name: name.into(),
            owner: OwnerId::of::<O>(),
            policy,
            config: GuardConfig::default(),
            value,
        }
    }

    /// Convert a compile-time [`Property`] into a guarded one.
    ///
    /// Takes the owner key because the value leaves the owner's control.
    pub fn from_property<O, P>(
        name: impl Into<String>,
        property: Property<O, T, P>,
        key: &O::Key,
    ) -> Self
    where
        O: Owner + 'static,
        P: AccessPolicy,
    {
        Self::new::<O>(name, P::KIND, property.into_inner(key))
    }

    /// Replace the guard configuration.
    pub fn with_config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    /// The property name used in errors and log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owner's identity.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// The policy in force.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// The guard configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Whether `caller` may perform `operation`.
    pub fn permits(&self, caller: OwnerId, operation: Operation) -> bool {
        caller == self.owner || self.policy.permits(operation)
    }

    /// Check that `caller` may perform `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if the policy forbids it.
    ///
    /// # Panics
    ///
    /// Panics instead of returning an error when configured with
    /// [`ViolationMode::Panic`].
    pub fn check(&self, caller: OwnerId, operation: Operation) -> Result<()> {
        if self.permits(caller, operation) {
            if self.config.trace_access() {
                tracing::trace!(
                    property = %self.name,
                    owner = self.owner.name(),
                    caller = caller.name(),
                    operation = %operation,
                    "property access"
                );
            }
            return Ok(());
        }

        tracing::warn!(
            property = %self.name,
            owner = self.owner.name(),
            caller = caller.name(),
            operation = %operation,
            policy = %self.policy,
            "property access denied"
        );

        let err = Error::access_denied(
            self.name.clone(),
            self.owner.short_name(),
            caller.short_name(),
            operation,
            self.policy,
        );
        match self.config.mode() {
            ViolationMode::Error => Err(err),
            ViolationMode::Panic => violation(err),
        }
    }

    /// Read the held value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if `caller` may not read.
    pub fn read(&self, caller: OwnerId) -> Result<&T> {
        self.check(caller, Operation::Read)?;
        Ok(&self.value)
    }

    /// Mutably borrow the held value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if `caller` may not write.
    pub fn read_mut(&mut self, caller: OwnerId) -> Result<&mut T> {
        self.check(caller, Operation::Write)?;
        Ok(&mut self.value)
    }

    /// Assign a new value, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if `caller` may not write. The value
    /// is left untouched in that case.
    pub fn write(&mut self, caller: OwnerId, value: T) -> Result<&mut T> {
        self.check(caller, Operation::Write)?;
        self.value = value;
        Ok(&mut self.value)
    }

    /// Swap in a new value, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] if `caller` may not write.
    pub fn replace(&mut self, caller: OwnerId, value: T) -> Result<T> {
        self.check(caller, Operation::Write)?;
        Ok(std::mem::replace(&mut self.value, value))
    }
}

#[allow(clippy::panic)]
fn violation(err: Error) -> ! {
    panic!("{err}")
}

impl<T: Clone> Clone for GuardedProperty<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            owner: self.owner,
            policy: self.policy,
            config: self.config,
            value: self.value.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GuardedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("GuardedProperty");
        out.field("name", &self.name)
            .field("owner", &self.owner)
            .field("policy", &self.policy);
        if self.policy.allows_external_read() {
            out.field("value", &self.value);
        } else {
            out.field("value", &format_args!("<private>"));
        }
        out.finish()
    }
}
