//! Caller and owner identities.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The identity of a type acting as owner or caller.
///
/// Identities compare by [`TypeId`]; the type name is kept for messages only.
/// Anyone can name any type, so an `OwnerId` is a claim, not a proof.
#[derive(Clone, Copy)]
pub struct OwnerId {
    id: TypeId,
    name: &'static str,
}

impl OwnerId {
    /// The identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type name without the module path of its outermost type.
    ///
    /// Names that do not start with a path (tuples, references, slices,
    /// pointers, `dyn` types) are returned unchanged.
    pub fn short_name(&self) -> &'static str {
        if !self.name.starts_with(|c: char| c.is_alphabetic() || c == '_')
            || self.name.starts_with("dyn ")
        {
            return self.name;
        }
        let base = self.name.split('<').next().unwrap_or(self.name);
        match base.rfind("::") {
            Some(idx) => &self.name[idx + 2..],
            None => self.name,
        }
    }

    /// Whether this identity is `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for OwnerId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OwnerId {}

impl Hash for OwnerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnerId").field(&self.name).finish()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
