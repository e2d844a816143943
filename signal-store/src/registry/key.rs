//! Typed registry keys.
//!
//! A `Key<T>` names one slot in the registry and fixes the type of the value
//! stored there. Keys declared by a state shape are `const`; keys built from
//! runtime strings use `Key::dynamic`.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Name under which a cell is indexed.
pub type KeyName = Cow<'static, str>;

/// Address of a cell holding values of type `T`.
pub struct Key<T> {
    name: KeyName,
    _value: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    /// Create a key with a static name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _value: PhantomData,
        }
    }

    /// Create a key from a name only known at runtime.
    pub fn dynamic(name: impl Into<KeyName>) -> Self {
        Self {
            name: name.into(),
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn to_name(&self) -> KeyName {
        self.name.clone()
    }
}

// Manual impls: none of these should require anything of `T`.

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key")
            .field(&self.name)
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: Key<i32> = Key::new("count");

    #[test]
    fn static_and_dynamic_keys_compare_by_name() {
        let dynamic: Key<i32> = Key::dynamic(String::from("count"));
        assert_eq!(COUNT, dynamic);
        assert_eq!(dynamic.name(), "count");
        assert_eq!(COUNT.to_string(), "count");
    }

    #[test]
    fn key_is_clone_for_non_clone_values() {
        struct Opaque;
        let key: Key<Opaque> = Key::new("opaque");
        let copy = key.clone();
        assert_eq!(copy.name(), "opaque");
    }
}
