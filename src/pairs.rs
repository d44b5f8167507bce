//! The pair elements stored by the weak map containers.
//!
//! Each pair decides which of its halves are weak, and with that, when
//! the whole entry counts as expired: a weak-key pair dies with its
//! key, a weak-value pair with its value, and a weak-weak pair with
//! either.

use crate::compat::*;
use crate::traits::{TableElement, WeakElement, WeakKey};

/// A pair whose key is held weakly and whose value is owned directly.
#[derive(Clone, Debug)]
pub struct WeakKeyPair<K, V> {
    /// The weak key.
    pub key: K,
    /// The value.
    pub value: V,
}

impl<K: WeakKey, V> TableElement for WeakKeyPair<K, V> {
    type Strong = (K::Strong, V);
    type View = K::Strong;
    type Key = K::Key;

    fn store((key, value): Self::Strong) -> Self {
        WeakKeyPair {
            key: K::new(&key),
            value,
        }
    }

    fn lock(&self) -> Option<Self::View> {
        self.key.view()
    }

    fn expired(&self) -> bool {
        self.key.expired()
    }

    fn steal(self, view: Self::View) -> Self::Strong {
        (view, self.value)
    }

    fn with_key<F, R>(&self, view: &Self::View, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        K::with_key(view, f)
    }

    fn with_strong_key<F, R>(strong: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        K::with_key(&strong.0, f)
    }
}

/// A pair whose key is owned directly and whose value is held weakly.
///
/// The key is always present, but it is only ever projected through a
/// locked view, so an entry whose value has expired never matches a
/// lookup.
#[derive(Clone, Debug)]
pub struct WeakValuePair<K, V> {
    /// The key.
    pub key: K,
    /// The weak value.
    pub value: V,
}

impl<K: Eq + Hash, V: WeakElement> TableElement for WeakValuePair<K, V> {
    type Strong = (K, V::Strong);
    type View = V::Strong;
    type Key = K;

    fn store((key, value): Self::Strong) -> Self {
        WeakValuePair {
            key,
            value: V::new(&value),
        }
    }

    fn lock(&self) -> Option<Self::View> {
        self.value.view()
    }

    fn expired(&self) -> bool {
        self.value.expired()
    }

    fn steal(self, view: Self::View) -> Self::Strong {
        (self.key, view)
    }

    fn with_key<F, R>(&self, _view: &Self::View, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        f(&self.key)
    }

    fn with_strong_key<F, R>(strong: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        f(&strong.0)
    }
}

/// A pair both of whose halves are held weakly.
#[derive(Clone, Debug)]
pub struct WeakWeakPair<K, V> {
    /// The weak key.
    pub key: K,
    /// The weak value.
    pub value: V,
}

impl<K: WeakKey, V: WeakElement> TableElement for WeakWeakPair<K, V> {
    type Strong = (K::Strong, V::Strong);
    type View = (K::Strong, V::Strong);
    type Key = K::Key;

    fn store((key, value): Self::Strong) -> Self {
        WeakWeakPair {
            key: K::new(&key),
            value: V::new(&value),
        }
    }

    fn lock(&self) -> Option<Self::View> {
        let key = self.key.view()?;
        let value = self.value.view()?;
        Some((key, value))
    }

    fn expired(&self) -> bool {
        self.key.expired() || self.value.expired()
    }

    fn steal(self, view: Self::View) -> Self::Strong {
        view
    }

    fn with_key<F, R>(&self, view: &Self::View, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        K::with_key(&view.0, f)
    }

    fn with_strong_key<F, R>(strong: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        K::with_key(&strong.0, f)
    }
}
