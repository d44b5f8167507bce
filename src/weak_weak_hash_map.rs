//! A hash map where both the keys and the values are held by weak
//! pointers.

use crate::bucket::HashCode;
use crate::compat::*;
use crate::pairs::WeakWeakPair;
use crate::traits::{WeakElement, WeakKey};
use crate::weak_table::{self, InnerTable, Slot, WeakTable};

/// A hash map where both the keys and the values are held by weak
/// pointers.
///
/// A mapping is present only while the program holds strong pointers
/// to the key's referent *and* the value's referent; dropping either
/// makes the mapping absent immediately.
pub struct WeakWeakHashMap<K, V, S = RandomState>(WeakTable<WeakWeakPair<K, V>, S>);

/// Represents an entry in the table which may be occupied or vacant.
pub enum Entry<'a, K: 'a + WeakKey, V: 'a + WeakElement> {
    Occupied(OccupiedEntry<'a, K, V>),
    Vacant(VacantEntry<'a, K, V>),
}

/// An occupied entry, which can be removed or viewed.
pub struct OccupiedEntry<'a, K: WeakKey, V: WeakElement> {
    inner: InnerEntry<'a, K, V>,
    value: V::Strong,
}

/// A vacant entry, which can be inserted in or viewed.
pub struct VacantEntry<'a, K: WeakKey, V: WeakElement> {
    inner: InnerEntry<'a, K, V>,
}

struct InnerEntry<'a, K: WeakKey, V: WeakElement> {
    table: &'a mut InnerTable<WeakWeakPair<K, V>>,
    pos: usize,
    dist: usize,
    dead: bool,
    key: K::Strong,
    hash_code: HashCode,
}

impl<K: WeakKey, V: WeakElement> WeakWeakHashMap<K, V, RandomState> {
    /// Creates an empty `WeakWeakHashMap`.
    pub fn new() -> Self {
        WeakWeakHashMap(WeakTable::new())
    }

    /// Creates an empty `WeakWeakHashMap` with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        WeakWeakHashMap(WeakTable::with_capacity(capacity))
    }
}

impl<K: WeakKey, V: WeakElement, S: BuildHasher> WeakWeakHashMap<K, V, S> {
    /// Creates an empty `WeakWeakHashMap` with the given hasher.
    pub fn with_hasher(hash_builder: S) -> Self {
        WeakWeakHashMap(WeakTable::with_hasher(hash_builder))
    }

    /// Creates an empty `WeakWeakHashMap` with the given capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        WeakWeakHashMap(WeakTable::with_capacity_and_hasher(capacity, hash_builder))
    }

    /// Returns a reference to the map's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        self.0.hasher()
    }

    /// Returns the number of buckets in the map.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Removes all mappings whose keys or values have expired.
    pub fn remove_expired(&mut self) {
        self.0.remove_expired()
    }

    /// Reserves room for additional elements.
    pub fn reserve(&mut self, additional_capacity: usize) {
        self.0.reserve(additional_capacity)
    }

    /// Shrinks the capacity to the minimum allowed to hold the current
    /// number of elements.
    pub fn shrink_to_fit(&mut self) {
        self.0.shrink_to_fit()
    }

    /// Returns an over-approximation of the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the map empty?
    ///
    /// Note that this may return false even if all keys in the map have
    /// expired, if they haven't been collected yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The proportion of buckets that are used.
    ///
    /// This is an over-approximation because of expired mappings.
    pub fn load_factor(&self) -> f32 {
        self.0.load_factor()
    }

    /// Sets the load factor above which insertion grows the map.
    ///
    /// # Panics
    ///
    /// If `new_value` is not strictly between 0 and 1.
    pub fn set_max_load_factor(&mut self, new_value: f32) {
        self.0.set_max_load_factor(new_value)
    }

    /// Removes all associations from the map.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Gets the requested entry.
    pub fn entry(&mut self, key: K::Strong) -> Entry<K, V> {
        self.0.inner.maybe_grow();
        let hash_code = K::with_key(&key, |k| self.0.hash(k));
        let slot = K::with_key(&key, |k| self.0.inner.find_slot(hash_code, k));
        let table = &mut self.0.inner;
        match slot {
            Slot::Match { pos, view } => Entry::Occupied(OccupiedEntry {
                inner: InnerEntry { table, pos, dist: 0, dead: false, key, hash_code },
                value: view.1,
            }),
            Slot::Dead { pos } => Entry::Vacant(VacantEntry {
                inner: InnerEntry { table, pos, dist: 0, dead: true, key, hash_code },
            }),
            Slot::Vacant { pos, dist } => Entry::Vacant(VacantEntry {
                inner: InnerEntry { table, pos, dist, dead: false, key, hash_code },
            }),
        }
    }

    fn find_bucket<Q>(&self, key: &Q) -> Option<(usize, (K::Strong, V::Strong))>
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        let hash_code = self.0.hash(key);
        self.0.inner.find_bucket(hash_code, key)
    }

    /// Returns a strong reference to the value corresponding to the key.
    pub fn get<Q>(&self, key: &Q) -> Option<V::Strong>
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        self.find_bucket(key).map(|(_, view)| view.1)
    }

    /// Returns a strong reference to the stored key, if found.
    pub fn get_key<Q>(&self, key: &Q) -> Option<K::Strong>
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        self.find_bucket(key).map(|(_, view)| view.0)
    }

    /// Returns strong references to both the stored key and the value,
    /// if found.
    pub fn get_both<Q>(&self, key: &Q) -> Option<(K::Strong, V::Strong)>
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        self.find_bucket(key).map(|(_, view)| view)
    }

    /// Returns true if the map contains the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        self.find_bucket(key).is_some()
    }

    /// Unconditionally inserts the value, returning the old value if
    /// already present.
    ///
    /// If the key was present, the stored weak key is re-pointed at the
    /// given strong key's referent.
    pub fn insert(&mut self, key: K::Strong, value: V::Strong) -> Option<V::Strong> {
        match self.entry(key) {
            Entry::Occupied(mut occupied) => Some(occupied.insert(value)),
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                None
            }
        }
    }

    /// Removes the entry with the given key, if it exists, and returns
    /// the value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V::Strong>
        where Q: ?Sized + Hash + Eq,
              K::Key: Borrow<Q>
    {
        match self.find_bucket(key) {
            Some((pos, view)) => {
                drop(self.0.inner.remove_at(pos));
                Some(view.1)
            }
            None => None,
        }
    }

    /// Removes all mappings not satisfying the given predicate.
    ///
    /// Also removes any expired mappings.
    pub fn retain<F>(&mut self, mut f: F)
        where F: FnMut(K::Strong, V::Strong) -> bool
    {
        self.0.inner.retain_with(|_, view| f(view.0, view.1))
    }

    /// Is this map a submap of the other under the given value
    /// comparison?
    ///
    /// In particular, all the keys of `self` must be in `other` and the
    /// values must compare `true` with `value_equal`.
    pub fn is_submap_with<F, S1, V1>(
        &self,
        other: &WeakWeakHashMap<K, V1, S1>,
        mut value_equal: F,
    ) -> bool
        where V1: WeakElement,
              F: FnMut(V::Strong, V1::Strong) -> bool,
              S1: BuildHasher
    {
        for (key, value1) in self.iter() {
            let matched = K::with_key(&key, |k| match other.get(k) {
                Some(value2) => value_equal(value1, value2),
                None => false,
            });
            if !matched {
                return false;
            }
        }

        true
    }

    /// Is `self` a submap of `other`?
    pub fn is_submap<V1, S1>(&self, other: &WeakWeakHashMap<K, V1, S1>) -> bool
        where V1: WeakElement,
              V::Strong: PartialEq<V1::Strong>,
              S1: BuildHasher
    {
        self.is_submap_with(other, |v, v1| v == v1)
    }

    /// Are the keys of `self` a subset of the keys of `other`?
    pub fn domain_is_subset<V1, S1>(&self, other: &WeakWeakHashMap<K, V1, S1>) -> bool
        where V1: WeakElement,
              S1: BuildHasher
    {
        self.is_submap_with(other, |_, _| true)
    }
}

impl<'a, K: WeakKey, V: WeakElement> Entry<'a, K, V> {
    /// Ensures a value is in the entry by inserting a default value
    /// if empty.
    pub fn or_insert(self, default: V::Strong) -> V::Strong {
        self.or_insert_with(|| default)
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// default function if empty.
    pub fn or_insert_with<F: FnOnce() -> V::Strong>(self, default: F) -> V::Strong {
        match self {
            Entry::Occupied(occupied) => occupied.get_strong(),
            Entry::Vacant(vacant) => vacant.insert(default()),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K::Strong {
        match *self {
            Entry::Occupied(ref occupied) => occupied.key(),
            Entry::Vacant(ref vacant) => vacant.key(),
        }
    }
}

impl<'a, K: WeakKey, V: WeakElement> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key held by the entry.
    pub fn key(&self) -> &K::Strong {
        &self.inner.key
    }

    /// Takes ownership of the key and value from the map.
    pub fn remove_entry(self) -> (K::Strong, V::Strong) {
        drop(self.inner.table.remove_at(self.inner.pos));
        (self.inner.key, self.value)
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V::Strong {
        &self.value
    }

    /// Gets a copy of the strong value reference stored in the entry.
    pub fn get_strong(&self) -> V::Strong {
        V::clone(&self.value)
    }

    /// Replaces the value in the entry with the given value, returning
    /// the old value.
    ///
    /// Both stored weak pointers are refreshed: the key is re-pointed
    /// at this entry's strong key and the value at the new value.
    pub fn insert(&mut self, value: V::Strong) -> V::Strong {
        let pair = self.inner.table.element_mut(self.inner.pos);
        pair.key = K::new(&self.inner.key);
        pair.value = V::new(&value);
        mem::replace(&mut self.value, value)
    }

    /// Removes the entry, returning the value.
    pub fn remove(self) -> V::Strong {
        self.remove_entry().1
    }
}

impl<'a, K: WeakKey, V: WeakElement> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a
    /// value through the `VacantEntry`.
    pub fn key(&self) -> &K::Strong {
        &self.inner.key
    }

    /// Returns ownership of the key.
    pub fn into_key(self) -> K::Strong {
        self.inner.key
    }

    /// Inserts the value into the map, returning the same value.
    pub fn insert(self, value: V::Strong) -> V::Strong {
        let InnerEntry { table, pos, dist, dead, key, hash_code } = self.inner;

        let stored = V::clone(&value);
        if dead {
            table.assign_at(pos, hash_code, (key, stored));
        } else {
            table.insert_from(pos, dist, hash_code, (key, stored));
        }

        value
    }
}

/// An iterator over the keys and values of the weak hash map.
pub struct Iter<'a, K, V>(weak_table::Iter<'a, WeakWeakPair<K, V>>);

impl<'a, K: WeakKey, V: WeakElement> Iterator for Iter<'a, K, V> {
    type Item = (K::Strong, V::Strong);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, view)| view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// An iterator over the keys of the weak hash map.
pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K: WeakKey, V: WeakElement> Iterator for Keys<'a, K, V> {
    type Item = K::Strong;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of the weak hash map.
pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K: WeakKey, V: WeakElement> Iterator for Values<'a, K, V> {
    type Item = V::Strong;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator that consumes the map, yielding its live key-value
/// pairs.
pub struct IntoIter<K, V>(weak_table::IntoIter<WeakWeakPair<K, V>>);

impl<K: WeakKey, V: WeakElement> Iterator for IntoIter<K, V> {
    type Item = (K::Strong, V::Strong);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator that drains the map, leaving it empty.
pub struct Drain<'a, K, V>(weak_table::Drain<'a, WeakWeakPair<K, V>>);

impl<'a, K: WeakKey, V: WeakElement> Iterator for Drain<'a, K, V> {
    type Item = (K::Strong, V::Strong);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: WeakKey, V: WeakElement, S> WeakWeakHashMap<K, V, S> {
    /// Gets an iterator over the keys and values.
    pub fn iter(&self) -> Iter<K, V> {
        Iter(self.0.iter())
    }

    /// Gets an iterator over the keys.
    pub fn keys(&self) -> Keys<K, V> {
        Keys(self.iter())
    }

    /// Gets an iterator over the values.
    pub fn values(&self) -> Values<K, V> {
        Values(self.iter())
    }

    /// Gets a draining iterator, which removes all the values but
    /// retains the storage.
    pub fn drain(&mut self) -> Drain<K, V> {
        Drain(self.0.drain())
    }
}

impl<K, V, V1, S, S1> PartialEq<WeakWeakHashMap<K, V1, S1>> for WeakWeakHashMap<K, V, S>
    where K: WeakKey,
          V: WeakElement,
          V1: WeakElement,
          V::Strong: PartialEq<V1::Strong>,
          S: BuildHasher,
          S1: BuildHasher
{
    fn eq(&self, other: &WeakWeakHashMap<K, V1, S1>) -> bool {
        self.is_submap(other) && other.domain_is_subset(self)
    }
}

impl<K: WeakKey, V: WeakElement, S: BuildHasher> Eq for WeakWeakHashMap<K, V, S>
    where V::Strong: Eq
{ }

impl<K: WeakKey, V: WeakElement, S: BuildHasher + Default> Default for WeakWeakHashMap<K, V, S> {
    fn default() -> Self {
        WeakWeakHashMap(WeakTable::default())
    }
}

impl<K, V, S> FromIterator<(K::Strong, V::Strong)> for WeakWeakHashMap<K, V, S>
    where K: WeakKey,
          V: WeakElement,
          S: BuildHasher + Default
{
    fn from_iter<T: IntoIterator<Item=(K::Strong, V::Strong)>>(iter: T) -> Self {
        let mut result = WeakWeakHashMap::default();
        result.extend(iter);
        result
    }
}

impl<K, V, S> Extend<(K::Strong, V::Strong)> for WeakWeakHashMap<K, V, S>
    where K: WeakKey,
          V: WeakElement,
          S: BuildHasher
{
    fn extend<T: IntoIterator<Item=(K::Strong, V::Strong)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for WeakWeakHashMap<K, V, S> {
    fn clone(&self) -> Self {
        WeakWeakHashMap(self.0.clone())
    }
}

impl<K: Debug, V: Debug, S> Debug for WeakWeakHashMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<K: WeakKey, V: WeakElement, S> IntoIterator for WeakWeakHashMap<K, V, S> {
    type Item = (K::Strong, V::Strong);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

impl<'a, K: WeakKey, V: WeakElement, S> IntoIterator for &'a WeakWeakHashMap<K, V, S> {
    type Item = (K::Strong, V::Strong);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0.iter())
    }
}
