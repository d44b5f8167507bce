//! The weak Robin Hood hash table underlying every container in this
//! crate.
//!
//! The table is open-addressed with linear probing in Robin Hood
//! order, complicated by *invisible deletion*: any element can expire
//! at any moment, without the table being told, when the program drops
//! the last strong reference to one of its referents. Three rules keep
//! the table coherent in spite of that:
//!
//!   - every bucket stores its (masked) hash code for as long as it is
//!     used *or* vacated, so probe distances never depend on a referent
//!     that may be gone;
//!   - lookups and insertions re-lock an element every time they need
//!     it live, and treat a bucket whose lock fails as logically
//!     vacant while still honoring its position in the probe order;
//!   - erasure leaves a tombstone rather than a hole, so chains built
//!     before the erasure stay reachable.
//!
//! Because expiry is invisible, [`WeakTable::len`] only bounds the
//! number of live elements from above. [`WeakTable::remove_expired`]
//! sweeps the dead buckets and makes it exact.

use crate::bucket::{Bucket, HashCode, RawBuckets, HASH_MASK};
use crate::compat::*;
use crate::traits::TableElement;

pub(crate) const DEFAULT_BUCKET_COUNT: usize = 8;
const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.8;

/// A hash table of weak elements, generic over the element shape.
///
/// This is the engine behind [`WeakHashSet`](crate::WeakHashSet) and
/// the three weak map types, which are thin shells around it. It can
/// be used directly with any [`TableElement`] implementation.
pub struct WeakTable<E, S = RandomState> {
    hash_builder: S,
    pub(crate) inner: InnerTable<E>,
}

/// Everything but the hasher.
///
/// Entry types in the container modules borrow this part of the table
/// while holding on to a hash code they already computed, which is why
/// the hasher lives outside it.
pub(crate) struct InnerTable<E> {
    buckets: RawBuckets<E>,
    len: usize,
    max_load_factor: f32,
}

/// Where a probe for a key came to rest.
///
/// This is the insertion primitive the map entry APIs drive: one probe
/// classifies the landing bucket, and the matching commit operation
/// (`insert_from`, `assign_at`, or plain element access) finishes the
/// job outside the loop, so nothing is probed twice.
pub(crate) enum Slot<V> {
    /// An insertion point: the bucket is unused, a tombstone, or holds
    /// a live element closer to home than the probe, which
    /// `insert_from` will displace.
    Vacant { pos: usize, dist: usize },
    /// A used bucket whose element has expired; committing overwrites
    /// it in place.
    Dead { pos: usize },
    /// A live element with an equal key, locked.
    Match { pos: usize, view: V },
}

// Helper trait for computing with indices modulo capacity.
pub(crate) trait ModuloCapacity {
    fn capacity(&self) -> usize;

    fn probe_distance(&self, actual: usize, ideal: usize) -> usize {
        if actual >= ideal {
            actual - ideal
        } else {
            actual + self.capacity() - ideal
        }
    }

    fn next_bucket(&self, pos: usize) -> usize {
        (pos + 1) % self.capacity()
    }

    fn which_bucket(&self, hash_code: HashCode) -> usize {
        (hash_code.0 as usize) % self.capacity()
    }
}

impl<E> ModuloCapacity for InnerTable<E> {
    fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

impl<E: TableElement> WeakTable<E, RandomState> {
    /// Creates an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty table with the given bucket count.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<E: TableElement, S: BuildHasher> WeakTable<E, S> {
    /// Creates an empty table with the given hasher.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_BUCKET_COUNT, hash_builder)
    }

    /// Creates an empty table with the given bucket count and hasher.
    ///
    /// At least the default bucket count is always allocated.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        WeakTable {
            hash_builder,
            inner: InnerTable {
                buckets: RawBuckets::new(max(DEFAULT_BUCKET_COUNT, capacity)),
                len: 0,
                max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            },
        }
    }

    /// Returns a reference to the table's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Inserts an element, growing the table first if it is over
    /// budget.
    ///
    /// If a live element with an equal key is already present, the
    /// whole stored element is replaced, re-pointing the table at the
    /// new referents. A dead or vacated bucket on the probe path is
    /// reused.
    pub fn insert(&mut self, strong: E::Strong) {
        self.inner.maybe_grow();
        let hash_code = self.hash_strong(&strong);
        let pos = self.inner.which_bucket(hash_code);
        self.inner.insert_from(pos, 0, hash_code, strong);
    }

    /// Looks up a key, returning a locked view of the matching
    /// element.
    ///
    /// The view pins the element's referents for as long as the caller
    /// holds it.
    pub fn get<Q>(&self, key: &Q) -> Option<E::View>
        where Q: ?Sized + Hash + Eq,
              E::Key: Borrow<Q>
    {
        let hash_code = self.hash(key);
        self.inner.find_bucket(hash_code, key).map(|(_, view)| view)
    }

    /// Is there a live element with the given key?
    pub fn contains<Q>(&self, key: &Q) -> bool
        where Q: ?Sized + Hash + Eq,
              E::Key: Borrow<Q>
    {
        let hash_code = self.hash(key);
        self.inner.find_bucket(hash_code, key).is_some()
    }

    /// The number of live elements with the given key: 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
        where Q: ?Sized + Hash + Eq,
              E::Key: Borrow<Q>
    {
        if self.contains(key) { 1 } else { 0 }
    }

    /// Erases the element with the given key, returning whether one
    /// was found.
    ///
    /// The vacated bucket becomes a tombstone.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
        where Q: ?Sized + Hash + Eq,
              E::Key: Borrow<Q>
    {
        let hash_code = self.hash(key);
        match self.inner.find_bucket(hash_code, key) {
            Some((pos, _)) => {
                drop(self.inner.remove_at(pos));
                true
            }
            None => false,
        }
    }

    /// Reserves room for `additional` more elements.
    ///
    /// Expired elements are collected first, so the resulting capacity
    /// is based on the exact live count.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.remove_expired();
        let needed = max(self.inner.len + additional, self.inner.min_buckets() + 1);
        if needed > self.capacity() {
            self.inner.resize(needed);
        }
    }

    /// Shrinks the capacity to the minimum that keeps the surviving
    /// elements under the load budget.
    pub fn shrink_to_fit(&mut self) {
        self.inner.remove_expired();
        let target = max(DEFAULT_BUCKET_COUNT, self.inner.min_buckets() + 1);
        if target < self.capacity() {
            self.inner.resize(target);
        }
    }

    pub(crate) fn hash<Q>(&self, key: &Q) -> HashCode
        where Q: ?Sized + Hash
    {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        HashCode(hasher.finish() & HASH_MASK)
    }

    pub(crate) fn hash_strong(&self, strong: &E::Strong) -> HashCode {
        E::with_strong_key(strong, |key| self.hash(key))
    }
}

impl<E: TableElement, S> WeakTable<E, S> {
    /// The number of buckets.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// An upper bound on the number of live elements.
    ///
    /// Elements that expired without the table noticing are still
    /// counted; `remove_expired` makes the count exact.
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Is the table known to be empty?
    ///
    /// This can answer `false` for a table all of whose elements have
    /// expired but have yet to be collected.
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// The proportion of buckets in use, counting not-yet-collected
    /// expired elements.
    pub fn load_factor(&self) -> f32 {
        self.inner.load_factor()
    }

    /// The load factor above which insertion grows the table.
    pub fn max_load_factor(&self) -> f32 {
        self.inner.max_load_factor
    }

    /// Sets the maximum load factor.
    ///
    /// # Panics
    ///
    /// If `new_value` is not strictly between 0 and 1.
    pub fn set_max_load_factor(&mut self, new_value: f32) {
        assert!(
            0.0 < new_value && new_value < 1.0,
            "WeakTable::set_max_load_factor: value outside (0, 1)"
        );
        self.inner.max_load_factor = new_value;
    }

    /// Destroys the expired elements, leaving tombstones. Afterwards,
    /// `len` equals the number of live elements.
    pub fn remove_expired(&mut self) {
        self.inner.remove_expired()
    }

    /// Destroys every element and clears every tombstone, keeping the
    /// allocation.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Gets an iterator over the live elements and their locked views.
    pub fn iter(&self) -> Iter<E> {
        Iter {
            base: self.inner.buckets.iter(),
            size: self.inner.len,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<E> {
        IterMut {
            base: self.inner.buckets.iter_mut(),
            size: self.inner.len,
        }
    }

    /// Gets a draining iterator, which moves out the live elements and
    /// leaves the table empty with its storage intact.
    pub fn drain(&mut self) -> Drain<E> {
        let old_len = self.inner.len;
        self.inner.len = 0;
        Drain {
            base: self.inner.buckets.iter_mut(),
            size: old_len,
        }
    }
}

impl<E: TableElement, S: BuildHasher + Default> Default for WeakTable<E, S> {
    fn default() -> Self {
        WeakTable::with_hasher(Default::default())
    }
}

impl<E: Clone, S: Clone> Clone for WeakTable<E, S> {
    fn clone(&self) -> Self {
        WeakTable {
            hash_builder: self.hash_builder.clone(),
            inner: InnerTable {
                buckets: self.inner.buckets.clone(),
                len: self.inner.len,
                max_load_factor: self.inner.max_load_factor,
            },
        }
    }
}

impl<E: Debug, S> Debug for WeakTable<E, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, bucket) in self.inner.buckets.iter().enumerate() {
            if bucket.is_used() {
                // SAFETY: used bit checked.
                let elem = unsafe { bucket.elem() };
                write!(f, "[{}] {:?} ({:x}), ", i, elem, bucket.hash_code().0)?;
            }
        }
        write!(f, "}}")
    }
}

impl<E: TableElement> InnerTable<E> {
    fn load_factor(&self) -> f32 {
        if self.capacity() == 0 {
            return 1.0;
        }
        self.len as f32 / self.capacity() as f32
    }

    fn over_budget(&self) -> bool {
        self.len >= self.capacity() || self.load_factor() > self.max_load_factor
    }

    /// The fewest buckets that keep `len` elements within the load
    /// budget.
    fn min_buckets(&self) -> usize {
        let want = self.len as f32 / self.max_load_factor;
        let floor = want as usize;
        if (floor as f32) < want { floor + 1 } else { floor }
    }

    /// Grows if an insertion would push the table over budget,
    /// collecting expired elements before paying for a resize.
    pub(crate) fn maybe_grow(&mut self) {
        if self.capacity() == 0 {
            self.resize(DEFAULT_BUCKET_COUNT);
            return;
        }
        if self.over_budget() {
            self.remove_expired();
            if self.over_budget() {
                let target = max(2 * self.capacity(), self.len + 1);
                self.resize(target);
            }
        }
    }

    /// Replaces the bucket array and re-inserts the surviving elements
    /// using their stored hash codes. Dead elements and tombstones are
    /// dropped on the way.
    fn resize(&mut self, new_bucket_count: usize) {
        assert!(
            new_bucket_count > self.len,
            "WeakTable::resize: too small for contents"
        );

        let mut old_buckets = RawBuckets::new(new_bucket_count);
        mem::swap(&mut self.buckets, &mut old_buckets);
        self.len = 0;

        for bucket in old_buckets.iter_mut() {
            if bucket.is_used() {
                let hash_code = bucket.hash_code();
                // SAFETY: used bit checked; taking clears it, so the
                // old array frees without touching the element again.
                let elem = unsafe { bucket.take_to_empty() };
                if let Some(view) = elem.lock() {
                    let strong = elem.steal(view);
                    let home = self.which_bucket(hash_code);
                    self.insert_from(home, 0, hash_code, strong);
                }
            }
        }
    }

    /// Looks up a key whose hash code is already computed, returning
    /// the bucket index and a locked view of the element.
    ///
    /// Dead buckets are traversed as if live: they keep their place in
    /// the probe order but can never match, because matching requires
    /// a successful lock.
    pub(crate) fn find_bucket<Q>(&self, hash_code: HashCode, key: &Q) -> Option<(usize, E::View)>
        where Q: ?Sized + Eq,
              E::Key: Borrow<Q>
    {
        if self.capacity() == 0 {
            return None;
        }

        let mut pos = self.which_bucket(hash_code);
        let mut dist = 0;

        loop {
            let bucket = &self.buckets[pos];
            if !bucket.is_used() && !bucket.is_tombstone() {
                return None;
            }

            // Tombstones kept their hash, so they bound the probe just
            // like live buckets.
            if dist > self.probe_distance(pos, self.which_bucket(bucket.hash_code())) {
                return None;
            }

            if bucket.is_used() && bucket.hash_code() == hash_code {
                // SAFETY: used bit checked.
                let elem = unsafe { bucket.elem() };
                if let Some(view) = elem.lock() {
                    if elem.with_key(&view, |stored| *key == *stored.borrow()) {
                        return Some((pos, view));
                    }
                }
            }

            pos = self.next_bucket(pos);
            dist += 1;
        }
    }

    /// Classifies the bucket where an insertion for `key` would land.
    ///
    /// The capacity must be nonzero; callers grow first.
    pub(crate) fn find_slot<Q>(&self, hash_code: HashCode, key: &Q) -> Slot<E::View>
        where Q: ?Sized + Eq,
              E::Key: Borrow<Q>
    {
        let mut pos = self.which_bucket(hash_code);
        let mut dist = 0;

        loop {
            let bucket = &self.buckets[pos];
            if !bucket.is_used() {
                return Slot::Vacant { pos, dist };
            }

            // SAFETY: used bit checked.
            let elem = unsafe { bucket.elem() };
            match elem.lock() {
                None => return Slot::Dead { pos },
                Some(view) => {
                    if bucket.hash_code() == hash_code
                        && elem.with_key(&view, |stored| *key == *stored.borrow())
                    {
                        return Slot::Match { pos, view };
                    }
                    if dist > self.probe_distance(pos, self.which_bucket(bucket.hash_code())) {
                        return Slot::Vacant { pos, dist };
                    }
                }
            }

            pos = self.next_bucket(pos);
            dist += 1;
        }
    }

    /// Runs the insertion loop starting at `pos` with probe distance
    /// `dist`, returning the bucket where the incoming element landed.
    ///
    /// The element count is maintained here: constructing into an
    /// unused or tombstoned bucket counts, overwriting a dead or
    /// matching bucket does not, since dead buckets were never
    /// uncounted.
    pub(crate) fn insert_from(
        &mut self,
        mut pos: usize,
        mut dist: usize,
        mut hash_code: HashCode,
        mut value: E::Strong,
    ) -> usize {
        enum Step<V> {
            Construct,
            Overwrite,
            Displace(V, usize),
            Advance,
        }

        let mut landed = None;

        loop {
            let step = {
                let bucket = &self.buckets[pos];
                if !bucket.is_used() {
                    Step::Construct
                } else {
                    // SAFETY: used bit checked.
                    let elem = unsafe { bucket.elem() };
                    match elem.lock() {
                        None => Step::Overwrite,
                        Some(view) => {
                            let matches = bucket.hash_code() == hash_code
                                && E::with_strong_key(&value, |incoming| {
                                    elem.with_key(&view, |stored| incoming == stored)
                                });
                            if matches {
                                Step::Overwrite
                            } else {
                                let resident_dist = self
                                    .probe_distance(pos, self.which_bucket(bucket.hash_code()));
                                if dist > resident_dist {
                                    Step::Displace(view, resident_dist)
                                } else {
                                    Step::Advance
                                }
                            }
                        }
                    }
                }
            };

            match step {
                Step::Construct => {
                    self.buckets[pos].write(hash_code, E::store(value));
                    self.len += 1;
                    return landed.unwrap_or(pos);
                }
                Step::Overwrite => {
                    // SAFETY: the bucket was used when classified just
                    // above, and nothing has touched it since.
                    unsafe {
                        self.buckets[pos].assign(hash_code, E::store(value));
                    }
                    return landed.unwrap_or(pos);
                }
                Step::Displace(view, resident_dist) => {
                    // The resident is live and farther-traveled entries
                    // win its slot: move it out through the view we just
                    // locked and keep walking with it.
                    let bucket = &mut self.buckets[pos];
                    let resident_hash = bucket.hash_code();
                    // SAFETY: used bit checked during classification.
                    let resident = unsafe { bucket.take_to_empty() };
                    bucket.write(hash_code, E::store(value));
                    if landed.is_none() {
                        landed = Some(pos);
                    }
                    value = resident.steal(view);
                    hash_code = resident_hash;
                    dist = resident_dist;

                    pos = self.next_bucket(pos);
                    dist += 1;
                }
                Step::Advance => {
                    pos = self.next_bucket(pos);
                    dist += 1;
                }
            }
        }
    }

    /// Overwrites the used bucket at `pos` in place.
    pub(crate) fn assign_at(&mut self, pos: usize, hash_code: HashCode, value: E::Strong) {
        // SAFETY: callers only pass positions of used buckets.
        unsafe {
            self.buckets[pos].assign(hash_code, E::store(value));
        }
    }

    /// Vacates the used bucket at `pos`, leaving a tombstone, and
    /// returns the stored element.
    pub(crate) fn remove_at(&mut self, pos: usize) -> E {
        // SAFETY: callers only pass positions of used buckets.
        let elem = unsafe { self.buckets[pos].take_to_tombstone() };
        self.len -= 1;
        elem
    }

    /// Borrows the element in the used bucket at `pos`.
    pub(crate) fn element(&self, pos: usize) -> &E {
        // SAFETY: callers only pass positions of used buckets.
        unsafe { self.buckets[pos].elem() }
    }

    /// Mutably borrows the element in the used bucket at `pos`.
    pub(crate) fn element_mut(&mut self, pos: usize) -> &mut E {
        // SAFETY: callers only pass positions of used buckets.
        unsafe { self.buckets[pos].elem_mut() }
    }

    pub(crate) fn remove_expired(&mut self) {
        for bucket in self.buckets.iter_mut() {
            if bucket.is_used() {
                // SAFETY: used bit checked.
                if unsafe { bucket.elem() }.expired() {
                    // SAFETY: still used; taking vacates it.
                    drop(unsafe { bucket.take_to_tombstone() });
                    self.len -= 1;
                }
            }
        }
    }

    /// Keeps only the live elements the predicate approves of; the
    /// rest become tombstones.
    pub(crate) fn retain_with<F>(&mut self, mut keep: F)
        where F: FnMut(&mut E, E::View) -> bool
    {
        for pos in 0..self.capacity() {
            let remove = {
                let bucket = &mut self.buckets[pos];
                if bucket.is_used() {
                    // SAFETY: used bit checked.
                    let elem = unsafe { bucket.elem_mut() };
                    match elem.lock() {
                        None => true,
                        Some(view) => !keep(elem, view),
                    }
                } else {
                    false
                }
            };

            if remove {
                drop(self.remove_at(pos));
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.reset();
        }
        self.len = 0;
    }
}

impl<E> Drop for InnerTable<E> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.reset();
        }
    }
}

/// An iterator over the live elements of a weak table.
///
/// Liveness is re-checked as the iterator advances: a bucket whose
/// element expired since the last step is skipped, and the yielded
/// view pins its referents while the caller holds it.
pub struct Iter<'a, E> {
    base: slice::Iter<'a, Bucket<E>>,
    size: usize,
}

impl<'a, E: TableElement> Iterator for Iter<'a, E> {
    type Item = (&'a E, E::View);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.base.next() {
            if bucket.is_used() {
                self.size -= 1;
                // SAFETY: used bit checked.
                let elem = unsafe { bucket.elem() };
                if let Some(view) = elem.lock() {
                    return Some((elem, view));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.size))
    }
}

impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Iter {
            base: self.base.clone(),
            size: self.size,
        }
    }
}

/// An iterator over the live elements of a weak table, with mutable
/// access to the stored elements.
///
/// Kept crate-internal: the containers use it to hand out mutable
/// borrows of value halves only, which can never unsettle an element's
/// hash.
pub(crate) struct IterMut<'a, E> {
    base: slice::IterMut<'a, Bucket<E>>,
    size: usize,
}

impl<'a, E: TableElement> Iterator for IterMut<'a, E> {
    type Item = (E::View, &'a mut E);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.base.next() {
            if bucket.is_used() {
                self.size -= 1;
                // SAFETY: used bit checked.
                let elem = unsafe { bucket.elem_mut() };
                if let Some(view) = elem.lock() {
                    return Some((view, elem));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.size))
    }
}

/// An iterator that consumes a weak table, yielding its live elements
/// in strong form.
pub struct IntoIter<E> {
    base: vec::IntoIter<Bucket<E>>,
    size: usize,
}

impl<E: TableElement> Iterator for IntoIter<E> {
    type Item = E::Strong;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.base.next() {
            if let Some(elem) = bucket.into_elem() {
                self.size -= 1;
                if let Some(view) = elem.lock() {
                    return Some(elem.steal(view));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.size))
    }
}

impl<E> Drop for IntoIter<E> {
    fn drop(&mut self) {
        for bucket in &mut self.base {
            drop(bucket.into_elem());
        }
    }
}

/// An iterator that drains a weak table, yielding its live elements in
/// strong form and leaving every bucket empty.
pub struct Drain<'a, E> {
    base: slice::IterMut<'a, Bucket<E>>,
    size: usize,
}

impl<'a, E: TableElement> Iterator for Drain<'a, E> {
    type Item = E::Strong;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.base.next() {
            if let Some(elem) = bucket.drain() {
                self.size -= 1;
                if let Some(view) = elem.lock() {
                    return Some(elem.steal(view));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.size))
    }
}

impl<'a, E> Drop for Drain<'a, E> {
    fn drop(&mut self) {
        for bucket in &mut self.base {
            bucket.reset();
        }
    }
}

impl<E: TableElement, S> IntoIterator for WeakTable<E, S> {
    type Item = E::Strong;
    type IntoIter = IntoIter<E>;

    fn into_iter(mut self) -> IntoIter<E> {
        let buckets = mem::replace(&mut self.inner.buckets, RawBuckets::new(0));
        let size = self.inner.len;
        self.inner.len = 0;
        IntoIter {
            base: buckets.into_vec().into_iter(),
            size,
        }
    }
}

impl<'a, E: TableElement, S> IntoIterator for &'a WeakTable<E, S> {
    type Item = (&'a E, E::View);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}
