use std::hash::{BuildHasher, Hasher};
use std::rc::{Rc, Weak};

use weak_collections::{PtrWeakHashSet, WeakHashSet};

#[test]
fn membership_follows_strong_references() {
    let mut set: WeakHashSet<Weak<String>> = WeakHashSet::new();

    let hello = Rc::new("hello".to_owned());
    set.insert(hello.clone());

    assert!(set.contains("hello"));
    assert!(!set.contains("world"));

    let elems: Vec<Rc<String>> = set.iter().collect();
    assert_eq!(elems.len(), 1);
    assert_eq!(*elems[0], "hello");
    drop(elems);

    drop(hello);
    assert!(!set.contains("hello"));
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn growth_to_a_thousand_elements() {
    let mut set: WeakHashSet<Weak<u64>> = WeakHashSet::new();
    let mut strongs: Vec<Rc<u64>> = (0..1000).map(Rc::new).collect();

    for strong in &strongs {
        set.insert(Rc::clone(strong));
    }

    assert_eq!(set.len(), 1000);
    assert!(set.contains(&999));

    strongs.pop();
    assert_eq!(set.len(), 1000, "len does not see the drop");
    assert!(!set.contains(&999));
    assert_eq!(set.iter().count(), 999);
}

// Forces heavy collisions: every run of ten integers hashes alike.
#[derive(Clone, Default)]
struct Tens;

struct TensHasher(u64);

impl BuildHasher for Tens {
    type Hasher = TensHasher;

    fn build_hasher(&self) -> TensHasher {
        TensHasher(0)
    }
}

impl Hasher for TensHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(b));
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = (n / 10) * 5;
    }
}

fn assert_all_present(set: &WeakHashSet<Weak<u64>, Tens>, strongs: &[Rc<u64>]) {
    for strong in strongs {
        assert!(set.contains(&**strong), "{} went missing", strong);
    }
}

#[test]
fn erasure_under_heavy_collisions() {
    let mut set: WeakHashSet<Weak<u64>, Tens> = WeakHashSet::with_hasher(Tens);
    let mut strongs: Vec<Rc<u64>> = (0..20).map(Rc::new).collect();

    for strong in &strongs {
        set.insert(Rc::clone(strong));
    }
    assert_all_present(&set, &strongs);

    assert!(set.remove(&0));
    strongs.retain(|rc| **rc != 0);
    assert_all_present(&set, &strongs);

    strongs.retain(|rc| **rc < 3 || **rc > 5);
    assert_all_present(&set, &strongs);
    for n in 3..=5 {
        assert!(!set.contains(&n));
    }

    assert!(set.remove(&1));
    strongs.retain(|rc| **rc != 1);
    assert_all_present(&set, &strongs);
}

#[test]
fn get_returns_the_stored_pointer() {
    let mut set: WeakHashSet<Weak<String>> = WeakHashSet::new();

    let a = Rc::new("a".to_owned());
    set.insert(a.clone());

    let also_a = set.get("a").unwrap();
    assert!(Rc::ptr_eq(&a, &also_a));
}

#[test]
fn reinsertion_replaces_the_stored_pointer() {
    let mut set: WeakHashSet<Weak<String>> = WeakHashSet::new();

    let first = Rc::new("a".to_owned());
    let second = Rc::new("a".to_owned());

    assert!(!set.insert(first.clone()));
    assert!(set.insert(second.clone()));
    assert_eq!(set.len(), 1);

    // The set now survives on the second pointer alone.
    drop(first);
    assert!(set.contains("a"));
    assert!(Rc::ptr_eq(&set.get("a").unwrap(), &second));
}

#[test]
fn remove_expired_restores_exact_len() {
    let mut set: WeakHashSet<Weak<u64>> = WeakHashSet::new();
    let mut strongs: Vec<Rc<u64>> = (0..10).map(Rc::new).collect();

    for strong in &strongs {
        set.insert(Rc::clone(strong));
    }

    strongs.truncate(4);
    assert_eq!(set.len(), 10);

    set.remove_expired();
    assert_eq!(set.len(), 4);
    assert_eq!(set.iter().count(), 4);
}

#[test]
fn clear_empties_but_keeps_capacity() {
    let mut set: WeakHashSet<Weak<u64>> = WeakHashSet::with_capacity(64);
    let strongs: Vec<Rc<u64>> = (0..10).map(Rc::new).collect();

    for strong in &strongs {
        set.insert(Rc::clone(strong));
    }

    let capacity = set.capacity();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
    assert_eq!(set.capacity(), capacity);
}

#[test]
fn subset_and_equality() {
    let small: Vec<Rc<u64>> = (0..3).map(Rc::new).collect();
    let large: Vec<Rc<u64>> = (0..6).map(Rc::new).collect();

    let small_set: WeakHashSet<Weak<u64>> = small.iter().cloned().collect();
    let large_set: WeakHashSet<Weak<u64>> = large.iter().cloned().collect();
    let small_again: WeakHashSet<Weak<u64>> = small.iter().cloned().collect();

    assert!(small_set.is_subset(&large_set));
    assert!(!large_set.is_subset(&small_set));
    assert!(small_set == small_again);
    assert!(small_set != large_set);
}

#[test]
fn clone_preserves_membership() {
    let strongs: Vec<Rc<u64>> = (0..5).map(Rc::new).collect();
    let set: WeakHashSet<Weak<u64>> = strongs.iter().cloned().collect();

    let copy = set.clone();
    for strong in &strongs {
        assert!(copy.contains(&**strong));
    }
    assert_eq!(copy.len(), set.len());
}

#[test]
fn drain_and_reuse() {
    let mut set: WeakHashSet<Weak<u64>> = WeakHashSet::new();
    let strongs: Vec<Rc<u64>> = (0..5).map(Rc::new).collect();

    for strong in &strongs {
        set.insert(Rc::clone(strong));
    }

    let mut drained: Vec<u64> = set.drain().map(|rc| *rc).collect();
    drained.sort_unstable();
    assert_eq!(drained, [0, 1, 2, 3, 4]);
    assert!(set.is_empty());

    set.insert(Rc::clone(&strongs[0]));
    assert!(set.contains(&0));
}

#[test]
fn ptr_set_compares_by_pointer() {
    let mut set: PtrWeakHashSet<Weak<String>> = PtrWeakHashSet::new();

    let first = Rc::new("a".to_owned());
    let second = Rc::new("a".to_owned());

    assert!(!set.insert(first.clone()));
    assert!(!set.insert(second.clone()));

    // Equal contents, distinct referents: both are members.
    assert_eq!(set.iter().count(), 2);
    assert!(set.contains(&first));
    assert!(set.contains(&second));

    drop(second);
    assert_eq!(set.iter().count(), 1);
    assert!(set.contains(&first));

    assert!(set.remove(&first));
    assert_eq!(set.iter().count(), 0);
}
