use std::rc::{Rc, Weak};

use weak_collections::weak_weak_hash_map::Entry;
use weak_collections::WeakWeakHashMap;

type Map = WeakWeakHashMap<Weak<String>, Weak<u32>>;

#[test]
fn mapping_needs_both_sides_alive() {
    let mut map = Map::new();

    let key = Rc::new("k".to_owned());
    let value = Rc::new(5u32);
    map.insert(key.clone(), value.clone());

    assert_eq!(map.get("k").as_deref(), Some(&5));
    assert!(Rc::ptr_eq(&map.get_key("k").unwrap(), &key));

    let (k, v) = map.get_both("k").unwrap();
    assert!(Rc::ptr_eq(&k, &key));
    assert!(Rc::ptr_eq(&v, &value));
    drop((k, v));

    drop(value);
    assert!(map.get("k").is_none());
    assert!(map.get_key("k").is_none());

    // The key's referent alone does not revive the mapping.
    assert!(map.contains_key("k") == false);
}

#[test]
fn dropping_the_key_kills_the_mapping() {
    let mut map = Map::new();

    let key = Rc::new("k".to_owned());
    let value = Rc::new(5u32);
    map.insert(key.clone(), value.clone());

    drop(key);
    assert!(map.get("k").is_none());
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.len(), 1, "expiry is invisible until collected");

    map.remove_expired();
    assert_eq!(map.len(), 0);
}

#[test]
fn entry_revives_a_dead_mapping() {
    let mut map = Map::new();

    let key = Rc::new("k".to_owned());
    let value = Rc::new(1u32);
    map.insert(key.clone(), value.clone());
    let len_before = map.len();

    drop(value);
    assert!(map.get("k").is_none());

    let value = map.entry(key.clone()).or_insert(Rc::new(2));
    assert_eq!(*value, 2);
    assert_eq!(map.get("k").as_deref(), Some(&2));
    assert_eq!(map.len(), len_before, "the dead bucket was reused");
}

#[test]
fn entry_occupied_replaces_both_weak_halves() {
    let mut map = Map::new();

    let first_key = Rc::new("k".to_owned());
    let first_value = Rc::new(1u32);
    map.insert(first_key.clone(), first_value.clone());

    let second_key = Rc::new("k".to_owned());
    let second_value = Rc::new(2u32);
    match map.entry(second_key.clone()) {
        Entry::Occupied(mut occupied) => {
            let old = occupied.insert(second_value.clone());
            assert!(Rc::ptr_eq(&old, &first_value));
        }
        Entry::Vacant(_) => panic!("expected occupied"),
    }

    // The mapping now lives on the second key's referent.
    drop(first_key);
    drop(first_value);
    assert_eq!(map.get("k").as_deref(), Some(&2));
}

#[test]
fn insert_returns_the_old_value() {
    let mut map = Map::new();

    let key = Rc::new("k".to_owned());
    let a = Rc::new(1u32);
    let b = Rc::new(2u32);

    assert!(map.insert(key.clone(), a.clone()).is_none());
    let old = map.insert(key.clone(), b.clone()).unwrap();
    assert!(Rc::ptr_eq(&old, &a));
    assert_eq!(map.len(), 1);
}

#[test]
fn retain_and_remove() {
    let mut map: WeakWeakHashMap<Weak<u32>, Weak<u32>> = WeakWeakHashMap::new();
    let keys: Vec<Rc<u32>> = (0..6).map(Rc::new).collect();
    let values: Vec<Rc<u32>> = (10..16).map(Rc::new).collect();

    for (k, v) in keys.iter().zip(&values) {
        map.insert(k.clone(), v.clone());
    }

    map.retain(|k, _| *k % 2 == 0);
    assert_eq!(map.len(), 3);

    let removed = map.remove(&0).unwrap();
    assert!(Rc::ptr_eq(&removed, &values[0]));
    assert!(map.get(&0).is_none());
}

#[test]
fn equality_and_submaps() {
    let keys: Vec<Rc<u32>> = (0..3).map(Rc::new).collect();
    let values: Vec<Rc<u32>> = (10..13).map(Rc::new).collect();

    let a: WeakWeakHashMap<Weak<u32>, Weak<u32>> =
        keys.iter().zip(&values).map(|(k, v)| (k.clone(), v.clone())).collect();
    let b: WeakWeakHashMap<Weak<u32>, Weak<u32>> =
        keys.iter().zip(&values).map(|(k, v)| (k.clone(), v.clone())).collect();

    assert!(a == b);
    assert!(a.is_submap(&b));
    assert!(a.domain_is_subset(&b));
}
