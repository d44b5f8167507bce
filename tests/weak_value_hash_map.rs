use std::rc::{Rc, Weak};

use weak_collections::weak_value_hash_map::Entry;
use weak_collections::WeakValueHashMap;

#[test]
fn mapping_dies_with_its_value() {
    let mut map: WeakValueHashMap<String, Weak<u32>> = WeakValueHashMap::new();
    assert!(map.get("hello").is_none());

    let five = Rc::new(5u32);
    map.insert("hello".to_owned(), five.clone());
    assert_eq!(map.get("hello").as_deref(), Some(&5));

    drop(five);
    assert!(map.get("hello").is_none());

    // The key is still physically there but logically absent; giving
    // it a fresh value through the entry API revives it.
    let five = map.entry("hello".to_owned()).or_insert(Rc::new(5));
    assert_eq!(*five, 5);
    assert!(map.get("hello").is_some());
}

#[test]
fn insert_returns_the_old_value() {
    let mut map: WeakValueHashMap<u32, Weak<String>> = WeakValueHashMap::new();

    let a = Rc::new("a".to_owned());
    let b = Rc::new("b".to_owned());

    assert!(map.insert(1, a.clone()).is_none());
    let old = map.insert(1, b.clone()).unwrap();
    assert!(Rc::ptr_eq(&old, &a));
    assert_eq!(map.len(), 1);
    assert!(Rc::ptr_eq(&map.get(&1).unwrap(), &b));
}

#[test]
fn get_returns_the_stored_pointer() {
    let mut map: WeakValueHashMap<u32, Weak<String>> = WeakValueHashMap::new();

    let value = Rc::new("v".to_owned());
    map.insert(7, value.clone());

    assert!(Rc::ptr_eq(&map.get(&7).unwrap(), &value));
    assert!(map.contains_key(&7));
    assert!(!map.contains_key(&8));
}

#[test]
fn entry_occupied_operations() {
    let mut map: WeakValueHashMap<u32, Weak<String>> = WeakValueHashMap::new();

    let first = Rc::new("first".to_owned());
    let second = Rc::new("second".to_owned());
    map.insert(1, first.clone());

    match map.entry(1) {
        Entry::Occupied(mut occupied) => {
            assert_eq!(**occupied.get(), "first");
            let old = occupied.insert(second.clone());
            assert!(Rc::ptr_eq(&old, &first));
        }
        Entry::Vacant(_) => panic!("expected occupied"),
    }

    assert!(Rc::ptr_eq(&map.get(&1).unwrap(), &map.get(&1).unwrap()));
    assert_eq!(*map.get(&1).unwrap(), "second");
}

#[test]
fn entry_remove() {
    let mut map: WeakValueHashMap<u32, Weak<String>> = WeakValueHashMap::new();

    let value = Rc::new("v".to_owned());
    map.insert(1, value.clone());

    match map.entry(1) {
        Entry::Occupied(occupied) => {
            let removed = occupied.remove();
            assert!(Rc::ptr_eq(&removed, &value));
        }
        Entry::Vacant(_) => panic!("expected occupied"),
    }
    assert!(map.is_empty());
}

#[test]
fn remove_expired_and_len() {
    let mut map: WeakValueHashMap<u32, Weak<u32>> = WeakValueHashMap::new();
    let mut values: Vec<Rc<u32>> = (0..8).map(Rc::new).collect();

    for (k, v) in values.iter().enumerate() {
        map.insert(k as u32, v.clone());
    }

    values.truncate(5);
    assert_eq!(map.len(), 8);
    assert_eq!(map.iter().count(), 5);

    map.remove_expired();
    assert_eq!(map.len(), 5);
}

#[test]
fn retain_keeps_approved_mappings() {
    let mut map: WeakValueHashMap<u32, Weak<u32>> = WeakValueHashMap::new();
    let values: Vec<Rc<u32>> = (0..8).map(Rc::new).collect();

    for (k, v) in values.iter().enumerate() {
        map.insert(k as u32, v.clone());
    }

    map.retain(|key, _| key % 2 == 0);
    assert_eq!(map.len(), 4);
    assert!(map.contains_key(&0));
    assert!(!map.contains_key(&1));
}

#[test]
fn equality_ignores_pointer_identity() {
    let values: Vec<Rc<u32>> = (0..3).map(Rc::new).collect();

    let a: WeakValueHashMap<u32, Weak<u32>> =
        values.iter().enumerate().map(|(k, v)| (k as u32, v.clone())).collect();
    let b: WeakValueHashMap<u32, Weak<u32>> =
        values.iter().enumerate().map(|(k, v)| (k as u32, v.clone())).collect();

    assert!(a == b);
    assert!(a.is_submap(&b));
}

#[test]
fn remove_returns_the_value() {
    let mut map: WeakValueHashMap<u32, Weak<String>> = WeakValueHashMap::new();

    let value = Rc::new("v".to_owned());
    map.insert(1, value.clone());

    let removed = map.remove(&1).unwrap();
    assert!(Rc::ptr_eq(&removed, &value));
    assert!(map.remove(&1).is_none());
}
