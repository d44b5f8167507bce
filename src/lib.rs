//! This crate defines hash sets and maps that hold weak references to
//! their elements, all backed by one open-addressed Robin Hood table.
//! When the last strong reference to an element is dropped elsewhere in
//! the program, the element is treated as absent immediately and its
//! bucket is reclaimed lazily, on a later insertion, sweep, or resize.
//!
//! This crate supports four kinds of containers:
//!
//!   - [`WeakHashSet`]: a set of weak pointers, compared by value.
//!   - [`WeakKeyHashMap`]: a map with weak keys and owned values.
//!   - [`WeakValueHashMap`]: a map with owned keys and weak values.
//!   - [`WeakWeakHashMap`]: a map with weak keys and weak values.
//!
//! [`PtrWeakHashSet`] and [`PtrWeakKeyHashMap`] compare their keys by
//! pointer identity instead of value.
//!
//! The containers are single-owner: any sharing or synchronization is
//! the client's responsibility, though both `std::rc` and `std::sync`
//! pointers can be stored. Because elements can expire without the
//! table noticing, `len` is an upper bound on the number of live
//! elements; `remove_expired` makes it exact again.
//!
//! # Examples
//!
//! ```
//! use weak_collections::WeakHashSet;
//! use std::rc::{Rc, Weak};
//!
//! let mut set: WeakHashSet<Weak<str>> = WeakHashSet::new();
//!
//! let hello = Rc::<str>::from("hello");
//! set.insert(Rc::clone(&hello));
//!
//! assert!(  set.contains("hello") );
//! assert!( !set.contains("world") );
//!
//! drop(hello);
//! assert!( !set.contains("hello") );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod bucket;
mod compat;

pub mod pairs;
pub mod ptr_weak_hash_set;
pub mod ptr_weak_key_hash_map;
pub mod traits;
pub mod weak_hash_set;
pub mod weak_key_hash_map;
pub mod weak_table;
pub mod weak_value_hash_map;
pub mod weak_weak_hash_map;

pub use crate::pairs::{WeakKeyPair, WeakValuePair, WeakWeakPair};
pub use crate::ptr_weak_hash_set::PtrWeakHashSet;
pub use crate::ptr_weak_key_hash_map::PtrWeakKeyHashMap;
pub use crate::traits::{ByPtr, TableElement, WeakElement, WeakKey};
pub use crate::weak_hash_set::WeakHashSet;
pub use crate::weak_key_hash_map::WeakKeyHashMap;
pub use crate::weak_table::WeakTable;
pub use crate::weak_value_hash_map::WeakValueHashMap;
pub use crate::weak_weak_hash_map::WeakWeakHashMap;
