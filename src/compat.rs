//! Imports that paper over the `std`/`no_std` split.
//!
//! Every standard-library item the crate touches is funneled through
//! this module so the rest of the code never has to care which build
//! it is in: the bucket array needs `Box`, `Vec`, and `MaybeUninit`
//! (it allocates element storage without constructing elements), the
//! element traits need `rc` and `sync`, and the containers need a
//! default `RandomState`. Under `no_std` the allocation types come
//! from `alloc` and the default hasher from `ahash`.

// The default hasher: `ahash`'s when that feature is on, otherwise the
// standard library's.
#[cfg(feature = "ahash")]
pub use ahash::RandomState;

#[cfg(all(feature = "std", not(feature = "ahash")))]
pub use std::collections::hash_map::RandomState;

// Without `std` there is no default hasher to fall back on.
#[cfg(not(any(feature = "std", feature = "ahash")))]
compile_error!(
    "weak-collections: building without `std` requires the `ahash` feature \
     for a default hasher."
);

#[cfg(feature = "std")]
mod alloc_lib {
    extern crate std;
    pub use std::{boxed, rc, slice, sync, vec};
}

#[cfg(not(feature = "std"))]
mod alloc_lib {
    extern crate alloc;
    pub use alloc::{boxed, rc, slice, sync, vec};
}

// Allocation-backed types, from whichever of `std`/`alloc` is linked.
pub use alloc_lib::{
    boxed::Box,
    rc,
    slice,
    sync,
    vec::{self, Vec},
};

// `core` items used throughout. `mem` and `MaybeUninit` are here for
// the bucket array's uninitialized slots; `Borrow` carries the
// heterogeneous-lookup bounds.
pub use core::{
    borrow::Borrow,
    cmp::max,
    fmt::{self, Debug, Formatter},
    hash::{BuildHasher, Hash, Hasher},
    iter::FromIterator,
    mem::{self, MaybeUninit},
    ops::{self, Deref},
};
