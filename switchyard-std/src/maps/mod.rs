//! # Lookup Backends
//!
//! This module provides the case maps a dispatch table can be built on:
//!
//! - **Ordered**: `BTreeMap` with the key's natural `Ord`.
//! - **Hashed**: `HashMap` for `Hash + Eq` keys.
//! - **Sorted**: a sorted vector searched with a caller-supplied ordering.
//!
//! # Choosing a Backend
//!
//! | Backend | Key bound | Lookup |
//! |---------|-----------|--------|
//! | `OrderedMap` | `Ord` | O(log N), the table default |
//! | `HashedMap` | `Hash + Eq` | O(1) average |
//! | `SortedMap` | any, via `KeyOrder` | O(log N) binary search |

pub mod hashed;
pub mod ordered;
pub mod sorted;

pub use hashed::{HashedMap, HashedMapBuilder};
pub use ordered::{OrderedMap, OrderedMapBuilder};
pub use sorted::{KeyOrder, Natural, SortedMap, SortedMapBuilder};
