//! # switchyard-std
//!
//! Standard implementations for the Switchyard dispatch table.
//!
//! This crate provides:
//! - **Lookup backends**: [`OrderedMap`], [`HashedMap`], [`SortedMap`]
//! - **Key orderings**: [`KeyOrder`], [`Natural`]
//! - **Testing utilities**: [`testing::CallLog`]
//!
//! [`OrderedMap`]: maps::OrderedMap
//! [`HashedMap`]: maps::HashedMap
//! [`SortedMap`]: maps::SortedMap
//! [`KeyOrder`]: maps::KeyOrder
//! [`Natural`]: maps::Natural

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

// Modules
pub mod maps;
pub mod testing;
