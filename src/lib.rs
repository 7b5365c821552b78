//! A bidirectional one-to-one map for Rust, backed by two AVL trees.
//!
//! This crate provides [`AvlBiMap`], a map that can be queried by either of two key
//! types. Every left key is unique, every right key is unique, and each left key is
//! paired with exactly one right key.
//!
//! - [`find_left`](AvlBiMap::find_left) / [`find_right`](AvlBiMap::find_right) - O(log n)
//!   lookup from either side
//! - [`insert`](AvlBiMap::insert) - rejects the pair if either key is already taken
//! - [`Position::flip`] - O(1) jump from a pair's place in one ordering to its place in
//!   the other
//!
//! # Example
//!
//! ```
//! use avl_bimap::AvlBiMap;
//!
//! let mut codes = AvlBiMap::new();
//! codes.insert("Oslo", 47);
//! codes.insert("Lima", 51);
//! codes.insert("Rome", 39);
//!
//! assert_eq!(codes.get_left(&"Lima"), Some(&51));
//! assert_eq!(codes.get_right(&39), Some(&"Rome"));
//!
//! // Find a pair by name, then walk on in dialling-code order.
//! let oslo = codes.find_left(&"Oslo").flip();
//! assert_eq!(codes.pair(codes.next(oslo)), Some((&"Lima", &51)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **One slot per pair** - Both trees thread through the same arena slot, so keys are
//!   stored once
//! - **Custom orderings** - Each side takes its own [`Compare`] implementation; any
//!   `Fn(&T, &T) -> Ordering` works
//!
//! # Implementation
//!
//! Pairs live in an arena and are addressed by integer handles. Each pair carries two
//! sets of tree links (parent, children, height), one per ordering, and the two trees
//! are rebalanced independently after every insertion and removal. Because a position
//! is just a handle tagged with its ordering, flipping it to the other ordering is a
//! retag.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod compare;
mod error;
mod raw;
mod side;

pub mod avl_bimap;

pub use avl_bimap::{AvlBiMap, LeftPosition, Position, RightPosition};
pub use compare::{Compare, Natural};
pub use error::Error;
pub use side::{Left, Right, Side};
