#![no_std]

//! `DynArray`: a growable array of fixed-size items in one contiguous buffer.
//!
//! Items are raw byte slots of a size chosen at construction; the caller
//! encodes and decodes its element type. Every accessor hands out a slice
//! of exactly `item_size` bytes, and items stay packed in index order with
//! no per-item bookkeeping.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut numbers = DynArray::new(4).unwrap();
//! for n in [3i32, 1, 4] {
//!     numbers.push(&n.to_le_bytes()).unwrap();
//! }
//!
//! assert_eq!(numbers.len(), 3);
//! assert_eq!(numbers.get(1), Some(&1i32.to_le_bytes()[..]));
//! assert_eq!(numbers.get(3), None);
//! ```
//!
//! # Growth
//!
//! The array starts with room for 8 items (or whatever `with_capacity` was
//! given) and doubles whenever a push or insert finds it full, so appending
//! is O(1) amortized. Growth is fallible: allocation failure comes back as
//! an error and leaves the array unchanged.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut a = DynArray::with_capacity(1, 2).unwrap();
//! a.push(b"x").unwrap();
//! a.push(b"y").unwrap();
//! assert_eq!(a.capacity(), 2);
//!
//! a.push(b"z").unwrap();
//! assert_eq!(a.capacity(), 4);
//! ```
//!
//! # Map and Folds
//!
//! `map` rewrites every item in place; `fold_left` and `fold_right` reduce
//! the items without recursing, so long arrays cannot exhaust the stack:
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut a = DynArray::new(4).unwrap();
//! for n in 1i32..=5 {
//!     a.push(&n.to_le_bytes()).unwrap();
//! }
//!
//! // Double each item in place.
//! a.map(|item| {
//!     let n = i32::from_le_bytes((&*item).try_into().unwrap()) * 2;
//!     item.copy_from_slice(&n.to_le_bytes());
//! });
//!
//! let sum = a.fold_left(0i32, |acc, item| {
//!     acc + i32::from_le_bytes(item.try_into().unwrap())
//! });
//! assert_eq!(sum, 30);
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and depends only on `alloc` for its buffer.
//! Enable the optional `std` feature in std environments:
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::DynArray;
pub use crate::error::{Error, Result};
pub use crate::iter::{Iter, IterMut};
