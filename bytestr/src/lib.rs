#![no_std]

//! `ByteStr`: a length-tracked byte string with cheap substring views.
//!
//! A `ByteStr` carries its length explicitly instead of relying on a
//! terminator byte, so it holds arbitrary binary data, embedded zero bytes
//! included. Substring-producing operations (`substring`, `split`, `trim`)
//! return views that share the original buffer; nothing is copied until an
//! operation actually needs a buffer of its own.
//!
//! # Signed Slicing
//!
//! `substring` accepts signed indices on both ends. A non-negative index
//! counts from the front; a negative index counts from the back, with `-1`
//! naming the last byte. Both ends follow the same rule and the end is
//! always exclusive, so mixing conventions in one call works:
//!
//! ```
//! use bytestr::ByteStr;
//!
//! let s = ByteStr::new("safestring");
//! assert_eq!(s.substring(0, 4).unwrap(), "safe");
//! assert_eq!(s.substring(-6, 10).unwrap(), "string");
//! assert_eq!(s.substring(4, -3).unwrap(), "str");
//! assert_eq!(s.substring(2, 2).unwrap(), "");
//! assert!(s.substring(0, 11).is_err());
//! ```
//!
//! # Views and Ownership
//!
//! The buffer behind a `ByteStr` is reference-counted. `clone` and every
//! substring-producing operation alias it; `deep_copy` detaches; `append`
//! re-points the string at a fresh buffer and leaves other aliases on the
//! old one:
//!
//! ```
//! use bytestr::ByteStr;
//!
//! let record = ByteStr::new("key=value");
//! let fields = record.split("=").unwrap();
//! assert_eq!(fields, ["key", "value"]);
//!
//! let mut value = fields[1].clone();
//! value.append("!");
//! assert_eq!(value, "value!");
//! assert_eq!(record, "key=value");
//! ```
//!
//! # Splitting, Joining, Trimming
//!
//! `split` walks the string left to right and cuts at every non-overlapping
//! occurrence of the delimiter; `join` on the delimiter inverts it. `trim`
//! strips a whole list of patterns from the ends, cycling until none of
//! them matches:
//!
//! ```
//! use bytestr::{ByteStr, StrList};
//!
//! let line = ByteStr::new("  alpha,beta \r\n");
//! let junk: StrList = ["\r\n", " "].into_iter().map(ByteStr::new).collect();
//! let names = line.trim(&junk).split(",").unwrap();
//! assert_eq!(names, ["alpha", "beta"]);
//!
//! let comma = ByteStr::new(",");
//! assert_eq!(comma.join(&names), "alpha,beta");
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and depends only on `alloc` for its buffers.
//! Enable the optional `std` feature in std environments:
//! ```toml
//! [dependencies]
//! bytestr = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod bstr;
mod error;
mod impls;
mod list;
mod scan;

// Re-export public types and traits
pub use bstr::ByteStr;
pub use error::{Error, Result};
pub use list::StrList;
