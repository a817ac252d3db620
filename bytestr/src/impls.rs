//! Trait implementations wiring [`ByteStr`] into the standard operators.
//!
//! Everything here is derived from the byte content alone: two strings that
//! render the same bytes are equal, hash the same, and sort the same, no
//! matter which buffers back them.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign};

use crate::bstr::ByteStr;

impl PartialEq for ByteStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteStr {}

impl PartialEq<[u8]> for ByteStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<ByteStr> for [u8] {
    fn eq(&self, other: &ByteStr) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for ByteStr {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteStr {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteStr {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteStr> for str {
    fn eq(&self, other: &ByteStr) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ByteStr> for &str {
    fn eq(&self, other: &ByteStr) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<Vec<u8>> for ByteStr {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl Ord for ByteStr {
    /// Lexicographic byte order, so a proper prefix sorts before its
    /// extension.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for ByteStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ByteStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Default for ByteStr {
    fn default() -> Self {
        ByteStr::empty()
    }
}

impl fmt::Display for ByteStr {
    /// Renders the bytes as UTF-8, substituting the replacement character
    /// for invalid sequences.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStr")
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .field("len", &self.len())
            .finish()
    }
}

impl AsRef<[u8]> for ByteStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for ByteStr {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for ByteStr {
    fn from(bytes: &[u8]) -> Self {
        ByteStr::new(bytes)
    }
}

impl From<&str> for ByteStr {
    fn from(s: &str) -> Self {
        ByteStr::new(s)
    }
}

impl From<Vec<u8>> for ByteStr {
    /// Takes over the buffer without copying it.
    fn from(buf: Vec<u8>) -> Self {
        ByteStr::from_buffer(buf)
    }
}

impl From<String> for ByteStr {
    fn from(s: String) -> Self {
        ByteStr::from_buffer(s.into_bytes())
    }
}

impl From<ByteStr> for Vec<u8> {
    fn from(s: ByteStr) -> Self {
        s.to_vec()
    }
}

impl Add<&ByteStr> for &ByteStr {
    type Output = ByteStr;

    /// Concatenation into a fresh string; neither operand changes.
    fn add(self, rhs: &ByteStr) -> ByteStr {
        self.concat(rhs)
    }
}

impl AddAssign<&ByteStr> for ByteStr {
    /// In-place append, same as [`ByteStr::append`].
    fn add_assign(&mut self, rhs: &ByteStr) {
        self.append(rhs);
    }
}
