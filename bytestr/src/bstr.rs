use alloc::ffi::CString;
use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// A length-tracked, non-null-terminated byte string.
///
/// A `ByteStr` is a view of `len` bytes inside a shared, reference-counted
/// backing buffer. Slicing operations (`substring`, `split`, `trim`) return
/// new views of the same buffer without copying; the reference count keeps
/// the buffer alive for as long as any view exists. `Clone` is a cheap alias
/// of the same buffer; [`ByteStr::deep_copy`] detaches into a fresh one.
///
/// The string is immutable after construction, with one exception:
/// [`ByteStr::append`] re-points the string at a fresh, larger buffer.
/// Views taken before an `append` keep showing the old bytes.
#[derive(Clone)]
pub struct ByteStr {
    data: Rc<[u8]>,
    start: usize,
    len: usize,
}

impl ByteStr {
    /// Creates a byte string by copying the source bytes into a fresh buffer.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let s = ByteStr::new(b"I <3 bytes");
    /// assert_eq!(s.len(), 10);
    /// ```
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        ByteStr {
            data: Rc::from(bytes),
            start: 0,
            len: bytes.len(),
        }
    }

    /// Creates an empty byte string.
    #[must_use]
    pub fn empty() -> Self {
        ByteStr::new(&[])
    }

    pub(crate) fn from_buffer(buf: Vec<u8>) -> Self {
        let len = buf.len();
        ByteStr {
            data: Rc::from(buf),
            start: 0,
            len,
        }
    }

    /// New view of the same backing buffer. `start..end` are offsets within
    /// this view and must satisfy `start <= end <= self.len`.
    pub(crate) fn view(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len);
        ByteStr {
            data: Rc::clone(&self.data),
            start: self.start + start,
            len: end - start,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed bytes, exactly `len` of them.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.start..self.start + self.len]
    }

    /// The byte at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Copies the viewed bytes into an owned `Vec<u8>`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Returns a copy backed by its own fresh buffer, detached from any
    /// buffer this view shares with other strings.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        ByteStr::new(self.as_bytes())
    }

    /// Returns a new string with the bytes in reverse order.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// assert_eq!(ByteStr::new("abc").reverse(), "cba");
    /// assert_eq!(ByteStr::empty().reverse(), "");
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut buf = self.to_vec();
        buf.reverse();
        ByteStr::from_buffer(buf)
    }

    /// Extracts the bytes in `start..end` as a zero-copy view.
    ///
    /// Either index may be negative, meaning `len + index`, so `-1`
    /// addresses the last byte. Both indices are exclusive-end offsets after
    /// normalization: `substring(s, 0, len)` is the whole string, and
    /// `substring(s, 1, -1)` drops one byte from each end.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let s = ByteStr::new("abc");
    /// assert_eq!(s.substring(0, 3).unwrap(), "abc");
    /// assert_eq!(s.substring(1, -1).unwrap(), "b");
    /// assert_eq!(s.substring(-2, 3).unwrap(), "bc");
    /// assert_eq!(s.substring(2, 2).unwrap(), "");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if an index falls outside
    /// `[-len, len]`, and [`Error::InvalidRange`] if the normalized start is
    /// past the normalized end. A normalized `start == end` is an empty
    /// string, never an error.
    pub fn substring(&self, start: isize, end: isize) -> Result<Self> {
        let from = self.normalize(start)?;
        let to = self.normalize(end)?;
        if from > to {
            return Err(Error::InvalidRange {
                start: from,
                end: to,
            });
        }
        Ok(self.view(from, to))
    }

    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.len as isize;
        if index < -len || index > len {
            return Err(Error::OutOfBounds {
                index,
                length: self.len,
            });
        }
        let adjusted = if index < 0 { len + index } else { index };
        Ok(adjusted as usize)
    }

    /// Returns a new string holding `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: impl AsRef<[u8]>) -> Self {
        let other = other.as_ref();
        let mut buf = Vec::with_capacity(self.len + other.len());
        buf.extend_from_slice(self.as_bytes());
        buf.extend_from_slice(other);
        ByteStr::from_buffer(buf)
    }

    /// Grows this string in place by re-pointing it at a fresh buffer
    /// holding `self` followed by `suffix`.
    ///
    /// An empty suffix is a no-op. Views taken before the call keep showing
    /// the old buffer; they are never invalidated.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let mut s = ByteStr::new("ab");
    /// let before = s.clone();
    /// s.append("cd");
    /// assert_eq!(s, "abcd");
    /// assert_eq!(before, "ab");
    /// ```
    pub fn append(&mut self, suffix: impl AsRef<[u8]>) {
        let suffix = suffix.as_ref();
        if suffix.is_empty() {
            return;
        }
        *self = self.concat(suffix);
    }

    /// Exports the bytes as a NUL-terminated C string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InteriorNul`] if the string holds a NUL byte.
    pub fn to_c_string(&self) -> Result<CString> {
        CString::new(self.as_bytes()).map_err(|e| Error::InteriorNul {
            position: e.nul_position(),
        })
    }
}
