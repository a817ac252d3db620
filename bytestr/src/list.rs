use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;
use core::slice;

use crate::bstr::ByteStr;

/// An ordered, growable list of [`ByteStr`] values.
///
/// [`split`] produces one and [`join`] consumes one; in between it behaves
/// like a slice of strings. Because each entry is a cheap view, a `StrList`
/// holding every field of a record costs one small struct per field, not one
/// buffer per field.
///
/// ```
/// # use bytestr::{ByteStr, StrList};
/// let mut fields = StrList::new();
/// fields.push(ByteStr::new("id"));
/// fields.push(ByteStr::new("name"));
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[1], "name");
/// ```
///
/// [`split`]: ByteStr::split
/// [`join`]: ByteStr::join
#[derive(Clone, Default)]
pub struct StrList {
    items: Vec<ByteStr>,
}

impl StrList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        StrList { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StrList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends a string to the end of the list.
    pub fn push(&mut self, item: ByteStr) {
        self.items.push(item);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The entry at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ByteStr> {
        self.items.get(index)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> slice::Iter<'_, ByteStr> {
        self.items.iter()
    }
}

impl Deref for StrList {
    type Target = [ByteStr];

    fn deref(&self) -> &[ByteStr] {
        &self.items
    }
}

impl fmt::Debug for StrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl fmt::Display for StrList {
    /// Renders as `[first, second, ...]` with each entry shown lossily.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl PartialEq for StrList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for StrList {}

impl<T: AsRef<[u8]>> PartialEq<[T]> for StrList {
    fn eq(&self, other: &[T]) -> bool {
        self.items.len() == other.len()
            && self
                .items
                .iter()
                .zip(other)
                .all(|(item, expected)| item.as_bytes() == expected.as_ref())
    }
}

impl<T: AsRef<[u8]>> PartialEq<&[T]> for StrList {
    fn eq(&self, other: &&[T]) -> bool {
        self == *other
    }
}

impl<T: AsRef<[u8]>, const N: usize> PartialEq<[T; N]> for StrList {
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}

impl IntoIterator for StrList {
    type Item = ByteStr;
    type IntoIter = alloc::vec::IntoIter<ByteStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a StrList {
    type Item = &'a ByteStr;
    type IntoIter = slice::Iter<'a, ByteStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ByteStr> for StrList {
    fn from_iter<I: IntoIterator<Item = ByteStr>>(iter: I) -> Self {
        StrList {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<ByteStr> for StrList {
    fn extend<I: IntoIterator<Item = ByteStr>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl From<Vec<ByteStr>> for StrList {
    fn from(items: Vec<ByteStr>) -> Self {
        StrList { items }
    }
}

impl From<StrList> for Vec<ByteStr> {
    fn from(list: StrList) -> Self {
        list.items
    }
}
