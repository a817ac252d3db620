use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};
use crate::iter::{Iter, IterMut};

const DEFAULT_CAPACITY: usize = 8;

// An overflowing byte count is unsatisfiable; usize::MAX makes
// try_reserve_exact report it as an allocation failure.
fn byte_capacity(item_size: usize, items: usize) -> usize {
    item_size.checked_mul(items).unwrap_or(usize::MAX)
}

/// A growable array of fixed-size items packed into one contiguous buffer
pub struct DynArray {
    pub(crate) buf: Vec<u8>,
    pub(crate) item_size: usize,
    capacity: usize,
}

impl DynArray {
    /// Creates an array for items of `item_size` bytes with the default
    /// initial capacity of 8 items.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroItemSize` if `item_size` is 0, and
    /// `Error::OutOfMemory` if the initial reservation fails.
    pub fn new(item_size: usize) -> Result<Self> {
        Self::with_capacity(item_size, DEFAULT_CAPACITY)
    }

    /// Creates an array for items of `item_size` bytes with room for
    /// `capacity` items before the first growth.
    ///
    /// A capacity of 0 is legal; the first push grows it to 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroItemSize` if `item_size` is 0, and
    /// `Error::OutOfMemory` if the reservation fails.
    pub fn with_capacity(item_size: usize, capacity: usize) -> Result<Self> {
        if item_size == 0 {
            return Err(Error::ZeroItemSize);
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(byte_capacity(item_size, capacity))?;

        Ok(Self {
            buf,
            item_size,
            capacity,
        })
    }

    /// Number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len() / self.item_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of items the array holds before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fixed byte size of every item.
    #[must_use]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    fn check_item(&self, item: &[u8]) -> Result<()> {
        if item.len() != self.item_size {
            return Err(Error::ItemSizeMismatch {
                expected: self.item_size,
                actual: item.len(),
            });
        }
        Ok(())
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        Ok(())
    }

    fn ensure_capacity(&mut self) -> Result<()> {
        if self.len() < self.capacity {
            return Ok(());
        }

        let doubled = if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(2)
        };
        let additional = byte_capacity(self.item_size, doubled) - self.buf.len();
        self.buf.try_reserve_exact(additional)?;
        self.capacity = doubled;

        Ok(())
    }

    /// Appends an item, doubling the capacity when the array is full.
    ///
    /// Amortized O(1). On error the array is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::ItemSizeMismatch` if `item` is not exactly
    /// `item_size` bytes, and `Error::OutOfMemory` if growth fails.
    pub fn push(&mut self, item: &[u8]) -> Result<()> {
        self.check_item(item)?;
        self.ensure_capacity()?;
        self.buf.extend_from_slice(item);
        Ok(())
    }

    /// Inserts an item at `index`, shifting later items one slot right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len()`,
    /// `Error::ItemSizeMismatch` if `item` is not `item_size` bytes, and
    /// `Error::OutOfMemory` if growth fails.
    pub fn insert(&mut self, index: usize, item: &[u8]) -> Result<()> {
        self.check_item(item)?;
        if index > self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        self.ensure_capacity()?;

        let at = index * self.item_size;
        self.buf.extend_from_slice(item);
        self.buf[at..].rotate_right(self.item_size);
        Ok(())
    }

    /// Removes the item at `index`, shifting later items one slot left.
    ///
    /// The capacity never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;
        let at = index * self.item_size;
        self.buf.drain(at..at + self.item_size);
        Ok(())
    }

    /// Removes the first item for which `equals(item, element)` holds, or
    /// every such item when `all` is set. Returns the number removed.
    ///
    /// Adjacent matches all go in one call: after a removal the scan stays
    /// on the slot the following element shifted into.
    ///
    /// # Errors
    ///
    /// Returns `Error::ItemSizeMismatch` if `item` is not `item_size` bytes.
    pub fn remove(
        &mut self,
        item: &[u8],
        mut equals: impl FnMut(&[u8], &[u8]) -> bool,
        all: bool,
    ) -> Result<usize> {
        self.check_item(item)?;

        let mut removed = 0;
        let mut index = 0;
        while index < self.len() {
            let at = index * self.item_size;
            if equals(item, &self.buf[at..at + self.item_size]) {
                self.buf.drain(at..at + self.item_size);
                removed += 1;
                if !all {
                    break;
                }
            } else {
                index += 1;
            }
        }
        Ok(removed)
    }

    /// Overwrites the item at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len()` and
    /// `Error::ItemSizeMismatch` if `item` is not `item_size` bytes.
    pub fn replace_at(&mut self, index: usize, item: &[u8]) -> Result<()> {
        self.check_item(item)?;
        self.check_bounds(index)?;
        let at = index * self.item_size;
        self.buf[at..at + self.item_size].copy_from_slice(item);
        Ok(())
    }

    /// Overwrites the first item for which `equals(old, element)` holds
    /// with `new`, or every such item when `all` is set. Returns the number
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns `Error::ItemSizeMismatch` if `old` or `new` is not
    /// `item_size` bytes.
    pub fn replace(
        &mut self,
        old: &[u8],
        new: &[u8],
        mut equals: impl FnMut(&[u8], &[u8]) -> bool,
        all: bool,
    ) -> Result<usize> {
        self.check_item(old)?;
        self.check_item(new)?;

        let mut replaced = 0;
        for slot in self.buf.chunks_exact_mut(self.item_size) {
            if equals(old, slot) {
                slot.copy_from_slice(new);
                replaced += 1;
                if !all {
                    break;
                }
            }
        }
        Ok(replaced)
    }

    /// Item at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len() {
            return None;
        }
        let at = index * self.item_size;
        Some(&self.buf[at..at + self.item_size])
    }

    /// Mutable view of the item at `index`, or `None` past the end.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len() {
            return None;
        }
        let at = index * self.item_size;
        Some(&mut self.buf[at..at + self.item_size])
    }

    /// Removes every item. The capacity never shrinks.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Applies `f` to every item in place, in index order.
    pub fn map(&mut self, mut f: impl FnMut(&mut [u8])) {
        for item in self.buf.chunks_exact_mut(self.item_size) {
            f(item);
        }
    }

    /// Left-associative reduction: `f(f(f(init, a0), a1), a2)`.
    ///
    /// Runs in constant stack space regardless of length. An empty array
    /// returns `init`.
    pub fn fold_left<A>(&self, init: A, f: impl FnMut(A, &[u8]) -> A) -> A {
        self.buf.chunks_exact(self.item_size).fold(init, f)
    }

    /// Right-associative reduction: `f(a0, f(a1, f(a2, init)))`.
    ///
    /// Walks the items back to front, also in constant stack space. An
    /// empty array returns `init`.
    pub fn fold_right<A>(&self, init: A, mut f: impl FnMut(&[u8], A) -> A) -> A {
        self.buf
            .chunks_exact(self.item_size)
            .rfold(init, |acc, item| f(item, acc))
    }

    /// Returns an iterator over the items in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns an iterator of mutable item views in index order.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.into_iter()
    }
}

impl fmt::Debug for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("item_size", &self.item_size)
            .finish()
    }
}
