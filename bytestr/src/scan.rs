use alloc::vec::Vec;

use crate::bstr::ByteStr;
use crate::error::{Error, Result};
use crate::list::StrList;

impl ByteStr {
    /// Index of the leftmost occurrence of `pattern`, or `None`.
    ///
    /// The empty pattern occurs at index 0 in every string, including the
    /// empty one. A pattern longer than the string never occurs.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let s = ByteStr::new("I <3 C");
    /// assert_eq!(s.find("<3"), Some(2));
    /// assert_eq!(s.find(""), Some(0));
    /// assert_eq!(s.find("<4"), None);
    /// ```
    #[must_use]
    pub fn find(&self, pattern: impl AsRef<[u8]>) -> Option<usize> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Some(0);
        }
        self.as_bytes()
            .windows(pattern.len())
            .position(|window| window == pattern)
    }

    /// Whether `pattern` occurs as a contiguous byte run inside this string.
    #[must_use]
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.find(pattern).is_some()
    }

    /// Splits on every non-overlapping occurrence of `delim`, left to right.
    ///
    /// The result always has exactly one more entry than there are
    /// occurrences, in order, and each entry is a zero-copy view of this
    /// string's buffer. After a match at position `i` the scan resumes at
    /// `i + delim.len()`, so `"aaa"` split on `"aa"` has one occurrence.
    ///
    /// An empty delimiter splits between every byte: one single-byte entry
    /// per byte, or a single empty entry when the string itself is empty.
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let parts = ByteStr::new("a,,b").split(",").unwrap();
    /// assert_eq!(parts, ["a", "", "b"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DelimiterTooLong`] if the delimiter is longer than
    /// the string.
    pub fn split(&self, delim: impl AsRef<[u8]>) -> Result<StrList> {
        let delim = delim.as_ref();
        let len = self.len();
        if delim.len() > len {
            return Err(Error::DelimiterTooLong {
                delimiter: delim.len(),
                length: len,
            });
        }

        if delim.is_empty() {
            if len == 0 {
                let mut parts = StrList::with_capacity(1);
                parts.push(self.clone());
                return Ok(parts);
            }
            let mut parts = StrList::with_capacity(len);
            for i in 0..len {
                parts.push(self.view(i, i + 1));
            }
            return Ok(parts);
        }

        let bytes = self.as_bytes();
        let mut parts = StrList::new();
        let mut segment = 0;
        let mut i = 0;
        while i + delim.len() <= len {
            if &bytes[i..i + delim.len()] == delim {
                parts.push(self.view(segment, i));
                i += delim.len();
                segment = i;
            } else {
                i += 1;
            }
        }
        parts.push(self.view(segment, len));
        Ok(parts)
    }

    /// Concatenates `parts` with this string as the separator.
    ///
    /// Zero parts yield the empty string; a single part is returned
    /// unchanged (as a cheap alias). `join` is the inverse of [`split`] for
    /// any non-empty delimiter:
    ///
    /// ```
    /// # use bytestr::ByteStr;
    /// let s = ByteStr::new("a,b,c");
    /// let comma = ByteStr::new(",");
    /// assert_eq!(comma.join(&s.split(",").unwrap()), s);
    /// ```
    ///
    /// [`split`]: ByteStr::split
    #[must_use]
    pub fn join(&self, parts: &[ByteStr]) -> ByteStr {
        match parts {
            [] => ByteStr::empty(),
            [only] => only.clone(),
            _ => {
                let total = parts.iter().map(ByteStr::len).sum::<usize>()
                    + self.len() * (parts.len() - 1);
                let mut buf = Vec::with_capacity(total);
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        buf.extend_from_slice(self.as_bytes());
                    }
                    buf.extend_from_slice(part.as_bytes());
                }
                ByteStr::from_buffer(buf)
            }
        }
    }

    /// Strips every listed pattern from both ends, repeatedly.
    ///
    /// Each cycle tries every pattern against both ends of the remaining
    /// window; stripping stops once a full cycle removes nothing, so a
    /// removal that exposes another pattern at the boundary composes with
    /// it. When the ends meet, the result is the empty string. Empty
    /// patterns are inert.
    ///
    /// ```
    /// # use bytestr::{ByteStr, StrList};
    /// let junk: StrList = [",", " "].into_iter().map(ByteStr::new).collect();
    /// assert_eq!(ByteStr::new(" , a,b , ,").trim(&junk), "a,b");
    /// ```
    #[must_use]
    pub fn trim(&self, patterns: &[ByteStr]) -> ByteStr {
        self.trim_ends(patterns, true, true)
    }

    /// Strips every listed pattern from the left end, repeatedly.
    #[must_use]
    pub fn ltrim(&self, patterns: &[ByteStr]) -> ByteStr {
        self.trim_ends(patterns, true, false)
    }

    /// Strips every listed pattern from the right end, repeatedly.
    #[must_use]
    pub fn rtrim(&self, patterns: &[ByteStr]) -> ByteStr {
        self.trim_ends(patterns, false, true)
    }

    fn trim_ends(&self, patterns: &[ByteStr], left: bool, right: bool) -> ByteStr {
        let bytes = self.as_bytes();
        let mut start = 0;
        let mut end = bytes.len();
        loop {
            let mut stripped = false;
            for pattern in patterns {
                let pattern = pattern.as_bytes();
                // An empty pattern matches everywhere and strips nothing;
                // honoring it would never terminate.
                if pattern.is_empty() {
                    continue;
                }
                if left && bytes[start..end].starts_with(pattern) {
                    start += pattern.len();
                    stripped = true;
                }
                if right && bytes[start..end].ends_with(pattern) {
                    end -= pattern.len();
                    stripped = true;
                }
            }
            if !stripped {
                break;
            }
        }
        self.view(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_scan_is_non_overlapping() {
        let parts = ByteStr::new("aaa").split("aa").unwrap();
        assert_eq!(parts, ["", "a"]);
    }

    #[test]
    fn trim_cycles_until_a_pass_strips_nothing() {
        let patterns = [ByteStr::new("ab"), ByteStr::new("a")];
        // "ab" goes first, exposing a fresh "a" for the next cycle.
        assert_eq!(ByteStr::new("aab").rtrim(&patterns), "");
    }
}
