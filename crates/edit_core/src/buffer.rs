//! Fixed-capacity character buffer.
//!
//! All indices and the capacity count characters, not bytes. The buffer
//! never grows past its capacity; insertions that would exceed it are
//! rejected without touching existing content.

/// A mutable character sequence with a hard length limit.
///
/// Indices passed to the mutating operations must lie inside `[0, len]`;
/// anything outside is a caller bug and panics. Running out of room is
/// not a bug: [`TextBuffer::insert`] reports it through its return value
/// and leaves the buffer untouched.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    chars: Vec<char>,
    max_len: usize,
}

impl TextBuffer {
    /// Create a buffer holding at most `max_len` characters.
    ///
    /// `initial` is truncated to the capacity if it is longer.
    pub fn new(initial: &str, max_len: usize) -> Self {
        Self {
            chars: initial.chars().take(max_len).collect(),
            max_len,
        }
    }

    /// Insert one character at `at`, shifting the tail right.
    ///
    /// Returns `false` (and changes nothing) when the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn insert(&mut self, at: usize, ch: char) -> bool {
        assert!(
            at <= self.chars.len(),
            "insert index {at} out of range for buffer of length {}",
            self.chars.len()
        );
        if self.chars.len() == self.max_len {
            return false;
        }
        self.chars.insert(at, ch);
        true
    }

    /// Delete the characters in `[start, end)`.
    ///
    /// A no-op when `start == end`.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len`.
    pub fn remove(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.chars.len(),
            "remove range {start}..{end} out of range for buffer of length {}",
            self.chars.len()
        );
        self.chars.drain(start..end);
    }

    /// Replace `[start, end)` with `replacement`.
    ///
    /// This is remove-then-insert and is NOT checked against the capacity;
    /// callers doing bulk insertion own the capacity check (the paste loop
    /// inserts one character at a time for exactly that reason).
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len`.
    pub fn replace(&mut self, start: usize, end: usize, replacement: &str) {
        self.remove(start, end);
        for (i, ch) in replacement.chars().enumerate() {
            self.chars.insert(start + i, ch);
        }
    }

    /// Full content as an owned string snapshot.
    pub fn read(&self) -> String {
        self.chars.iter().collect()
    }

    /// The raw character sequence.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Current length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if no further character fits.
    pub fn is_full(&self) -> bool {
        self.chars.len() == self.max_len
    }

    /// The fixed capacity in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shifts_tail_right() {
        let mut buf = TextBuffer::new("ac", 8);
        assert!(buf.insert(1, 'b'));
        assert_eq!(buf.read(), "abc");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn insert_at_capacity_is_rejected() {
        let mut buf = TextBuffer::new("ab", 2);
        assert!(!buf.insert(2, 'c'));
        assert_eq!(buf.read(), "ab");
        assert!(buf.is_full());
    }

    #[test]
    fn initial_text_is_truncated_to_capacity() {
        let buf = TextBuffer::new("abcdef", 4);
        assert_eq!(buf.read(), "abcd");
        assert!(buf.is_full());
    }

    #[test]
    fn remove_deletes_half_open_range() {
        let mut buf = TextBuffer::new("abcde", 8);
        buf.remove(1, 4);
        assert_eq!(buf.read(), "ae");
    }

    #[test]
    fn remove_empty_range_is_noop() {
        let mut buf = TextBuffer::new("abc", 8);
        buf.remove(2, 2);
        assert_eq!(buf.read(), "abc");
    }

    #[test]
    fn replace_swaps_range_for_string() {
        let mut buf = TextBuffer::new("abcde", 8);
        buf.replace(1, 4, "XY");
        assert_eq!(buf.read(), "aXYe");
    }

    #[test]
    fn replace_is_not_capacity_checked() {
        // Callers own the capacity check for bulk insertion; replace is the
        // low-level remove-then-insert.
        let mut buf = TextBuffer::new("ab", 3);
        buf.replace(2, 2, "cdef");
        assert_eq!(buf.read(), "abcdef");
        assert_eq!(buf.len(), 6);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn insert_past_len_panics() {
        let mut buf = TextBuffer::new("ab", 8);
        buf.insert(3, 'x');
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_inverted_range_panics() {
        let mut buf = TextBuffer::new("abc", 8);
        buf.remove(2, 1);
    }
}
