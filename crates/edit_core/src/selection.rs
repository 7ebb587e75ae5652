//! Text selection representation.

/// Represents a selection as a character range.
///
/// The range is always normalized such that `start <= end`. Both ends are
/// character indices into the buffer; the anchor end and the cursor end are
/// interchangeable here, ordering is resolved at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start character index of the selection (inclusive).
    pub start: usize,
    /// End character index of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected text from the given character sequence.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie inside `chars`.
    #[inline]
    pub fn slice(&self, chars: &[char]) -> String {
        chars[self.start..self.end].iter().collect()
    }
}
