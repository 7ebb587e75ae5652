//! Word-boundary scanning over a raw character sequence.
//!
//! The ASCII space character is the only delimiter. No Unicode whitespace
//! classes, no punctuation awareness: runs of non-space characters are
//! words, runs of spaces separate them. Ctrl+arrow navigation is defined
//! in terms of these two scans.

/// Index of the start of the next word at or after `pos`.
///
/// Scans forward from `pos`; once at least one space has been passed, the
/// first non-space index is the target. Reaching the end first (or
/// starting at or past the end, which covers the empty buffer) yields
/// `chars.len()`.
///
/// # Examples
///
/// ```
/// use edit_core::next_word_boundary;
///
/// let chars: Vec<char> = "abc def".chars().collect();
/// assert_eq!(next_word_boundary(&chars, 0), 4);
/// assert_eq!(next_word_boundary(&chars, 4), 7);
/// assert_eq!(next_word_boundary(&chars, 7), 7);
/// ```
pub fn next_word_boundary(chars: &[char], pos: usize) -> usize {
    let len = chars.len();
    if pos >= len {
        return len;
    }

    let mut pos = pos;
    let mut space_seen = false;
    loop {
        if chars[pos] == ' ' {
            space_seen = true;
        } else if space_seen {
            return pos;
        }
        pos += 1;
        if pos >= len {
            return len;
        }
    }
}

/// Index of the start of the word containing (or preceding) `pos`.
///
/// Scans backward one position at a time, tracking whether a non-space has
/// been seen; a space encountered after a non-space yields the index right
/// after that space. The scan stops with 0 once it would step to position
/// 0 or below, so the character at index 0 itself is never examined; with
/// a leading space the target is still 0, not 1.
///
/// Positions past the end are treated as the end.
///
/// # Examples
///
/// ```
/// use edit_core::prev_word_boundary;
///
/// let chars: Vec<char> = "abc def".chars().collect();
/// assert_eq!(prev_word_boundary(&chars, 7), 4);
/// assert_eq!(prev_word_boundary(&chars, 4), 0);
/// ```
pub fn prev_word_boundary(chars: &[char], pos: usize) -> usize {
    let mut pos = pos.min(chars.len());
    let mut char_seen = false;
    loop {
        if pos <= 1 {
            return 0;
        }
        pos -= 1;
        if chars[pos] == ' ' {
            if char_seen {
                return pos + 1;
            }
        } else {
            char_seen = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn forward_jumps_past_space_runs() {
        let chars = chars_of("ab   cd");
        assert_eq!(next_word_boundary(&chars, 0), 5);
        assert_eq!(next_word_boundary(&chars, 2), 5);
    }

    #[test]
    fn forward_without_space_reaches_end() {
        let chars = chars_of("abcdef");
        assert_eq!(next_word_boundary(&chars, 2), 6);
    }

    #[test]
    fn forward_at_or_past_end_is_noop() {
        let chars = chars_of("abc");
        assert_eq!(next_word_boundary(&chars, 3), 3);
        assert_eq!(next_word_boundary(&chars, 9), 3);
        assert_eq!(next_word_boundary(&[], 0), 0);
    }

    #[test]
    fn backward_stops_right_after_space() {
        let chars = chars_of("abc def");
        assert_eq!(prev_word_boundary(&chars, 7), 4);
        assert_eq!(prev_word_boundary(&chars, 6), 4);
        assert_eq!(prev_word_boundary(&chars, 5), 4);
    }

    #[test]
    fn backward_from_word_start_crosses_the_gap() {
        let chars = chars_of("abc def");
        assert_eq!(prev_word_boundary(&chars, 4), 0);
    }

    #[test]
    fn backward_never_examines_index_zero() {
        // With a leading space the scan still lands on 0: it terminates
        // before looking at chars[0], so no boundary at index 1 is found.
        let chars = chars_of(" abc");
        assert_eq!(prev_word_boundary(&chars, 4), 0);
        assert_eq!(prev_word_boundary(&chars, 2), 0);
    }

    #[test]
    fn backward_with_interior_space_run() {
        let chars = chars_of("ab   cd");
        assert_eq!(prev_word_boundary(&chars, 7), 5);
        assert_eq!(prev_word_boundary(&chars, 5), 0);
    }

    #[test]
    fn backward_on_empty_or_tiny_input_is_zero() {
        assert_eq!(prev_word_boundary(&[], 0), 0);
        let chars = chars_of("a");
        assert_eq!(prev_word_boundary(&chars, 1), 0);
        assert_eq!(prev_word_boundary(&chars, 0), 0);
    }

    #[test]
    fn out_of_range_position_is_clamped() {
        let chars = chars_of("abc def");
        assert_eq!(prev_word_boundary(&chars, 99), 4);
    }
}
