//! Keyboard-event interpretation for a single-line bounded text box.
//!
//! The editor owns the buffer plus cursor, selection anchor and a
//! widget-local clipboard cache, and turns decoded input events into
//! mutations. Integration layers deliver events and render the state;
//! nothing here knows about fonts, pixels or windows.

use crate::buffer::TextBuffer;
use crate::event::{InputEvent, Key, KeyStroke, Modifiers};
use crate::selection::SelectionRange;
use crate::word::{next_word_boundary, prev_word_boundary};

/// Notification raised back to the widget owner by [`Editor::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Enter was pressed while active. Carries the originating key stroke;
    /// the owner decides what submitting means.
    Submit(KeyStroke),
}

/// Single-line text editor state machine.
///
/// Owns a [`TextBuffer`] and interprets the decoded event stream into
/// buffer mutations and cursor/selection updates. Events are dropped
/// entirely while the editor is inactive; there is no queue.
///
/// The cursor is a character index in `[0, len]`, sitting between
/// characters. The selection anchor is the fixed end of a selection; a
/// present anchor equal to the cursor is a collapsed selection, invisible
/// but still routed through the selection path by the deleting operations.
///
/// # Example
///
/// ```
/// use edit_core::{Editor, InputEvent, Key};
///
/// let mut editor = Editor::new("", 16);
/// editor.set_active(true);
/// for ch in "hi".chars() {
///     editor.apply(InputEvent::typed(ch));
/// }
/// editor.apply(InputEvent::key(Key::Left));
///
/// assert_eq!(editor.text(), "hi");
/// assert_eq!(editor.cursor(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: usize,
    anchor: Option<usize>,
    active: bool,
    clipboard: Option<String>,
}

impl Editor {
    /// Create an inactive editor over a fresh buffer.
    ///
    /// The cursor starts at 0; `initial` is truncated to `max_len`.
    pub fn new(initial: &str, max_len: usize) -> Self {
        Self {
            buffer: TextBuffer::new(initial, max_len),
            cursor: 0,
            anchor: None,
            active: false,
            clipboard: None,
        }
    }

    /// Whether the editor currently accepts input.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Gate input acceptance. Inactive editors drop events, they do not
    /// queue them.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The underlying buffer (read-only; all mutation goes through events).
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Current content as an owned string.
    pub fn text(&self) -> String {
        self.buffer.read()
    }

    /// Cursor position as a character index in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selection anchor, if one is set (possibly equal to the cursor).
    pub fn selection_anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// The selected range, if an anchor is set.
    ///
    /// The range may be empty (collapsed selection); renderers that only
    /// care about visible selections should filter on
    /// [`SelectionRange::is_empty`].
    pub fn selection(&self) -> Option<SelectionRange> {
        self.anchor
            .map(|anchor| SelectionRange::new(anchor, self.cursor))
    }

    /// The clipboard cache content, if anything was copied or cut.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Empty the buffer and reset cursor and anchor.
    ///
    /// The clipboard cache survives, so cleared text can still be pasted
    /// back.
    pub fn clear(&mut self) {
        self.buffer.remove(0, self.buffer.len());
        self.cursor = 0;
        self.anchor = None;
    }

    /// Feed one decoded event through the state machine.
    ///
    /// Returns a [`Signal`] when the event should be surfaced to the
    /// owner. Does nothing while inactive.
    pub fn apply(&mut self, event: InputEvent) -> Option<Signal> {
        if !self.active {
            return None;
        }
        match event {
            InputEvent::Char { ch, mods } => {
                self.on_char(ch, mods);
                None
            }
            InputEvent::Key(stroke) => self.on_key(stroke),
        }
    }

    /// Typed character: replace the selection, then insert if room remains.
    ///
    /// The selection is consumed even when the buffer turns out to be full,
    /// matching the delete-selection-first rule of every other editing key.
    fn on_char(&mut self, ch: char, mods: Modifiers) {
        if mods.ctrl || ch == '\r' || ch == '\n' {
            return;
        }
        self.delete_selection();
        if self.buffer.insert(self.cursor, ch) {
            self.cursor += 1;
        }
    }

    fn on_key(&mut self, stroke: KeyStroke) -> Option<Signal> {
        let KeyStroke { key, mods } = stroke;
        match key {
            Key::Enter => return Some(Signal::Submit(stroke)),
            Key::Left => {
                let before = self.cursor;
                self.cursor = if mods.ctrl {
                    prev_word_boundary(self.buffer.chars(), self.cursor)
                } else {
                    self.cursor.saturating_sub(1)
                };
                self.shift_anchor(before, mods);
            }
            Key::Right => {
                let before = self.cursor;
                self.cursor = if mods.ctrl {
                    next_word_boundary(self.buffer.chars(), self.cursor)
                } else {
                    (self.cursor + 1).min(self.buffer.len())
                };
                self.shift_anchor(before, mods);
            }
            Key::Home => {
                let before = self.cursor;
                self.cursor = 0;
                self.shift_anchor(before, mods);
            }
            Key::End => {
                let before = self.cursor;
                self.cursor = self.buffer.len();
                self.shift_anchor(before, mods);
            }
            Key::Delete => {
                if self.delete_selection().is_none() && self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor, self.cursor + 1);
                }
            }
            Key::Backspace => {
                if self.delete_selection().is_none() && self.cursor > 0 {
                    self.buffer.remove(self.cursor - 1, self.cursor);
                    self.cursor -= 1;
                }
            }
            Key::A if mods.ctrl => {
                if !self.buffer.is_empty() {
                    self.anchor = Some(0);
                    self.cursor = self.buffer.len();
                }
            }
            Key::C if mods.ctrl => {
                // Copy-only extraction; with no anchor this clears the cache.
                self.clipboard = self.peek_selection();
            }
            Key::X if mods.ctrl => {
                if self.anchor.is_some() {
                    self.clipboard = self.delete_selection();
                }
            }
            Key::V if mods.ctrl => self.paste(),
            _ => {}
        }
        None
    }

    /// Anchor bookkeeping after a navigation key, given the cursor position
    /// before the move. Shift starts a selection only when none exists;
    /// navigating without shift collapses it whether or not the cursor
    /// actually moved.
    fn shift_anchor(&mut self, before_move: usize, mods: Modifiers) {
        if mods.shift {
            if self.anchor.is_none() {
                self.anchor = Some(before_move);
            }
        } else {
            self.anchor = None;
        }
    }

    /// Extract the selected text without mutating anything.
    fn peek_selection(&self) -> Option<String> {
        self.selection().map(|sel| sel.slice(self.buffer.chars()))
    }

    /// Delete the selected range, land the cursor at its left edge and
    /// clear the anchor. Returns the deleted text, `None` when no anchor
    /// is set (a collapsed selection yields an empty string, not `None`,
    /// so callers can tell "selection consumed" from "no selection").
    fn delete_selection(&mut self) -> Option<String> {
        let sel = self.selection()?;
        let text = sel.slice(self.buffer.chars());
        self.buffer.replace(sel.start, sel.end, "");
        self.cursor = sel.start;
        self.anchor = None;
        Some(text)
    }

    /// Paste the clipboard cache: replace the selection, then insert one
    /// character at a time while the buffer stays under capacity. Overflow
    /// is silent truncation. An empty (or never filled) cache is a
    /// complete no-op, the selection is left alone.
    fn paste(&mut self) {
        let Some(clip) = self.clipboard.clone() else {
            return;
        };
        if clip.is_empty() {
            return;
        }
        self.delete_selection();
        for ch in clip.chars() {
            if self.buffer.insert(self.cursor, ch) {
                self.cursor += 1;
            }
        }
    }
}
