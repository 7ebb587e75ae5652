//! # edit_core
//!
//! UI-agnostic editing core for a single-line, fixed-capacity text box.
//!
//! This crate provides the building blocks of the text-input widget:
//! - [`TextBuffer`]: A character buffer with a hard capacity that silently
//!   rejects insertions beyond it
//! - [`Editor`]: Cursor, optional selection anchor, clipboard cache, and
//!   the keyboard-event state machine tying them together
//! - [`SelectionRange`]: A normalized start/end character range
//! - [`InputEvent`] / [`Key`] / [`Modifiers`]: The decoded event vocabulary
//!   hosts translate their input into
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Font metrics or layout
//! - Platform-specific input APIs
//!
//! It depends only on `std` and provides pure editing semantics that can
//! be tested independently and reused across different frontends.
//!
//! ## Integration
//!
//! A host decodes its raw keyboard input into [`InputEvent`] values,
//! feeds them through [`Editor::apply`] while the widget has focus, and
//! reacts to the returned [`Signal`]:
//! ```
//! use edit_core::{Editor, InputEvent, Key, Signal};
//!
//! let mut editor = Editor::new("", 32);
//! editor.set_active(true);
//! editor.apply(InputEvent::typed('o'));
//! editor.apply(InputEvent::typed('k'));
//!
//! match editor.apply(InputEvent::key(Key::Enter)) {
//!     Some(Signal::Submit(_)) => assert_eq!(editor.text(), "ok"),
//!     _ => unreachable!(),
//! }
//! ```

mod buffer;
mod editor;
mod event;
mod selection;
mod word;

pub use buffer::TextBuffer;
pub use editor::{Editor, Signal};
pub use event::{InputEvent, Key, KeyStroke, Modifiers};
pub use selection::SelectionRange;

// Re-exported for integration layers that implement their own word-wise
// navigation (and for the fuzz harness).
pub use word::{next_word_boundary, prev_word_boundary};
