//! Drives arbitrary decoded event streams through the editor and checks
//! the structural invariants after every single event.

#![no_main]

use edit_core::{Editor, InputEvent, Key, Modifiers};
use libfuzzer_sys::fuzz_target;

const KEYS: [Key; 11] = [
    Key::Enter,
    Key::Left,
    Key::Right,
    Key::Home,
    Key::End,
    Key::Delete,
    Key::Backspace,
    Key::A,
    Key::C,
    Key::X,
    Key::V,
];

fn decode(byte: u8, mods: Modifiers) -> InputEvent {
    let selector = byte & 0x1f;
    if (selector as usize) < KEYS.len() {
        InputEvent::key_with(KEYS[selector as usize], mods)
    } else {
        // Printable ASCII, plus the occasional CR/LF to hit the reject path.
        let ch = match selector {
            0x1e => '\r',
            0x1f => '\n',
            _ => (b' ' + (byte % 95)) as char,
        };
        InputEvent::Char { ch, mods }
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let max_len = (first as usize) % 64;
    let mut editor = Editor::new("seed text", max_len);
    editor.set_active(true);

    for &byte in rest {
        let mods = Modifiers {
            ctrl: byte & 0x40 != 0,
            shift: byte & 0x80 != 0,
        };
        editor.apply(decode(byte, mods));

        let len = editor.buffer().len();
        assert!(len <= editor.buffer().max_len());
        assert!(editor.cursor() <= len);
        if let Some(anchor) = editor.selection_anchor() {
            assert!(anchor <= len);
        }
    }
});
