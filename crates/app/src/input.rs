//! Translation from winit keyboard input to editor events.

use edit_core::{InputEvent, Key, Modifiers};
use winit::event::Modifiers as WinitModifiers;
use winit::keyboard::{Key as WinitKey, NamedKey};

/// Live modifier state, fed from `WindowEvent::ModifiersChanged`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierState {
    mods: Modifiers,
}

impl ModifierState {
    pub fn update(&mut self, state: &WinitModifiers) {
        let s = state.state();
        self.mods = Modifiers {
            ctrl: s.control_key(),
            shift: s.shift_key(),
        };
    }

    pub fn current(&self) -> Modifiers {
        self.mods
    }
}

/// Decode one pressed key into an editor event.
///
/// `text` is the press's text payload, if it produced one. Keys the editor
/// has no meaning for decode to `None`, as does anything that would type a
/// control character; the editor's own CR/LF rejection stays as a second
/// line of defense.
pub fn decode_press(logical: &WinitKey, text: Option<&str>, mods: Modifiers) -> Option<InputEvent> {
    if let WinitKey::Named(named) = logical {
        let key = match named {
            NamedKey::Enter => Some(Key::Enter),
            NamedKey::ArrowLeft => Some(Key::Left),
            NamedKey::ArrowRight => Some(Key::Right),
            NamedKey::Home => Some(Key::Home),
            NamedKey::End => Some(Key::End),
            NamedKey::Delete => Some(Key::Delete),
            NamedKey::Backspace => Some(Key::Backspace),
            _ => None,
        };
        if let Some(key) = key {
            return Some(InputEvent::key_with(key, mods));
        }
    }

    if mods.ctrl {
        // Chords only; a ctrl'd letter is never typing.
        let key = match logical {
            WinitKey::Character(s) => match s.as_str() {
                "a" | "A" => Some(Key::A),
                "c" | "C" => Some(Key::C),
                "x" | "X" => Some(Key::X),
                "v" | "V" => Some(Key::V),
                _ => None,
            },
            _ => None,
        };
        return key.map(|key| InputEvent::key_with(key, mods));
    }

    let ch = text.and_then(|t| t.chars().next())?;
    if ch.is_control() {
        return None;
    }
    Some(InputEvent::Char { ch, mods })
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    fn character(s: &str) -> WinitKey {
        WinitKey::Character(SmolStr::new(s))
    }

    #[test]
    fn plain_letters_type() {
        let got = decode_press(&character("q"), Some("q"), Modifiers::NONE);
        assert_eq!(got, Some(InputEvent::typed('q')));
    }

    #[test]
    fn shifted_letters_carry_their_case_and_mods() {
        let got = decode_press(&character("Q"), Some("Q"), Modifiers::SHIFT);
        assert_eq!(
            got,
            Some(InputEvent::Char {
                ch: 'Q',
                mods: Modifiers::SHIFT
            })
        );
    }

    #[test]
    fn space_comes_through_as_text() {
        let got = decode_press(&WinitKey::Named(NamedKey::Space), Some(" "), Modifiers::NONE);
        assert_eq!(got, Some(InputEvent::typed(' ')));
    }

    #[test]
    fn enter_is_a_key_not_a_character() {
        // Enter also carries "\r" as its text payload; the named key wins.
        let got = decode_press(&WinitKey::Named(NamedKey::Enter), Some("\r"), Modifiers::NONE);
        assert_eq!(got, Some(InputEvent::key(Key::Enter)));
    }

    #[test]
    fn navigation_keys_keep_their_modifiers() {
        let mods = Modifiers {
            ctrl: true,
            shift: true,
        };
        let got = decode_press(&WinitKey::Named(NamedKey::ArrowLeft), None, mods);
        assert_eq!(got, Some(InputEvent::key_with(Key::Left, mods)));
    }

    #[test]
    fn ctrl_chords_decode_to_semantic_keys() {
        for (s, key) in [("a", Key::A), ("c", Key::C), ("x", Key::X), ("v", Key::V)] {
            let got = decode_press(&character(s), None, Modifiers::CTRL);
            assert_eq!(got, Some(InputEvent::key_with(key, Modifiers::CTRL)));
        }
    }

    #[test]
    fn unknown_ctrl_letters_are_dropped() {
        assert_eq!(
            decode_press(&character("z"), Some("\u{1a}"), Modifiers::CTRL),
            None
        );
    }

    #[test]
    fn control_characters_never_type() {
        assert_eq!(
            decode_press(&WinitKey::Named(NamedKey::Tab), Some("\t"), Modifiers::NONE),
            None
        );
    }

    #[test]
    fn unmapped_named_keys_are_ignored() {
        assert_eq!(
            decode_press(&WinitKey::Named(NamedKey::F5), None, Modifiers::NONE),
            None
        );
    }
}
