//! Decoded input events the editor understands.
//!
//! Hosts translate whatever their windowing layer delivers into these
//! values and drop everything else. Autorepeat policy also belongs to the
//! host; the editor treats every event as one discrete press.

/// Modifier flags accompanying an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    /// Ctrl only.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// Semantic keys the editor reacts to.
///
/// Letter keys appear here only because of their ctrl-chord meaning
/// (select-all, copy, cut, paste); without ctrl they are ignored as key
/// events since typing arrives separately as [`InputEvent::Char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Left,
    Right,
    Home,
    End,
    Delete,
    Backspace,
    A,
    C,
    X,
    V,
}

/// One key press with its modifiers, as delivered to the editor and as
/// carried back out by the submit notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Key,
    pub mods: Modifiers,
}

/// A decoded input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A displayable character was typed.
    Char { ch: char, mods: Modifiers },
    /// A semantic key was pressed.
    Key(KeyStroke),
}

impl InputEvent {
    /// A character typed with no modifiers held.
    pub fn typed(ch: char) -> Self {
        Self::Char {
            ch,
            mods: Modifiers::NONE,
        }
    }

    /// A key pressed with no modifiers held.
    pub fn key(key: Key) -> Self {
        Self::Key(KeyStroke {
            key,
            mods: Modifiers::NONE,
        })
    }

    /// A key pressed with the given modifiers.
    pub fn key_with(key: Key, mods: Modifiers) -> Self {
        Self::Key(KeyStroke { key, mods })
    }

    /// The same event with its modifier flags replaced.
    ///
    /// Hosts that synthesize events after the original press (key repeat,
    /// for one) use this to stamp on the modifiers held at emit time.
    pub fn with_mods(self, mods: Modifiers) -> Self {
        match self {
            Self::Char { ch, .. } => Self::Char { ch, mods },
            Self::Key(stroke) => Self::Key(KeyStroke {
                key: stroke.key,
                mods,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_modifiers() {
        assert_eq!(
            InputEvent::typed('a'),
            InputEvent::Char {
                ch: 'a',
                mods: Modifiers::NONE
            }
        );
        assert_eq!(
            InputEvent::key_with(Key::C, Modifiers::CTRL),
            InputEvent::Key(KeyStroke {
                key: Key::C,
                mods: Modifiers {
                    ctrl: true,
                    shift: false
                }
            })
        );
    }

    #[test]
    fn with_mods_replaces_the_flags_on_both_variants() {
        assert_eq!(
            InputEvent::typed('a').with_mods(Modifiers::CTRL),
            InputEvent::Char {
                ch: 'a',
                mods: Modifiers::CTRL
            }
        );
        assert_eq!(
            InputEvent::key_with(Key::Left, Modifiers::CTRL).with_mods(Modifiers::SHIFT),
            InputEvent::key_with(Key::Left, Modifiers::SHIFT)
        );
    }
}
