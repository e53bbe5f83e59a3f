//! Key identity carried by [`KeyEvent`](crate::event::KeyEvent).
//!
//! The event layer treats [`Key`] as an opaque value and never interprets it.
//! Platform code picks whichever form it has:
//! - **Scancode:** layout-independent hardware key, packed with its extended flag
//! - **Char:** a key identified by the character it produces
//! - **KeyNum:** an engine-defined key number (mouse buttons, joystick buttons, …)

use std::fmt;

/// Keyboard (or keyboard-like) key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Key {
    #[default]
    None,
    /// Packed form: low 15 bits are the scancode, the high bit is the
    /// extended flag. Build it with [`Key::from_scancode`].
    Scancode(u16),
    Char(char),
    KeyNum(i32),
}

const EXTENDED_BIT: u16 = 0x8000;

impl Key {
    /// Pack a scancode and its extended (E0/E1) flag into a stable key.
    ///
    /// Layout:
    /// - low 15 bits = scancode
    /// - high bit    = extended flag
    #[inline]
    pub fn from_scancode(scancode: u16, is_extended: bool) -> Self {
        let mut idx = scancode & !EXTENDED_BIT;
        if is_extended {
            idx |= EXTENDED_BIT;
        }
        Key::Scancode(idx)
    }

    /// Scancode without the extended flag, for scancode keys.
    pub fn scancode(&self) -> Option<u16> {
        match *self {
            Key::Scancode(packed) => Some(packed & !EXTENDED_BIT),
            _ => None,
        }
    }

    /// `true` for extended scancode keys.
    pub fn is_extended(&self) -> bool {
        matches!(*self, Key::Scancode(packed) if packed & EXTENDED_BIT != 0)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Key::None)
    }
}

impl fmt::Display for Key {
    /// Binding-style names: `key_1E`, `key_E01D`, `char_a`, `keynum_178`, `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::None => f.write_str("none"),
            Key::Scancode(packed) => {
                let sc = packed & !EXTENDED_BIT;
                if packed & EXTENDED_BIT != 0 {
                    write!(f, "key_E0{sc:02X}")
                } else {
                    write!(f, "key_{sc:02X}")
                }
            }
            Key::Char(c) => write!(f, "char_{c}"),
            Key::KeyNum(n) => write!(f, "keynum_{n}"),
        }
    }
}
