//! Keyboard shortcuts and layout translation.
//!
//! Hotkeys are matched on the physical key: with a Cyrillic layout active,
//! `Ctrl+ю` is the same key as `Ctrl+.` and must trigger the same shortcut.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ЙЦУКЕН rows and the QWERTY characters on the same physical keys.
const CYRILLIC_LOWER: &str = "йцукенгшщзхъфывапролджэячсмитьбю";
const LATIN_LOWER: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.";
const CYRILLIC_UPPER: &str = "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ";
const LATIN_UPPER: &str = "QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>";

/// Map a Cyrillic character to the Latin character on the same key.
///
/// Other characters are returned unchanged.
pub fn cyrillic_to_latin(ch: char) -> char {
    [(CYRILLIC_LOWER, LATIN_LOWER), (CYRILLIC_UPPER, LATIN_UPPER)]
        .iter()
        .find_map(|(from, to)| {
            from.chars()
                .position(|c| c == ch)
                .and_then(|idx| to.chars().nth(idx))
        })
        .unwrap_or(ch)
}

/// Translate a key event for hotkey matching.
///
/// Only applies when Ctrl, Alt or Super is held so regular text input
/// is left alone.
pub fn translate_hotkey(key: KeyEvent) -> KeyEvent {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        if let KeyCode::Char(ch) = key.code {
            let translated = cyrillic_to_latin(ch);
            if translated != ch {
                return KeyEvent::new(KeyCode::Char(translated), key.modifiers);
            }
        }
    }
    key
}

/// Whether the platform command key is held (Ctrl, or Super/Meta on macOS).
pub fn cmd_or_ctrl_pressed(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

/// Whether the event is for the given character key, on any layout.
pub fn is_key_pressed(key: &KeyEvent, expected: char) -> bool {
    match translate_hotkey(*key).code {
        KeyCode::Char(ch) => ch.eq_ignore_ascii_case(&expected),
        _ => false,
    }
}

/// A key binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an Alt+key binding.
    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Check if a key event matches this binding (after layout translation).
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let key = translate_hotkey(*key);
        self.code == key.code && key.modifiers.contains(self.modifiers)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(event: KeyEvent) -> Self {
        let event = translate_hotkey(event);
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Command/Ctrl + key shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    key: char,
}

impl Shortcut {
    pub fn new(key: char) -> Self {
        Self { key }
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        cmd_or_ctrl_pressed(event) && is_key_pressed(event, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_to_latin() {
        assert_eq!(cyrillic_to_latin('й'), 'q');
        assert_eq!(cyrillic_to_latin('ф'), 'a');
        assert_eq!(cyrillic_to_latin('ю'), '.');
        assert_eq!(cyrillic_to_latin('Й'), 'Q');
        assert_eq!(cyrillic_to_latin('Ю'), '>');
        assert_eq!(cyrillic_to_latin('q'), 'q');
        assert_eq!(cyrillic_to_latin('1'), '1');
    }

    #[test]
    fn test_no_translate_without_modifier() {
        let key = KeyEvent::new(KeyCode::Char('ю'), KeyModifiers::NONE);
        assert_eq!(translate_hotkey(key).code, KeyCode::Char('ю'));

        let key = KeyEvent::new(KeyCode::Char('Ю'), KeyModifiers::SHIFT);
        assert_eq!(translate_hotkey(key).code, KeyCode::Char('Ю'));
    }

    #[test]
    fn test_shortcut_matches_ctrl_and_super() {
        let shortcut = Shortcut::new('.');
        assert!(shortcut.matches(&KeyEvent::new(KeyCode::Char('.'), KeyModifiers::CONTROL)));
        assert!(shortcut.matches(&KeyEvent::new(KeyCode::Char('.'), KeyModifiers::SUPER)));
        assert!(shortcut.matches(&KeyEvent::new(
            KeyCode::Char('.'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_shortcut_requires_command_modifier() {
        let shortcut = Shortcut::new('.');
        assert!(!shortcut.matches(&KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE)));
        assert!(!shortcut.matches(&KeyEvent::new(KeyCode::Char('.'), KeyModifiers::ALT)));
        assert!(!shortcut.matches(&KeyEvent::new(KeyCode::Char(','), KeyModifiers::CONTROL)));
        assert!(!shortcut.matches(&KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shortcut_on_cyrillic_layout() {
        let shortcut = Shortcut::new('.');
        assert!(shortcut.matches(&KeyEvent::new(KeyCode::Char('ю'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_key_binding_matches() {
        let binding = KeyBinding::alt(KeyCode::Char('t'));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT)));
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('е'), KeyModifiers::ALT)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)));
    }
}
