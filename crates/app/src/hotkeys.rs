//! Demo hotkeys that drive the panel request from the keyboard.
//!
//! Every binding is Alt+key. The panel's own toggle shortcut is handled by
//! the panel before these are consulted.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rhs_keyboard::KeyBinding;

/// Action bound to a demo hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    /// Open a conversation thread
    ShowThread,
    /// Open a single post card
    ShowCard,
    /// Open a plugin view
    ShowPlugin,
    /// Open the search view
    ShowSearch,
    /// Open recent mentions
    ShowMentions,
    /// Open flagged posts
    ShowFlagged,
    /// Open pinned posts of the panel channel
    ShowPinned,
    /// Flip the expansion request
    ToggleExpand,
    /// Collapse the expanded width
    Shrink,
    /// Switch the centre channel
    NextChannel,
    /// Rebind the panel to another channel
    NextRhsChannel,
    /// Fill the search box with the next sample term
    SearchTerm,
    Quit,
}

#[derive(Debug, Clone)]
pub struct DemoHotkeys {
    bindings: HashMap<KeyBinding, DemoAction>,
}

impl Default for DemoHotkeys {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoHotkeys {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        for (ch, action) in [
            ('t', DemoAction::ShowThread),
            ('c', DemoAction::ShowCard),
            ('p', DemoAction::ShowPlugin),
            ('s', DemoAction::ShowSearch),
            ('m', DemoAction::ShowMentions),
            ('f', DemoAction::ShowFlagged),
            ('n', DemoAction::ShowPinned),
            ('e', DemoAction::ToggleExpand),
            ('w', DemoAction::Shrink),
            ('h', DemoAction::NextChannel),
            ('r', DemoAction::NextRhsChannel),
            ('q', DemoAction::Quit),
        ] {
            bindings.insert(KeyBinding::alt(KeyCode::Char(ch)), action);
            bindings.insert(
                KeyBinding::new(
                    KeyCode::Char(ch.to_ascii_uppercase()),
                    KeyModifiers::ALT | KeyModifiers::SHIFT,
                ),
                action,
            );
        }
        bindings.insert(KeyBinding::alt(KeyCode::Char('/')), DemoAction::SearchTerm);

        Self { bindings }
    }

    /// Look up an Alt+key event.
    pub fn process(&self, key: &KeyEvent) -> Option<DemoAction> {
        if !key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }
        self.bindings.get(&KeyBinding::from(*key)).copied()
    }

    pub fn bindings(&self) -> &HashMap<KeyBinding, DemoAction> {
        &self.bindings
    }
}
