//! Toggle-with-memory for the panel shortcut.
//!
//! While the panel is open every observed request overwrites the stored
//! snapshot. While it is closed the snapshot is left alone, so it always
//! holds what was showing last. The shortcut closes an open panel, or
//! reopens a closed one at that snapshot.

use crossterm::event::KeyEvent;
use rhs_core::{PanelAction, PanelRequest, Snapshot};
use rhs_keyboard::Shortcut;
use rhs_logger as logger;

#[derive(Debug)]
pub struct ToggleMemory {
    shortcut: Shortcut,
    previous: Option<Snapshot>,
}

impl ToggleMemory {
    pub fn new(shortcut: Shortcut) -> Self {
        Self {
            shortcut,
            previous: None,
        }
    }

    pub fn shortcut(&self) -> Shortcut {
        self.shortcut
    }

    /// Remembered sub-view, if the panel was ever seen open.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// Record the sub-view of a committed request.
    pub fn observe(&mut self, request: &PanelRequest) {
        if request.is_open {
            self.previous = Some(request.snapshot());
        }
    }

    /// Action for a toggle given the current open state.
    pub fn toggle(&self, is_open: bool) -> PanelAction {
        if is_open {
            PanelAction::ClosePanel
        } else {
            PanelAction::OpenAtPrevious(self.previous.clone())
        }
    }

    /// Handle a key-down event.
    ///
    /// Returns None when the event is not the shortcut and must be passed
    /// on. Some means the event is consumed and its default suppressed.
    pub fn on_shortcut(&self, key: &KeyEvent, is_open: bool) -> Option<PanelAction> {
        if !self.shortcut.matches(key) {
            return None;
        }

        let action = self.toggle(is_open);
        logger::debug(format!("rhs: toggle shortcut -> {:?}", action));
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn shortcut_key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('.'), KeyModifiers::CONTROL)
    }

    fn open_request(post: &str) -> PanelRequest {
        PanelRequest {
            is_open: true,
            post_right_visible: true,
            selected_post_id: Some(post.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_empty() {
        let memory = ToggleMemory::new(Shortcut::new('.'));
        assert!(memory.snapshot().is_none());
        assert_eq!(memory.toggle(false), PanelAction::OpenAtPrevious(None));
    }

    #[test]
    fn test_closed_requests_do_not_overwrite() {
        let mut memory = ToggleMemory::new(Shortcut::new('.'));

        memory.observe(&open_request("p1"));
        memory.observe(&open_request("p2"));
        memory.observe(&PanelRequest {
            is_open: false,
            search_visible: true,
            ..Default::default()
        });
        assert_eq!(
            memory.snapshot().and_then(|s| s.selected_post_id.as_deref()),
            Some("p2")
        );

        let fourth = open_request("p4");
        memory.observe(&fourth);
        assert_eq!(memory.snapshot(), Some(&fourth.snapshot()));
    }

    #[test]
    fn test_shortcut_closes_open_panel() {
        let mut memory = ToggleMemory::new(Shortcut::new('.'));
        memory.observe(&open_request("p1"));

        assert_eq!(
            memory.on_shortcut(&shortcut_key(), true),
            Some(PanelAction::ClosePanel)
        );
    }

    #[test]
    fn test_shortcut_reopens_at_snapshot() {
        let mut memory = ToggleMemory::new(Shortcut::new('.'));
        let request = open_request("p1");
        memory.observe(&request);

        assert_eq!(
            memory.on_shortcut(&shortcut_key(), false),
            Some(PanelAction::OpenAtPrevious(Some(request.snapshot())))
        );
        // Reading does not clear.
        assert!(memory.snapshot().is_some());
    }

    #[test]
    fn test_other_keys_pass_through() {
        let memory = ToggleMemory::new(Shortcut::new('.'));
        let plain = KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

        assert_eq!(memory.on_shortcut(&plain, true), None);
        assert_eq!(memory.on_shortcut(&other, false), None);
    }
}
