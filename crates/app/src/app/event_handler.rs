//! Terminal event handling for the application.
//!
//! Key, resize and transition events reach the panel only while it holds
//! the matching registration in the environment.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rhs_core::{ListenTarget, PanelAction};
use rhs_logger as logger;

use super::App;
use crate::hotkeys::DemoAction;

impl App {
    /// Handle a key press.
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.env.is_listening(ListenTarget::KeyDown) {
            if let Some(action) = self.sidebar.handle_key(&key) {
                self.state.apply(action);
                self.commit();
                return;
            }
        }

        if let Some(action) = self.hotkeys.process(&key) {
            self.execute_demo_action(action);
            return;
        }

        if key.code == KeyCode::Esc && key.modifiers.is_empty() && self.state.search_focused {
            self.state.search_focused = false;
            self.state.needs_redraw = true;
        }
    }

    /// Execute a demo hotkey action
    fn execute_demo_action(&mut self, action: DemoAction) {
        match action {
            DemoAction::ShowThread => self.state.show_thread(),
            DemoAction::ShowCard => self.state.show_card(),
            DemoAction::ShowPlugin => self.state.show_plugin(),
            DemoAction::ShowSearch => self.state.apply(PanelAction::OpenSearch),
            DemoAction::ShowMentions => self.state.show_mentions(),
            DemoAction::ShowFlagged => self.state.show_flagged(),
            DemoAction::ShowPinned => {
                let channel_id = self.state.request.rhs_channel_id().map(str::to_string);
                self.state.apply(PanelAction::ShowPinnedPosts(channel_id));
            }
            DemoAction::ToggleExpand => self.state.toggle_expand(),
            DemoAction::Shrink => self.state.apply(self.sidebar.shrink()),
            DemoAction::NextChannel => self.state.next_channel(),
            DemoAction::NextRhsChannel => self.state.next_rhs_channel(),
            DemoAction::SearchTerm => {
                let term = self.state.next_search_term();
                let action = self.sidebar.update_search_terms(term);
                self.state.apply(action);
            }
            DemoAction::Quit => {
                logger::info("Quit requested");
                self.state.should_quit = true;
                return;
            }
        }
        self.commit();
    }

    /// Clicking the main area while expanded collapses the panel.
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let main_width = self
            .state
            .terminal
            .width
            .saturating_sub(self.panel_width());
        if mouse.column < main_width && self.sidebar.view().expanded {
            self.state.apply(self.sidebar.shrink());
            self.commit();
        }
    }

    /// Terminal resized.
    pub(super) fn handle_resize(&mut self, width: u16, height: u16) {
        self.state.update_terminal_size(width, height);
        self.env.set_terminal_width(width);

        if self.env.is_listening(ListenTarget::Resize) {
            self.sidebar.resize(&mut self.env);
        }
        self.sync_classes();
        self.state.needs_redraw = true;
    }

    /// Advance transitions and deliver completions.
    pub(super) fn handle_tick(&mut self, now: Instant) {
        let animating = self.env.is_animating();

        for (element, property) in self.env.tick(now) {
            if self.sidebar.transition_finished(element, property) {
                logger::debug(format!("{} transition settled the panel", property));
            }
            self.state.needs_redraw = true;
        }

        if animating {
            self.state.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rhs_config::Config;

    fn click(column: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn expanded_app() -> App {
        let mut config = Config::default();
        config.panel.transition_ms = 0;
        let mut app = App::new(config, 120, 40);
        app.mount();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT));
        app
    }

    #[test]
    fn test_click_in_main_area_shrinks() {
        let mut app = expanded_app();
        assert!(app.view().expanded);

        app.handle_mouse_event(click(5));
        assert!(!app.view().expanded);
    }

    #[test]
    fn test_click_inside_panel_keeps_expansion() {
        let mut app = expanded_app();
        app.handle_mouse_event(click(110));
        assert!(app.view().expanded);
    }

    #[test]
    fn test_shortcut_ignored_after_unmount() {
        let mut app = expanded_app();
        app.unmount();

        app.handle_key_event(KeyEvent::new(KeyCode::Char('.'), KeyModifiers::CONTROL));
        assert!(app.state.request.is_open);
    }

    #[test]
    fn test_resize_to_narrow_settles_immediately() {
        let mut config = Config::default();
        config.panel.transition_ms = 200;
        let mut app = App::new(config, 120, 40);
        app.mount();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT));
        assert!(!app.sidebar.rendered());

        app.handle_resize(50, 40);
        assert!(app.sidebar.rendered());
    }
}
