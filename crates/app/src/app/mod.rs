//! Main application module.
//!
//! Contains the App struct, the commit cycle and the event loop.

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

use rhs_config::Config;
use rhs_core::event::{Event, EventHandler};
use rhs_core::ElementId;
use rhs_keyboard::Shortcut;
use rhs_logger as logger;
use rhs_panel::{PanelCtx, SidebarRight, SidebarView};

use crate::environment::SlideEnvironment;
use crate::hotkeys::DemoHotkeys;
use crate::state::AppState;
use crate::telemetry::LogTelemetry;

mod event_handler;

/// Upper bound on update rounds per commit.
///
/// Actions returned by an update are applied and committed again until
/// the request settles.
const MAX_COMMIT_ROUNDS: usize = 4;

/// Main application
pub struct App {
    state: AppState,
    sidebar: SidebarRight,
    env: SlideEnvironment,
    telemetry: LogTelemetry,
    event_handler: EventHandler,
    hotkeys: DemoHotkeys,
}

impl App {
    /// Create a new application for a terminal of the given size
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let mut state = AppState::new(config);
        state.update_terminal_size(width, height);

        let env = SlideEnvironment::new(&state.config, width);
        let sidebar = SidebarRight::new(
            state.request.clone(),
            Shortcut::new(state.config.general.toggle_key),
        );

        Self {
            state,
            sidebar,
            env,
            telemetry: LogTelemetry::new(),
            event_handler: EventHandler::new(Duration::from_millis(
                rhs_config::constants::EVENT_HANDLER_INTERVAL_MS,
            )),
            hotkeys: DemoHotkeys::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sidebar(&self) -> &SidebarRight {
        &self.sidebar
    }

    /// Props for drawing the panel.
    pub fn view(&self) -> SidebarView {
        self.sidebar.view()
    }

    /// Visible panel width in columns right now.
    pub fn panel_width(&self) -> u16 {
        self.env.visible_width(Instant::now())
    }

    /// Attach the panel to its element.
    pub fn mount(&mut self) {
        let mut ctx = PanelCtx {
            env: &mut self.env,
            telemetry: &mut self.telemetry,
        };
        self.sidebar.mount(Some(ElementId::SIDEBAR_RIGHT), &mut ctx);
        self.sync_classes();
        logger::info("Panel mounted");
    }

    /// Detach the panel and release its registrations.
    pub fn unmount(&mut self) {
        self.sidebar.unmount(&mut self.env);
        logger::info(format!(
            "Panel unmounted ({} registrations left)",
            self.env.registration_count()
        ));
    }

    /// Hand the store's request to the panel and apply what it returns.
    pub fn commit(&mut self) {
        for _ in 0..MAX_COMMIT_ROUNDS {
            if self.state.request == *self.sidebar.request() {
                break;
            }

            let mut ctx = PanelCtx {
                env: &mut self.env,
                telemetry: &mut self.telemetry,
            };
            let actions = self.sidebar.update(self.state.request.clone(), &mut ctx);
            for action in actions {
                self.state.apply(action);
            }
        }

        if self.sidebar.take_search_focus() {
            self.state.search_focused = true;
        }
        if !self.state.request.is_open {
            self.state.search_focused = false;
        }

        self.sync_classes();
        self.state.needs_redraw = true;
    }

    /// Push the panel's visual flags into the environment.
    fn sync_classes(&mut self) {
        let view = self.sidebar.view();
        self.env
            .apply_classes(view.move_left, view.expanded, Instant::now());
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut ratatui::Frame<'_>, &App),
    ) -> Result<()> {
        let size = terminal.size()?;
        self.handle_resize(size.width, size.height);
        self.mount();

        while !self.state.should_quit {
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                }
                Event::Tick => {
                    self.handle_tick(Instant::now());
                }
            }

            if self.state.needs_redraw {
                terminal.draw(|frame| render_fn(frame, &*self))?;
                self.state.needs_redraw = false;
            }
        }

        self.unmount();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(transition_ms: u64) -> App {
        let mut config = Config::default();
        config.panel.transition_ms = transition_ms;
        config.panel.expand_transition_ms = transition_ms;
        let mut app = App::new(config, 120, 40);
        app.mount();
        app
    }

    fn toggle() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('.'), KeyModifiers::CONTROL)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn test_mount_registers_listeners() {
        let mut app = app(200);
        assert_eq!(app.env.registration_count(), 3);
        app.unmount();
        assert_eq!(app.env.registration_count(), 0);
    }

    #[test]
    fn test_toggle_round_trip_without_transition() {
        let mut app = app(0);
        app.handle_key_event(alt('t'));
        assert!(app.sidebar.rendered());
        assert_eq!(app.telemetry.sent(), 1);

        app.handle_key_event(toggle());
        assert!(!app.state.request.is_open);
        assert!(!app.sidebar.rendered());

        app.handle_key_event(toggle());
        assert!(app.state.request.post_right_visible);
        assert_eq!(app.state.request.selected_post_id.as_deref(), Some("post-1"));
        assert_eq!(app.telemetry.sent(), 2);
    }

    #[test]
    fn test_first_toggle_opens_search() {
        let mut app = app(0);
        app.handle_key_event(toggle());
        assert!(app.state.request.is_open);
        assert!(app.state.request.search_visible);
    }

    #[test]
    fn test_rendered_waits_for_slide() {
        let mut app = app(50);
        let start = Instant::now();
        app.handle_key_event(alt('t'));
        assert!(!app.sidebar.rendered());

        app.handle_tick(start + Duration::from_secs(1));
        assert!(app.sidebar.rendered());
    }

    #[test]
    fn test_channel_switch_collapses() {
        let mut app = app(0);
        app.handle_key_event(alt('t'));
        app.handle_key_event(alt('e'));
        assert!(app.view().expanded);

        app.handle_key_event(alt('h'));
        assert!(!app.state.request.is_expanded);
        assert!(!app.view().expanded);
    }

    #[test]
    fn test_search_term_focuses_search() {
        let mut app = app(0);
        app.handle_key_event(alt('/'));
        assert!(app.state.search_focused);
        assert_eq!(app.state.search_terms, "from:alice");

        app.handle_key_event(toggle());
        assert!(!app.state.search_focused);
    }

    #[test]
    fn test_quit() {
        let mut app = app(0);
        app.handle_key_event(alt('q'));
        assert!(app.state.should_quit);
    }
}
