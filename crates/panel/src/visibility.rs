//! Rendered open state of the panel.
//!
//! `is_open` is what upstream asks for; `rendered` is what the panel shows
//! as settled. Without a slide transition they are equal after every probe.
//! With one, `rendered` only moves when the slide property finishes
//! animating, and then takes the `is_open` value current at that moment.
//!
//! At most one transition-end registration is held at any time. Every probe
//! releases the previous one before deciding again.

use rhs_core::{ElementId, ListenTarget, PanelEnvironment, Registration, SLIDE_PROPERTY};
use rhs_logger as logger;

#[derive(Debug, Default)]
pub struct VisibilityController {
    rendered: bool,
    element: Option<ElementId>,
    transition_listener: Option<Registration>,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is visually settled open.
    pub fn rendered(&self) -> bool {
        self.rendered
    }

    /// Whether a transition-end registration is currently held.
    pub fn is_listening(&self) -> bool {
        self.transition_listener.is_some()
    }

    /// Element this controller is attached to.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Attach to an element and run the first probe.
    ///
    /// `element` may be None when the host could not resolve it; that is
    /// treated as "no transition".
    pub fn on_mount(
        &mut self,
        element: Option<ElementId>,
        is_open: bool,
        env: &mut dyn PanelEnvironment,
    ) {
        self.element = element;
        self.determine_transition(is_open, env);
    }

    /// Viewport changes can add or remove transitions; probe again.
    pub fn on_resize(&mut self, is_open: bool, env: &mut dyn PanelEnvironment) {
        self.determine_transition(is_open, env);
    }

    /// Probe the element's transition capability.
    ///
    /// With a transition configured, (re)subscribe and leave `rendered`
    /// untouched. Without one, settle `rendered` to `is_open` right away.
    pub fn determine_transition(&mut self, is_open: bool, env: &mut dyn PanelEnvironment) {
        self.release(env);

        match self
            .element
            .filter(|element| env.has_active_transition(Some(*element)))
        {
            Some(element) => {
                let registration = env.listen(ListenTarget::TransitionEnd(element));
                logger::debug(format!(
                    "rhs: transition on {}, waiting for {} (listener {})",
                    element.0,
                    SLIDE_PROPERTY,
                    registration.id()
                ));
                self.transition_listener = Some(registration);
            }
            None => {
                self.rendered = is_open;
            }
        }
    }

    /// Handle a finished transition of `property`.
    ///
    /// Returns true when `rendered` changed. Ignored when nothing is
    /// subscribed or the property is not the slide property.
    pub fn on_transition_finished(&mut self, property: &str, is_open: bool) -> bool {
        if self.transition_listener.is_none() || property != SLIDE_PROPERTY {
            return false;
        }

        let changed = self.rendered != is_open;
        self.rendered = is_open;
        changed
    }

    /// Release the transition registration and detach. Idempotent.
    pub fn on_unmount(&mut self, env: &mut dyn PanelEnvironment) {
        self.release(env);
        self.element = None;
    }

    fn release(&mut self, env: &mut dyn PanelEnvironment) {
        if let Some(registration) = self.transition_listener.take() {
            env.unlisten(registration);
        }
    }
}
