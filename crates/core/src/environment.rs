//! Capabilities the panel borrows from its host environment.
//!
//! The panel does not read styles or own event sources itself. The host
//! answers "does this element animate" and hands out `Registration`s for
//! the event streams the panel listens to. Every registration is released
//! explicitly through `PanelEnvironment::unlisten`.

/// Handle of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub &'static str);

impl ElementId {
    /// The right-hand side panel element.
    pub const SIDEBAR_RIGHT: ElementId = ElementId("sidebar-right");
}

/// Event stream a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// Window resize events
    Resize,
    /// Global key-down events
    KeyDown,
    /// Transition completion events of one element
    TransitionEnd(ElementId),
}

/// Handle returned when a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registration {
    id: u64,
    target: ListenTarget,
}

impl Registration {
    /// Create a registration handle. Called by environments only.
    pub fn new(id: u64, target: ListenTarget) -> Self {
        Self { id, target }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> ListenTarget {
        self.target
    }
}

/// Host environment of the panel.
pub trait PanelEnvironment {
    /// Whether the element currently has a non-trivial transition configured.
    ///
    /// `None` means the element is not mounted; implementations return false.
    fn has_active_transition(&self, element: Option<ElementId>) -> bool;

    /// Attach a listener and return its handle.
    fn listen(&mut self, target: ListenTarget) -> Registration;

    /// Detach a listener. Unknown or already released handles are ignored.
    fn unlisten(&mut self, registration: Registration);
}

/// Fire-and-forget telemetry recording.
pub trait TelemetrySink {
    /// Record a single event.
    fn track_event(&mut self, category: &str, event: &str);
}
