//! Test doubles for the panel environment and telemetry.

use rhs_core::{ElementId, ListenTarget, PanelEnvironment, Registration, TelemetrySink};

#[derive(Debug, Default)]
pub struct FakeEnvironment {
    /// Answer returned by `has_active_transition` for mounted elements
    pub transition: bool,
    next_id: u64,
    active: Vec<Registration>,
    /// Number of `unlisten` calls, including no-ops
    pub unlisten_calls: usize,
}

impl FakeEnvironment {
    pub fn with_transition() -> Self {
        Self {
            transition: true,
            ..Default::default()
        }
    }

    pub fn active(&self) -> &[Registration] {
        &self.active
    }

    pub fn active_count(&self, target: ListenTarget) -> usize {
        self.active.iter().filter(|r| r.target() == target).count()
    }
}

impl PanelEnvironment for FakeEnvironment {
    fn has_active_transition(&self, element: Option<ElementId>) -> bool {
        element.is_some() && self.transition
    }

    fn listen(&mut self, target: ListenTarget) -> Registration {
        self.next_id += 1;
        let registration = Registration::new(self.next_id, target);
        self.active.push(registration);
        registration
    }

    fn unlisten(&mut self, registration: Registration) {
        self.unlisten_calls += 1;
        self.active.retain(|r| *r != registration);
    }
}

#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    pub events: Vec<(String, String)>,
}

impl TelemetrySink for RecordingTelemetry {
    fn track_event(&mut self, category: &str, event: &str) {
        self.events.push((category.to_string(), event.to_string()));
    }
}
