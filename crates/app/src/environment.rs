//! Animated host environment for the right-hand side panel.
//!
//! Stands in for a rendering engine with CSS-like transitions:
//! - the panel slides in and out along `transform`
//! - expanding or shrinking animates `width`
//!
//! Transitions are configured only when `transition_ms > 0` and the
//! terminal leaves room for the main area next to the panel; on narrow
//! terminals the panel snaps without sliding. Completions are delivered
//! from `tick` to elements holding a `TransitionEnd` registration.

use std::time::{Duration, Instant};

use rhs_config::Config;
use rhs_core::{ElementId, ListenTarget, PanelEnvironment, Registration, SLIDE_PROPERTY};

/// Property animated while the panel width changes.
pub const WIDTH_PROPERTY: &str = "width";

/// Columns the main area keeps next to a sliding panel.
const MIN_MAIN_WIDTH: u16 = 20;

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Animation {
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// One animated property of the panel element.
#[derive(Debug)]
struct Track {
    property: &'static str,
    value: f32,
    target: f32,
    animation: Option<Animation>,
}

impl Track {
    fn new(property: &'static str, value: f32) -> Self {
        Self {
            property,
            value,
            target: value,
            animation: None,
        }
    }

    fn set_target(&mut self, target: f32, duration: Option<Duration>, now: Instant) {
        if (self.target - target).abs() < f32::EPSILON {
            return;
        }
        self.value = self.current(now);
        self.target = target;
        self.animation = duration.map(|duration| Animation {
            from: self.value,
            to: target,
            started: now,
            duration,
        });
        if self.animation.is_none() {
            self.value = target;
        }
    }

    fn current(&self, now: Instant) -> f32 {
        self.animation
            .map(|animation| animation.value_at(now))
            .unwrap_or(self.value)
    }

    /// Advance; returns the property name when the animation just finished.
    fn tick(&mut self, now: Instant) -> Option<&'static str> {
        let animation = self.animation?;
        if !animation.is_done(now) {
            return None;
        }
        self.animation = None;
        self.value = animation.to;
        Some(self.property)
    }
}

/// Terminal-backed panel environment with timed transitions.
#[derive(Debug)]
pub struct SlideEnvironment {
    slide_duration: Duration,
    expand_duration: Duration,
    panel_width: u16,
    expanded_width: u16,
    terminal_width: u16,
    next_id: u64,
    registrations: Vec<Registration>,
    /// 0.0 hidden, 1.0 fully slid in
    slide: Track,
    /// 0.0 normal width, 1.0 expanded width
    width: Track,
}

impl SlideEnvironment {
    pub fn new(config: &Config, terminal_width: u16) -> Self {
        Self {
            slide_duration: Duration::from_millis(config.panel.transition_ms),
            expand_duration: Duration::from_millis(config.panel.expand_transition_ms),
            panel_width: config.panel_width(false),
            expanded_width: config.panel_width(true),
            terminal_width,
            next_id: 0,
            registrations: Vec::new(),
            slide: Track::new(SLIDE_PROPERTY, 0.0),
            width: Track::new(WIDTH_PROPERTY, 0.0),
        }
    }

    pub fn set_terminal_width(&mut self, width: u16) {
        self.terminal_width = width;
    }

    /// Whether transitions apply at the current terminal width.
    pub fn transitions_enabled(&self) -> bool {
        !self.slide_duration.is_zero()
            && self.terminal_width >= self.panel_width.saturating_add(MIN_MAIN_WIDTH)
    }

    pub fn is_listening(&self, target: ListenTarget) -> bool {
        self.registrations.iter().any(|r| r.target() == target)
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Whether any property is mid-animation.
    pub fn is_animating(&self) -> bool {
        self.slide.animation.is_some() || self.width.animation.is_some()
    }

    /// Apply the panel's visual flags, starting transitions as configured.
    pub fn apply_classes(&mut self, move_left: bool, expanded: bool, now: Instant) {
        let enabled = self.transitions_enabled();
        let slide = enabled.then_some(self.slide_duration);
        let expand = (enabled && !self.expand_duration.is_zero()).then_some(self.expand_duration);

        self.slide
            .set_target(if move_left { 1.0 } else { 0.0 }, slide, now);
        self.width
            .set_target(if expanded { 1.0 } else { 0.0 }, expand, now);
    }

    /// Advance animations and collect completions for listening elements.
    pub fn tick(&mut self, now: Instant) -> Vec<(ElementId, &'static str)> {
        let element = ElementId::SIDEBAR_RIGHT;
        let listening = self.is_listening(ListenTarget::TransitionEnd(element));

        [self.slide.tick(now), self.width.tick(now)]
            .into_iter()
            .flatten()
            .filter(|_| listening)
            .map(|property| (element, property))
            .collect()
    }

    /// Visible panel width in columns at `now`.
    pub fn visible_width(&self, now: Instant) -> u16 {
        let full = self.panel_width as f32
            + (self.expanded_width - self.panel_width) as f32 * self.width.current(now);
        let visible = (full * self.slide.current(now)).round() as u16;
        visible.min(self.terminal_width)
    }
}

impl PanelEnvironment for SlideEnvironment {
    fn has_active_transition(&self, element: Option<ElementId>) -> bool {
        element == Some(ElementId::SIDEBAR_RIGHT) && self.transitions_enabled()
    }

    fn listen(&mut self, target: ListenTarget) -> Registration {
        self.next_id += 1;
        let registration = Registration::new(self.next_id, target);
        self.registrations.push(registration);
        registration
    }

    fn unlisten(&mut self, registration: Registration) {
        self.registrations.retain(|r| *r != registration);
    }
}
