//! Core types and traits for the right-hand side panel.
//!
//! This crate provides the vocabulary shared by the controller, the
//! application store and the renderer without coupling them to each other:
//! - `PanelRequest` - the upstream request read on every update cycle
//! - `PanelAction` - actions the controller asks the store to perform
//! - `PanelEnvironment` - transition probing and listener registration
//! - `Event` / `EventHandler` - terminal event polling

pub mod action;
pub mod environment;
pub mod event;
pub mod request;

pub use action::{ContentVariant, PanelAction};
pub use environment::{ElementId, ListenTarget, PanelEnvironment, Registration, TelemetrySink};
pub use event::{Event, EventHandler};
pub use request::{Channel, PanelRequest, Snapshot};

/// CSS-style name of the property that drives the slide-in animation.
///
/// Only completions for this property settle the rendered state; other
/// properties (e.g. `width` while expanding) animate independently.
pub const SLIDE_PROPERTY: &str = "transform";
