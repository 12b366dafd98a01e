//! Application orchestrator for rhs.
//!
//! This crate ties the panel controller to a terminal host and provides:
//! - `App` - the event loop
//! - `AppState` - the store that owns the panel request and applies actions
//! - `SlideEnvironment` - transition probing and timed completions
//! - `DemoHotkeys` - Alt+key bindings that drive the request
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          rhs (bin)                              │
//! │  main.rs - entry point, terminal setup, App composition         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      rhs-app (this crate)                       │
//! │  App, AppState, SlideEnvironment, DemoHotkeys                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//!                  ┌──────────────────────────┐
//!                  │ rhs-panel  (SidebarRight) │
//!                  └──────────────────────────┘
//! ```

pub mod app;
pub mod environment;
pub mod hotkeys;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use environment::{SlideEnvironment, WIDTH_PROPERTY};
pub use hotkeys::{DemoAction, DemoHotkeys};
pub use state::{AppState, TerminalState};
pub use telemetry::LogTelemetry;
