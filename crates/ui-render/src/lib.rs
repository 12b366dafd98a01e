//! UI rendering components for rhs.
//!
//! Pure buffer renderers for the main area, the right-hand side panel and
//! the status bar. None of them hold state; the caller passes everything
//! needed for one frame.

pub mod main_area;
pub mod palette;
pub mod panel_rendering;
pub mod status_bar;

pub use main_area::render_main_area;
pub use palette::Palette;
pub use panel_rendering::{render_panel, truncate_to_width, PanelRenderParams};
pub use status_bar::{StatusBar, StatusBarParams};
