//! Right-hand side panel controller.
//!
//! Three cooperating pieces plus lifecycle glue:
//! - `VisibilityController` - settles the rendered open state against
//!   slide transitions
//! - `ToggleMemory` - remembers the sub-view shown while open so the
//!   toggle shortcut can reopen into it
//! - `content` - pure selection of the content variant and expansion flag
//! - `SidebarRight` - wires the above to mount, update, resize, key and
//!   transition events
//!
//! ```text
//! PanelRequest ──► SidebarRight::update ──► Vec<PanelAction> ──► store
//!                     │        │
//!            VisibilityController  ToggleMemory::observe
//!                     ▲
//!   resize / transition end / key down (PanelEnvironment registrations)
//! ```

pub mod content;
pub mod memory;
pub mod sidebar;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use content::{expanded, select_content, ContentKind, CONTENT_PRIORITY};
pub use memory::ToggleMemory;
pub use sidebar::{PanelCtx, SearchBoxProps, SidebarRight, SidebarView};
pub use visibility::VisibilityController;
