//! Actions emitted by the panel and content it selects.

use crate::request::Snapshot;

/// Actions the panel asks the state layer to perform.
///
/// The panel never mutates upstream state directly; it returns these
/// and the application applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Expand or shrink the panel width
    SetExpanded(bool),

    /// Show pinned posts for a channel
    ShowPinnedPosts(Option<String>),

    /// Open the panel on the search view
    OpenSearch,

    /// Close the panel
    ClosePanel,

    /// Reopen the panel at a remembered sub-view.
    ///
    /// `None` when nothing was remembered; the state layer falls back
    /// to its default open view.
    OpenAtPrevious(Option<Snapshot>),

    /// Replace the search terms
    UpdateSearchTerms(String),
}

/// Content variant shown inside the panel body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentVariant {
    /// Full conversation thread
    Thread {
        previous_rhs_state: Option<String>,
        current_user_id: String,
    },
    /// Single post card
    Card { previous_rhs_state: Option<String> },
    /// Plugin-supplied view
    Plugin,
}

impl ContentVariant {
    /// Short label for headers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ContentVariant::Thread { .. } => "thread",
            ContentVariant::Card { .. } => "card",
            ContentVariant::Plugin => "plugin",
        }
    }
}
