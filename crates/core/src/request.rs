//! Upstream request types.
//!
//! A `PanelRequest` is what the state layer hands to the panel on every
//! update cycle. The panel never mutates it; it reacts by emitting
//! `PanelAction`s.

/// Minimal channel identity used by the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub display_name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Logical state requested for the right-hand side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelRequest {
    /// Logical open/closed request
    pub is_open: bool,
    /// Width expansion request, independent of open/closed
    pub is_expanded: bool,

    // === Sub-view flags ===
    pub search_visible: bool,
    pub is_mention_search: bool,
    pub is_flagged_posts: bool,
    pub is_pinned_posts: bool,
    pub is_plugin_view: bool,
    pub post_right_visible: bool,
    pub post_card_visible: bool,

    // === Sub-view identity (opaque to the panel) ===
    pub selected_post_id: Option<String>,
    pub selected_post_card_id: Option<String>,
    pub previous_rhs_state: Option<String>,

    // === Context ===
    pub current_user_id: String,
    /// Channel shown in the centre view
    pub channel: Option<Channel>,
    /// Channel the panel content is bound to
    pub rhs_channel: Option<Channel>,
}

impl PanelRequest {
    /// Capture the sub-view fields of this request.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            search_visible: self.search_visible,
            is_mention_search: self.is_mention_search,
            is_pinned_posts: self.is_pinned_posts,
            is_flagged_posts: self.is_flagged_posts,
            selected_post_id: self.selected_post_id.clone(),
            selected_post_card_id: self.selected_post_card_id.clone(),
            previous_rhs_state: self.previous_rhs_state.clone(),
        }
    }

    /// Channel id of the panel-bound channel, if any.
    pub fn rhs_channel_id(&self) -> Option<&str> {
        self.rhs_channel.as_ref().map(|c| c.id.as_str())
    }
}

/// Sub-view configuration remembered while the panel was open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub search_visible: bool,
    pub is_mention_search: bool,
    pub is_pinned_posts: bool,
    pub is_flagged_posts: bool,
    pub selected_post_id: Option<String>,
    pub selected_post_card_id: Option<String>,
    pub previous_rhs_state: Option<String>,
}
