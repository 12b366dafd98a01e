//! Content selection for the panel body.
//!
//! `CONTENT_PRIORITY` is a total order evaluated top to bottom; the first
//! matching rule wins even when several flags are set at once.

use rhs_core::{ContentVariant, PanelRequest};

/// Kind of content a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Thread,
    Card,
    Plugin,
}

pub type Rule = (fn(&PanelRequest) -> bool, ContentKind);

fn thread_visible(request: &PanelRequest) -> bool {
    request.post_right_visible
}

fn card_visible(request: &PanelRequest) -> bool {
    request.post_card_visible
}

fn plugin_view(request: &PanelRequest) -> bool {
    request.is_plugin_view
}

/// Selection rules, highest priority first.
pub const CONTENT_PRIORITY: [Rule; 3] = [
    (thread_visible, ContentKind::Thread),
    (card_visible, ContentKind::Card),
    (plugin_view, ContentKind::Plugin),
];

/// Pick the content variant for a request, or None for header/search only.
pub fn select_content(request: &PanelRequest) -> Option<ContentVariant> {
    let kind = CONTENT_PRIORITY
        .iter()
        .find(|(matches, _)| matches(request))
        .map(|(_, kind)| *kind)?;

    Some(match kind {
        ContentKind::Thread => ContentVariant::Thread {
            previous_rhs_state: request.previous_rhs_state.clone(),
            current_user_id: request.current_user_id.clone(),
        },
        ContentKind::Card => ContentVariant::Card {
            previous_rhs_state: request.previous_rhs_state.clone(),
        },
        ContentKind::Plugin => ContentVariant::Plugin,
    })
}

/// Whether the expanded width should be shown.
///
/// Expansion only has an effect while some content or search is shown.
pub fn expanded(request: &PanelRequest) -> bool {
    let has_content = request.post_right_visible
        || request.post_card_visible
        || request.is_plugin_view
        || request.search_visible;
    has_content && request.is_expanded
}
