//! Application state and the store that applies panel actions.
//!
//! `AppState` owns the upstream `PanelRequest`. The panel only ever sees
//! committed copies of it and asks for changes through `PanelAction`.

use rhs_config::Config;
use rhs_core::{Channel, PanelAction, PanelRequest, Snapshot};
use rhs_logger as logger;

const SAMPLE_TERMS: [&str; 3] = ["from:alice", "in:town-square", "\"release notes\""];

/// Terminal dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalState {
    pub width: u16,
    pub height: u16,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Upstream request for the panel
    pub request: PanelRequest,
    /// Current search box contents
    pub search_terms: String,
    /// Search box holds input focus
    pub search_focused: bool,
    pub should_quit: bool,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    pub terminal: TerminalState,
    channels: Vec<Channel>,
    channel_idx: usize,
    rhs_channel_idx: usize,
    post_counter: u32,
    term_idx: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let channels = vec![
            Channel::new("town-square", "Town Square"),
            Channel::new("off-topic", "Off-Topic"),
            Channel::new("dev", "Developers"),
        ];
        let request = PanelRequest {
            current_user_id: "me".to_string(),
            channel: channels.first().cloned(),
            rhs_channel: channels.first().cloned(),
            ..Default::default()
        };

        Self {
            config,
            request,
            search_terms: String::new(),
            search_focused: false,
            should_quit: false,
            needs_redraw: true,
            terminal: TerminalState::default(),
            channels,
            channel_idx: 0,
            rhs_channel_idx: 0,
            post_counter: 0,
            term_idx: 0,
        }
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal.width = width;
        self.terminal.height = height;
    }

    /// Apply one action from the panel.
    pub fn apply(&mut self, action: PanelAction) {
        logger::debug(format!("store: {:?}", action));

        match action {
            PanelAction::SetExpanded(expanded) => {
                self.request.is_expanded = expanded;
            }
            PanelAction::ShowPinnedPosts(channel_id) => {
                self.open_sub_view(|r| {
                    r.search_visible = true;
                    r.is_pinned_posts = true;
                });
                if let Some(id) = channel_id {
                    logger::info(format!("Showing pinned posts of {}", id));
                }
            }
            PanelAction::OpenSearch => {
                self.open_sub_view(|r| r.search_visible = true);
            }
            PanelAction::ClosePanel => {
                self.clear_sub_view();
                self.request.is_open = false;
                self.request.is_expanded = false;
            }
            PanelAction::OpenAtPrevious(snapshot) => match snapshot {
                Some(snapshot) => self.restore(snapshot),
                None => self.apply(PanelAction::OpenSearch),
            },
            PanelAction::UpdateSearchTerms(terms) => {
                self.search_terms = terms;
                if !self.request.is_open {
                    self.apply(PanelAction::OpenSearch);
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Reopen the panel at a remembered sub-view.
    ///
    /// Sub-views are tried in a fixed order and the first one present in
    /// the snapshot wins.
    fn restore(&mut self, snapshot: Snapshot) {
        let previous = snapshot.previous_rhs_state.clone();

        if snapshot.is_mention_search {
            self.open_sub_view(|r| {
                r.search_visible = true;
                r.is_mention_search = true;
            });
        } else if snapshot.is_pinned_posts {
            let channel_id = self.request.rhs_channel_id().map(str::to_string);
            self.apply(PanelAction::ShowPinnedPosts(channel_id));
        } else if snapshot.is_flagged_posts {
            self.open_sub_view(|r| {
                r.search_visible = true;
                r.is_flagged_posts = true;
            });
        } else if let Some(post_id) = snapshot.selected_post_id {
            self.open_sub_view(|r| {
                r.post_right_visible = true;
                r.selected_post_id = Some(post_id);
                r.previous_rhs_state = previous;
            });
        } else if let Some(card_id) = snapshot.selected_post_card_id {
            self.open_sub_view(|r| {
                r.post_card_visible = true;
                r.selected_post_card_id = Some(card_id);
                r.previous_rhs_state = previous;
            });
        } else {
            self.apply(PanelAction::OpenSearch);
        }
    }

    /// Open a thread for a fresh post id.
    pub fn show_thread(&mut self) {
        self.post_counter += 1;
        let post_id = format!("post-{}", self.post_counter);
        let previous = self.previous_state();
        self.open_sub_view(|r| {
            r.post_right_visible = true;
            r.selected_post_id = Some(post_id);
            r.previous_rhs_state = previous;
        });
    }

    /// Open a card for a fresh post id.
    pub fn show_card(&mut self) {
        self.post_counter += 1;
        let card_id = format!("card-{}", self.post_counter);
        let previous = self.previous_state();
        self.open_sub_view(|r| {
            r.post_card_visible = true;
            r.selected_post_card_id = Some(card_id);
            r.previous_rhs_state = previous;
        });
    }

    pub fn show_plugin(&mut self) {
        self.open_sub_view(|r| r.is_plugin_view = true);
    }

    pub fn show_mentions(&mut self) {
        self.open_sub_view(|r| {
            r.search_visible = true;
            r.is_mention_search = true;
        });
    }

    pub fn show_flagged(&mut self) {
        self.open_sub_view(|r| {
            r.search_visible = true;
            r.is_flagged_posts = true;
        });
    }

    pub fn toggle_expand(&mut self) {
        self.request.is_expanded = !self.request.is_expanded;
    }

    /// Switch the centre channel. Collapsing follows from the panel.
    pub fn next_channel(&mut self) {
        self.channel_idx = (self.channel_idx + 1) % self.channels.len();
        self.request.channel = self.channels.get(self.channel_idx).cloned();
    }

    /// Rebind panel content to the next channel.
    pub fn next_rhs_channel(&mut self) {
        self.rhs_channel_idx = (self.rhs_channel_idx + 1) % self.channels.len();
        self.request.rhs_channel = self.channels.get(self.rhs_channel_idx).cloned();
    }

    /// Next sample search term, cycling.
    pub fn next_search_term(&mut self) -> String {
        let term = SAMPLE_TERMS[self.term_idx % SAMPLE_TERMS.len()];
        self.term_idx += 1;
        term.to_string()
    }

    /// Name of the sub-view a thread or card was opened from.
    fn previous_state(&self) -> Option<String> {
        let request = &self.request;
        if !request.is_open {
            None
        } else if request.is_mention_search {
            Some("mention".to_string())
        } else if request.is_pinned_posts {
            Some("pin".to_string())
        } else if request.is_flagged_posts {
            Some("flag".to_string())
        } else if request.search_visible {
            Some("search".to_string())
        } else {
            None
        }
    }

    fn clear_sub_view(&mut self) {
        let r = &mut self.request;
        r.search_visible = false;
        r.is_mention_search = false;
        r.is_flagged_posts = false;
        r.is_pinned_posts = false;
        r.is_plugin_view = false;
        r.post_right_visible = false;
        r.post_card_visible = false;
        r.selected_post_id = None;
        r.selected_post_card_id = None;
        r.previous_rhs_state = None;
    }

    fn open_sub_view(&mut self, set: impl FnOnce(&mut PanelRequest)) {
        self.clear_sub_view();
        self.request.is_open = true;
        set(&mut self.request);
    }
}
