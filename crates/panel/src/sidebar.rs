//! Lifecycle glue for the right-hand side panel.
//!
//! `SidebarRight` owns the visibility controller, the toggle memory and the
//! last committed request. The host drives it with:
//! - `mount` / `unmount` - acquire and release all listener registrations
//! - `update` - commit a new request; returns actions for the store
//! - `resize`, `transition_finished`, `handle_key` - environment events
//!
//! Events that arrive while unmounted are ignored.

use crossterm::event::KeyEvent;
use rhs_core::{
    ContentVariant, ElementId, ListenTarget, PanelAction, PanelEnvironment, PanelRequest,
    Registration, Snapshot, TelemetrySink,
};
use rhs_keyboard::Shortcut;
use rhs_logger as logger;

use crate::content;
use crate::memory::ToggleMemory;
use crate::visibility::VisibilityController;

const TELEMETRY_CATEGORY: &str = "ui";
const TELEMETRY_OPENED: &str = "ui_rhs_opened";

/// Host capabilities borrowed for the duration of one call.
pub struct PanelCtx<'a> {
    pub env: &'a mut dyn PanelEnvironment,
    pub telemetry: &'a mut dyn TelemetrySink,
}

/// Props handed to the search box region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxProps {
    /// Whether the search input should take focus
    pub is_focus: bool,
    pub is_side_bar_right: bool,
    /// Settled open state, for entrance styling
    pub is_side_bar_right_open: bool,
    pub channel_display_name: String,
}

/// Everything the view layer needs to draw the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub content: Option<ContentVariant>,
    /// Expanded width in effect
    pub expanded: bool,
    /// Panel slid into view (follows the request, not the settled state)
    pub move_left: bool,
    pub search: SearchBoxProps,
}

#[derive(Debug)]
pub struct SidebarRight {
    visibility: VisibilityController,
    memory: ToggleMemory,
    request: PanelRequest,
    /// Resize and key-down registrations held while mounted
    listeners: Vec<Registration>,
    mounted: bool,
    focus_search: bool,
}

impl SidebarRight {
    pub fn new(request: PanelRequest, shortcut: Shortcut) -> Self {
        Self {
            visibility: VisibilityController::new(),
            memory: ToggleMemory::new(shortcut),
            request,
            listeners: Vec::new(),
            mounted: false,
            focus_search: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Last committed request.
    pub fn request(&self) -> &PanelRequest {
        &self.request
    }

    /// Settled open state.
    pub fn rendered(&self) -> bool {
        self.visibility.rendered()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.memory.snapshot()
    }

    /// Number of registrations currently held, transition listener included.
    pub fn active_listeners(&self) -> usize {
        self.listeners.len() + usize::from(self.visibility.is_listening())
    }

    /// Attach to the rendered element and register global listeners.
    ///
    /// Mounting twice is a no-op.
    pub fn mount(&mut self, element: Option<ElementId>, ctx: &mut PanelCtx<'_>) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        self.listeners.push(ctx.env.listen(ListenTarget::Resize));
        self.listeners.push(ctx.env.listen(ListenTarget::KeyDown));
        self.visibility
            .on_mount(element, self.request.is_open, &mut *ctx.env);
        self.memory.observe(&self.request);

        logger::debug(format!(
            "rhs: mounted (open: {}, rendered: {})",
            self.request.is_open,
            self.visibility.rendered()
        ));
    }

    /// Release every registration. Safe to call repeatedly.
    pub fn unmount(&mut self, env: &mut dyn PanelEnvironment) {
        for registration in self.listeners.drain(..) {
            env.unlisten(registration);
        }
        self.visibility.on_unmount(env);

        if self.mounted {
            logger::debug("rhs: unmounted");
        }
        self.mounted = false;
    }

    /// Commit a new request and return the actions it triggers.
    pub fn update(&mut self, request: PanelRequest, ctx: &mut PanelCtx<'_>) -> Vec<PanelAction> {
        let prev = std::mem::replace(&mut self.request, request);
        let current = &self.request;
        let mut actions = Vec::new();

        if self.mounted && prev.is_open != current.is_open {
            self.visibility
                .determine_transition(current.is_open, &mut *ctx.env);

            if current.is_open {
                ctx.telemetry
                    .track_event(TELEMETRY_CATEGORY, TELEMETRY_OPENED);
            }
        }

        // Pinned posts follow the panel channel.
        if current.is_pinned_posts
            && prev.is_pinned_posts
            && current.rhs_channel_id() != prev.rhs_channel_id()
        {
            if let Some(id) = current.rhs_channel_id() {
                actions.push(PanelAction::ShowPinnedPosts(Some(id.to_string())));
            }
        }

        // Switching the centre channel collapses the expanded panel.
        if let (Some(channel), Some(prev_channel)) = (&current.channel, &prev.channel) {
            if channel.id != prev_channel.id {
                actions.push(PanelAction::SetExpanded(false));
            }
        }

        self.memory.observe(&self.request);
        actions
    }

    /// Window resized: probe the transition again, open or not.
    pub fn resize(&mut self, env: &mut dyn PanelEnvironment) {
        if !self.mounted {
            return;
        }
        self.visibility.on_resize(self.request.is_open, env);
    }

    /// A transition of `property` finished on `element`.
    ///
    /// Returns true when the settled state changed.
    pub fn transition_finished(&mut self, element: ElementId, property: &str) -> bool {
        if !self.mounted || self.visibility.element() != Some(element) {
            return false;
        }

        let changed = self
            .visibility
            .on_transition_finished(property, self.request.is_open);
        if changed {
            logger::debug(format!(
                "rhs: {} settled, rendered = {}",
                property,
                self.visibility.rendered()
            ));
        }
        changed
    }

    /// Global key-down handler.
    ///
    /// Some means the key was the toggle shortcut and must not be handled
    /// further.
    pub fn handle_key(&self, key: &KeyEvent) -> Option<PanelAction> {
        if !self.mounted {
            return None;
        }
        self.memory.on_shortcut(key, self.request.is_open)
    }

    /// Collapse the expanded width.
    pub fn shrink(&self) -> PanelAction {
        PanelAction::SetExpanded(false)
    }

    /// Replace the search terms and ask the search box for focus.
    pub fn update_search_terms(&mut self, term: impl Into<String>) -> PanelAction {
        self.focus_search = true;
        PanelAction::UpdateSearchTerms(term.into())
    }

    /// Consume a pending focus request from `update_search_terms`.
    pub fn take_search_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_search)
    }

    pub fn view(&self) -> SidebarView {
        let request = &self.request;
        SidebarView {
            content: content::select_content(request),
            expanded: content::expanded(request),
            move_left: request.is_open,
            search: SearchBoxProps {
                is_focus: request.search_visible
                    && !request.is_flagged_posts
                    && !request.is_pinned_posts,
                is_side_bar_right: true,
                is_side_bar_right_open: self.visibility.rendered(),
                channel_display_name: request
                    .rhs_channel
                    .as_ref()
                    .map(|c| c.display_name.clone())
                    .unwrap_or_default(),
            },
        }
    }
}
