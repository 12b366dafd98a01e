//! Right-hand side panel rendering.
//!
//! Draws the header with the search box, then the selected content variant.
//! When no content is selected the body names the active sub-view instead.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use rhs_core::{ContentVariant, PanelRequest};
use rhs_panel::SidebarView;

use crate::palette::Palette;

/// Parameters for rendering the panel.
#[derive(Clone, Copy)]
pub struct PanelRenderParams<'a> {
    pub view: &'a SidebarView,
    pub request: &'a PanelRequest,
    pub search_terms: &'a str,
    /// Search input focus held by the app
    pub search_focused: bool,
    pub palette: &'a Palette,
}

/// Truncate `text` to at most `max_width` display columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|ch| {
            width += ch.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

/// Render the panel into `area`.
pub fn render_panel(area: Rect, buf: &mut Buffer, params: &PanelRenderParams<'_>) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let palette = params.palette;
    let view = params.view;

    // Dimmed until the slide settles
    let border_style = if view.search.is_side_bar_right_open {
        Style::default()
            .fg(palette.accented_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.disabled)
    };

    let mut title = format!(" {} ", view.search.channel_display_name);
    if view.expanded {
        title.push_str("[expanded] ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, border_style));

    let inner = block.inner(area);
    block.render(area, buf);

    let clear_style = Style::default().bg(palette.bg);
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            buf[(x, y)].reset();
            buf[(x, y)].set_style(clear_style);
        }
    }
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let width = inner.width as usize;
    render_search_box(inner, buf, params);

    if inner.height > 1 {
        let separator = "─".repeat(width);
        buf.set_string(
            inner.x,
            inner.y + 1,
            separator,
            Style::default().fg(palette.disabled),
        );
    }

    let body_style = Style::default().fg(palette.fg);
    let accent_style = Style::default()
        .fg(palette.accented_fg)
        .add_modifier(Modifier::BOLD);

    for (i, (line, is_heading)) in body_lines(params).into_iter().enumerate() {
        let y = inner.y + 2 + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let style = if is_heading { accent_style } else { body_style };
        buf.set_string(inner.x, y, truncate_to_width(&line, width), style);
    }
}

fn render_search_box(inner: Rect, buf: &mut Buffer, params: &PanelRenderParams<'_>) {
    let palette = params.palette;
    let focused = params.search_focused || params.view.search.is_focus;

    let mut text = format!(" Search: {}", params.search_terms);
    if params.search_focused {
        text.push('_');
    }

    let style = if focused {
        Style::default().fg(palette.fg).bg(palette.selected_bg)
    } else {
        Style::default().fg(palette.disabled)
    };

    for x in inner.left()..inner.right() {
        buf[(x, inner.y)].set_char(' ').set_style(style);
    }
    buf.set_string(
        inner.x,
        inner.y,
        truncate_to_width(&text, inner.width as usize),
        style,
    );
}

/// Body lines with a heading flag.
fn body_lines(params: &PanelRenderParams<'_>) -> Vec<(String, bool)> {
    let request = params.request;
    let mut lines = Vec::new();

    match &params.view.content {
        Some(ContentVariant::Thread {
            previous_rhs_state,
            current_user_id,
        }) => {
            lines.push(("Thread".to_string(), true));
            if let Some(post_id) = &request.selected_post_id {
                lines.push((format!("Root post: {}", post_id), false));
            }
            lines.push((format!("Viewing as {}", current_user_id), false));
            if let Some(previous) = previous_rhs_state {
                lines.push((format!("< Back to {}", previous), false));
            }
        }
        Some(ContentVariant::Card { previous_rhs_state }) => {
            lines.push(("Post card".to_string(), true));
            if let Some(card_id) = &request.selected_post_card_id {
                lines.push((format!("Post: {}", card_id), false));
            }
            if let Some(previous) = previous_rhs_state {
                lines.push((format!("< Back to {}", previous), false));
            }
        }
        Some(ContentVariant::Plugin) => {
            lines.push(("Plugin view".to_string(), true));
        }
        None => {
            let heading = if request.is_mention_search {
                Some("Recent mentions".to_string())
            } else if request.is_flagged_posts {
                Some("Flagged posts".to_string())
            } else if request.is_pinned_posts {
                Some(format!(
                    "Pinned posts in {}",
                    params.view.search.channel_display_name
                ))
            } else if request.search_visible {
                Some("Search results".to_string())
            } else {
                None
            };
            lines.extend(heading.map(|h| (h, true)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhs_panel::SearchBoxProps;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn view(content: Option<ContentVariant>) -> SidebarView {
        SidebarView {
            content,
            expanded: false,
            move_left: true,
            search: SearchBoxProps {
                is_focus: false,
                is_side_bar_right: true,
                is_side_bar_right_open: true,
                channel_display_name: "Town Square".to_string(),
            },
        }
    }

    fn render(view: &SidebarView, request: &PanelRequest) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let params = PanelRenderParams {
            view,
            request,
            search_terms: "from:alice",
            search_focused: false,
            palette: &Palette::DEFAULT,
        };
        let area = buf.area;
        render_panel(area, &mut buf, &params);
        buf
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_thread_content() {
        let view = view(Some(ContentVariant::Thread {
            previous_rhs_state: Some("search".into()),
            current_user_id: "me".into(),
        }));
        let request = PanelRequest {
            selected_post_id: Some("post-1".into()),
            ..Default::default()
        };

        let buf = render(&view, &request);
        assert!(row(&buf, 0).contains("Town Square"));
        assert!(row(&buf, 1).contains("Search: from:alice"));
        assert!(row(&buf, 3).contains("Thread"));
        assert!(row(&buf, 4).contains("Root post: post-1"));
        assert!(row(&buf, 6).contains("Back to search"));
    }

    #[test]
    fn test_sub_view_heading_without_content() {
        let view = view(None);
        let request = PanelRequest {
            search_visible: true,
            is_pinned_posts: true,
            ..Default::default()
        };

        let buf = render(&view, &request);
        assert!(row(&buf, 3).contains("Pinned posts in Town Square"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let view = view(Some(ContentVariant::Plugin));
        let request = PanelRequest::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
        let params = PanelRenderParams {
            view: &view,
            request: &request,
            search_terms: "",
            search_focused: true,
            palette: &Palette::DEFAULT,
        };
        let area = buf.area;
        render_panel(area, &mut buf, &params);
    }
}
