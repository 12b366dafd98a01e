//! Main area to the left of the panel: channel name and key help.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use rhs_core::Channel;

use crate::palette::Palette;

const HELP: [(&str, &str); 13] = [
    ("Alt+T", "open thread"),
    ("Alt+C", "open post card"),
    ("Alt+P", "open plugin view"),
    ("Alt+S", "search"),
    ("Alt+M", "recent mentions"),
    ("Alt+F", "flagged posts"),
    ("Alt+N", "pinned posts"),
    ("Alt+E", "toggle expand"),
    ("Alt+W", "shrink"),
    ("Alt+H", "next channel"),
    ("Alt+R", "next panel channel"),
    ("Alt+/", "search sample term"),
    ("Alt+Q", "quit"),
];

/// Render the main area.
pub fn render_main_area(
    area: Rect,
    buf: &mut Buffer,
    channel: Option<&Channel>,
    toggle_key: char,
    palette: &Palette,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let title = channel
        .map(|c| format!(" ~ {} ", c.display_name))
        .unwrap_or_default();
    let border_style = Style::default().fg(palette.disabled);
    let key_style = Style::default()
        .fg(palette.accented_fg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.fg);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("Ctrl+{:<6}", toggle_key), key_style),
        Span::styled("toggle panel", text_style),
    ])];
    lines.extend(HELP.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("{:<11}", key), key_style),
            Span::styled(*description, text_style),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Click here while expanded to shrink the panel.",
        border_style,
    )));

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
