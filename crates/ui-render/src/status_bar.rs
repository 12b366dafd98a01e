use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use rhs_logger::{LogEntry, LogLevel};

use crate::palette::Palette;
use crate::panel_rendering::truncate_to_width;

/// Status bar rendering parameters
pub struct StatusBarParams<'a> {
    pub palette: &'a Palette,
    /// Requested open state
    pub is_open: bool,
    /// Settled open state
    pub rendered: bool,
    pub expanded: bool,
    /// Label of the selected content, if any
    pub content: Option<&'a str>,
    /// Latest log entry to echo on the right
    pub last_log: Option<&'a LogEntry>,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    /// Render status bar
    pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }

        let palette = params.palette;
        for x in area.left()..area.right() {
            buf[(x, area.top())]
                .set_char(' ')
                .set_style(Style::default().bg(palette.accented_bg));
        }

        let spans = Self::get_status_text(params, area.width);
        let mut x = area.left();
        for span in spans {
            if x >= area.right() {
                break;
            }
            let remaining = (area.right() - x) as usize;
            let text = truncate_to_width(&span.content, remaining);
            buf.set_string(x, area.top(), &text, span.style);
            x = x.saturating_add(text.width() as u16);
        }
    }

    /// Spans for the status line: panel state on the left, log and clock on the right.
    fn get_status_text<'a>(params: &'a StatusBarParams<'a>, total_width: u16) -> Vec<Span<'a>> {
        let palette = params.palette;
        let base_style = Style::default().fg(palette.disabled).bg(palette.accented_bg);
        let highlight_style = Style::default()
            .fg(palette.accented_fg)
            .bg(palette.accented_bg)
            .add_modifier(Modifier::BOLD);

        let state = match (params.is_open, params.rendered) {
            (true, true) => "open",
            (false, false) => "closed",
            (true, false) => "opening",
            (false, true) => "closing",
        };

        let mut spans = vec![
            Span::styled(" Panel: ", base_style),
            Span::styled(state, highlight_style),
        ];
        if params.expanded {
            spans.push(Span::styled(" | ", base_style));
            spans.push(Span::styled("expanded", highlight_style));
        }
        if let Some(content) = params.content {
            spans.push(Span::styled(" | ", base_style));
            spans.push(Span::styled(content, highlight_style));
        }

        let clock = format!(" {} ", Local::now().format("%H:%M"));
        let used_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let mut right = String::new();

        if let Some(entry) = params.last_log {
            let room = (total_width as usize).saturating_sub(used_width + clock.width() + 3);
            let message = format!("{} {}", entry.timestamp, entry.message);
            right = truncate_to_width(&message, room);
        }

        let log_style = match params.last_log.map(|e| e.level) {
            Some(LogLevel::Error) => Style::default()
                .fg(palette.error)
                .bg(palette.accented_bg),
            Some(LogLevel::Warn) => Style::default()
                .fg(palette.warning)
                .bg(palette.accented_bg),
            _ => base_style,
        };

        let padding =
            (total_width as usize).saturating_sub(used_width + right.width() + clock.width());
        if padding > 0 {
            spans.push(Span::styled(" ".repeat(padding), base_style));
        }
        spans.push(Span::styled(right, log_style));
        spans.push(Span::styled(clock, base_style));

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, 0)].symbol())
            .collect()
    }

    fn params<'a>(palette: &'a Palette, last_log: Option<&'a LogEntry>) -> StatusBarParams<'a> {
        StatusBarParams {
            palette,
            is_open: true,
            rendered: false,
            expanded: true,
            content: Some("thread"),
            last_log,
        }
    }

    #[test]
    fn test_panel_state_on_the_left() {
        let palette = Palette::DEFAULT;
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(&mut buf, area, &params(&palette, None));

        let text = row(&buf);
        assert!(text.starts_with(" Panel: opening | expanded | thread"));
    }

    #[test]
    fn test_log_entry_shown() {
        let palette = Palette::DEFAULT;
        let entry = LogEntry {
            timestamp: "12:00:00.000".to_string(),
            level: LogLevel::Info,
            message: "Panel mounted".to_string(),
        };
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(&mut buf, area, &params(&palette, Some(&entry)));

        assert!(row(&buf).contains("12:00:00.000 Panel mounted"));
    }

    #[test]
    fn test_narrow_bar_does_not_overflow() {
        let palette = Palette::DEFAULT;
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::render(&mut buf, area, &params(&palette, None));
        assert_eq!(row(&buf), " Panel: op");
    }
}
