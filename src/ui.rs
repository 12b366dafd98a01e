use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use rhs_app::App;
use rhs_ui_render::{
    render_main_area, render_panel, Palette, PanelRenderParams, StatusBar, StatusBarParams,
};

/// Render the main area, the sliding panel and the status bar
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let palette = Palette::DEFAULT;
    let state = app.state();
    let view = app.view();

    let background = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(background, size);

    // Split screen into content area and status bar (1 line)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    // Panel slides in from the right edge
    let panel_width = app.panel_width().min(rows[0].width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(panel_width)])
        .split(rows[0]);

    render_main_area(
        columns[0],
        frame.buffer_mut(),
        state.request.channel.as_ref(),
        state.config.general.toggle_key,
        &palette,
    );

    if panel_width > 0 {
        let params = PanelRenderParams {
            view: &view,
            request: &state.request,
            search_terms: &state.search_terms,
            search_focused: state.search_focused,
            palette: &palette,
        };
        render_panel(columns[1], frame.buffer_mut(), &params);
    }

    let last_log = rhs_logger::last_entry();
    let status = StatusBarParams {
        palette: &palette,
        is_open: state.request.is_open,
        rendered: app.sidebar().rendered(),
        expanded: view.expanded,
        content: view.content.as_ref().map(|c| c.label()),
        last_log: last_log.as_ref(),
    };
    StatusBar::render(frame.buffer_mut(), rows[1], &status);
}
