use ratatui::style::Color;

/// Colors used by all renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accented_bg: Color,
    pub accented_fg: Color,
    pub disabled: Color,
    pub selected_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        bg: Color::Reset,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        disabled: Color::Gray,
        selected_bg: Color::Blue,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
