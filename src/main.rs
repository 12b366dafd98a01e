mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use rhs_app::App;
use rhs_config::{constants, get_data_dir, Config};
use rhs_logger::LogLevel;

fn init_logging(config: &Config) {
    let file_path = match &config.logging.file_path {
        Some(path) => Some(PathBuf::from(path)),
        None => get_data_dir()
            .map(|dir| dir.join(constants::LOG_FILE_NAME))
            .ok(),
    };
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);

    rhs_logger::init(file_path, constants::MAX_LOG_ENTRIES, min_level);
    rhs_logger::info("Application started");
}

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {}. Using defaults.", e);
        Config::default()
    });
    init_logging(&config);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Ctrl+. only reaches us with the kitty keyboard protocol
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        )?;
    } else {
        rhs_logger::warn("Keyboard enhancement unsupported; Ctrl+key shortcuts may not arrive");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config, size.width, size.height);

    let result = app.run(&mut terminal, ui::render);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        rhs_logger::error(format!("Fatal: {:?}", err));
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
