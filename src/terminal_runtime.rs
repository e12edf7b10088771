use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Result;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Keeps raw mode on while alive.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Keeps the alternate screen active, with the cursor hidden, while alive.
struct AlternateScreen;

impl AlternateScreen {
    fn enter() -> io::Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for AlternateScreen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    }
}

/// Terminal owned by one game session.
///
/// Field order is teardown order: the screen is left before raw mode is
/// switched off. A failure halfway through `enter` unwinds whatever layers
/// were already set up.
pub struct TerminalSession {
    terminal: AppTerminal,
    _screen: AlternateScreen,
    _raw_mode: RawMode,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let raw_mode = RawMode::enable()?;
        let screen = AlternateScreen::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        Ok(Self {
            terminal,
            _screen: screen,
            _raw_mode: raw_mode,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

/// Chains a panic hook that hands the terminal back before the default
/// report prints. The session guards only run after the report, too late for
/// a readable message.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        default_hook(panic_info);
    }));
}
