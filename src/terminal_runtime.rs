use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns raw mode, the alternate screen and mouse capture for one session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    mouse_capture: bool,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen, optionally captures
    /// the mouse for swipe input, and creates a ratatui terminal.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let entered = if mouse_capture {
            execute!(stdout, EnterAlternateScreen, Hide, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen, Hide)
        };
        if let Err(error) = entered {
            let _ = cleanup_terminal_best_effort(mouse_capture);
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort(mouse_capture);
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort(self.mouse_capture);
    }
}

/// Restores the terminal; also used from the panic hook.
pub fn cleanup_terminal_best_effort(mouse_capture: bool) -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_capture {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    execute!(stdout, Show, LeaveAlternateScreen)
}
