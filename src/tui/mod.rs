//! Shiftdeck TUI Module
//!
//! Terminal interface for the shift scheduling app: browse open shifts,
//! manage the personal schedule, review bookings and wallet activity, and
//! tweak search filters.

pub mod app;
pub mod components;
pub mod events;
pub mod logger;
pub mod screens;
pub mod ui;

pub use app::{App, AppState, Route};
pub use events::{Event, EventHandler};
pub use ui::render_ui;

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::Error;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Global flag to track if terminal cleanup is needed
static TERMINAL_NEEDS_CLEANUP: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal for TUI mode
///
/// Sets up the terminal with alternate screen and raw mode, and tracks that
/// cleanup will be needed.
pub fn init_terminal() -> Result<TuiTerminal, Error> {
    enable_raw_mode().map_err(Error::Io)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(Error::Io)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(Error::Io)?;

    terminal.hide_cursor().map_err(Error::Io)?;

    TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);

    Ok(terminal)
}

/// Restore the terminal to normal mode
///
/// Disables raw mode, leaves alternate screen, and shows cursor.
/// Safe to call multiple times.
pub fn restore_terminal(terminal: &mut TuiTerminal) -> Result<(), Error> {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        disable_raw_mode().map_err(Error::Io)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(Error::Io)?;
        terminal.show_cursor().map_err(Error::Io)?;

        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
    Ok(())
}

/// Emergency terminal cleanup for panic situations
///
/// Performs basic terminal restoration without error handling so the
/// terminal comes back even during panics.
fn emergency_terminal_cleanup() {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), cursor::Show);
        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
}

/// Setup panic handler for graceful terminal restoration
pub fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        emergency_terminal_cleanup();
        original_hook(panic_info);
    }));
}

/// Main TUI application entry point
///
/// Handles terminal initialization and cleanup, the panic hook, the main
/// application loop, and graceful shutdown.
pub async fn run_tui(mut app: App) -> Result<(), Error> {
    setup_panic_handler();
    logger::init_logger();

    let mut terminal = init_terminal().map_err(|e| {
        emergency_terminal_cleanup();
        e
    })?;

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut event_handler = EventHandler::new(tick_rate);

    logger::log_info("shiftdeck started");
    app.set_status("Shiftdeck - press 'q' to quit".to_string());

    let app_result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    event_handler.close();

    // Always attempt to restore the terminal, even if the loop errored
    if let Err(restore_error) = restore_terminal(&mut terminal) {
        if app_result.is_ok() {
            return Err(restore_error);
        }
        eprintln!("Warning: Failed to restore terminal: {}", restore_error);
    }

    app_result
}

/// Internal application loop
async fn run_app_loop(
    terminal: &mut TuiTerminal,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<(), Error> {
    loop {
        terminal
            .draw(|frame| render_ui(frame, app))
            .map_err(Error::Io)?;

        match event_handler.next().await {
            Some(event) => {
                if let Err(e) = app.handle_event(event) {
                    logger::log_error(&format!("event handling error: {}", e));
                    app.set_status(format!("Error: {}", e));
                }
            }
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Quick terminal check
///
/// Verifies that the terminal supports the required features before
/// initializing the full TUI, for better error messages.
pub fn check_terminal_support() -> Result<(), Error> {
    let (width, height) = crossterm::terminal::size().map_err(Error::Io)?;

    if width < 80 || height < 24 {
        return Err(Error::Terminal(format!(
            "Terminal too small: {}x{} (minimum: 80x24)",
            width, height
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_terminal_needs_cleanup_flag() {
        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
        assert!(!TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst));

        TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);
        assert!(TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst));

        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }

    #[test]
    fn test_emergency_cleanup_resets_flag() {
        TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);
        emergency_terminal_cleanup();
        assert!(!TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst));
    }

    #[test]
    fn test_panic_handler_setup() {
        // Just verify installation does not itself panic
        setup_panic_handler();
    }
}
