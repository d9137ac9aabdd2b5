//! Status Bar Component
//!
//! Bottom status bar with the current action status, loading indicator, and
//! context-sensitive keyboard shortcuts.

use crate::fetch::ScreenState;
use crate::tui::app::{AppState, Route};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the status bar component
pub fn render_status_bar(f: &mut Frame, app_state: &AppState, area: Rect) {
    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Status/message area
            Constraint::Percentage(50), // Help/shortcuts area
        ])
        .split(area);

    render_status_section(f, app_state, status_chunks[0]);
    render_help_section(f, app_state, status_chunks[1]);
}

/// Render the status/message section
fn render_status_section(f: &mut Frame, app_state: &AppState, area: Rect) {
    if route_is_loading(app_state) {
        let loading_text = Paragraph::new("⏳ Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title("Status"),
            );
        f.render_widget(loading_text, area);
        return;
    }

    let message = app_state.status_message.clone().unwrap_or_else(|| {
        format!("Ready | Screen: {}", app_state.route.display_name())
    });

    let status_text = Paragraph::new(message)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Status"),
        );
    f.render_widget(status_text, area);
}

/// Whether the active route has a fetch in flight
fn route_is_loading(app_state: &AppState) -> bool {
    match app_state.route {
        Route::Home => app_state.home.state.is_loading(),
        Route::Shifts => app_state.shifts.state.is_loading(),
        Route::ShiftDetails(_) => app_state.shift_details.state.is_loading(),
        Route::Schedule => app_state.schedule.state.is_loading(),
        Route::ScheduleDetails(_) => app_state.schedule_details.state.is_loading(),
        _ => false,
    }
}

/// Render the help/shortcuts section
fn render_help_section(f: &mut Frame, app_state: &AppState, area: Rect) {
    let help = Paragraph::new(get_context_help(app_state))
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Help"),
        );
    f.render_widget(help, area);
}

/// Context-sensitive help text for the active route
fn get_context_help(app_state: &AppState) -> String {
    let base_help = "Tab:Next | 1-4:Jump | q:Quit";

    let screen_help = match app_state.route {
        Route::Home => "↑↓:Panel | ←→:Point | Enter:Select | c:Chart | r:Refresh",
        Route::Shifts => "↑↓:Select | Enter:Details | f:Favorite | o:Filters",
        Route::ShiftDetails(_) => "b:Book | f:Favorite | Esc:Back",
        Route::Schedule => "←→:Tab | ↑↓:Select | Enter:Details | f:Favorite",
        Route::ScheduleDetails(_) => "Esc:Back | r:Refresh",
        Route::Bookings => "←→:Tab | ↑↓:Select | Esc:Back",
        Route::Filters => "↑↓:Section | ←→:Option | Enter:Pick | a:Apply | x:Reset",
        Route::Wallet => "Esc:Back",
        Route::Profile => "↑↓:Select | Enter:Open",
    };

    format!("{} | {}", base_help, screen_help)
}

/// Loading indicator character based on time (for animation)
pub fn get_loading_indicator(time_ms: u64) -> char {
    let indicators = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let index = (time_ms / 100) % indicators.len() as u64;
    indicators[index as usize]
}

/// Used by the status section when a screen state is at hand
pub fn state_label<T>(state: &ScreenState<T>) -> &'static str {
    if state.is_refreshing() {
        "Refreshing"
    } else if state.is_loading() {
        "Loading"
    } else if state.is_not_found() {
        "Not found"
    } else {
        "Ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_loading_indicator() {
        assert_eq!(get_loading_indicator(0), '⠋');
        assert_eq!(get_loading_indicator(100), '⠙');
        assert_eq!(get_loading_indicator(1000), '⠋'); // Should cycle back
    }

    #[test]
    fn test_state_label() {
        let state: ScreenState<()> = ScreenState::NotFound;
        assert_eq!(state_label(&state), "Not found");
        let state: ScreenState<()> = ScreenState::Loaded(());
        assert_eq!(state_label(&state), "Ready");
    }
}
