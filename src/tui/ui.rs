//! UI Rendering Logic
//!
//! Coordinates rendering of the active screen and guards against terminals
//! too small to lay the screens out.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::{App, Route};
use crate::tui::screens;

/// Minimum terminal size the layouts are designed for
const MIN_WIDTH: u16 = 80;
const MIN_HEIGHT: u16 = 24;

/// Main UI rendering function
pub fn render_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_size_warning(frame, size);
        return;
    }

    match app.state.route {
        Route::Home => screens::home::render_home(frame, app),
        Route::Shifts => screens::shifts::render_shifts(frame, app),
        Route::ShiftDetails(_) => screens::shift_details::render_shift_details(frame, app),
        Route::Schedule => screens::schedule::render_schedule(frame, app),
        Route::ScheduleDetails(_) => {
            screens::schedule_details::render_schedule_details(frame, app)
        }
        Route::Bookings => screens::bookings::render_bookings(frame, app),
        Route::Filters => screens::filters::render_filters(frame, app),
        Route::Wallet => screens::wallet::render_wallet(frame, app),
        Route::Profile => screens::profile::render_profile(frame, app),
    }
}

/// Warning popup shown when the terminal is below the minimum size
fn render_size_warning(frame: &mut Frame, area: Rect) {
    let popup = screens::centered_rect(44.min(area.width), 5.min(area.height), area);

    let warning = Paragraph::new(format!(
        "Terminal too small: {}x{}\nMinimum supported size is {}x{}.",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Resize needed")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(warning, popup);
}
