//! Screen Implementations
//!
//! Full-screen views, one per route. Each screen draws the shared header,
//! navigation, its own content, and the status bar.

pub mod bookings;
pub mod filters;
pub mod home;
pub mod profile;
pub mod schedule;
pub mod schedule_details;
pub mod shift_details;
pub mod shifts;
pub mod wallet;

pub use bookings::*;
pub use filters::*;
pub use home::*;
pub use profile::*;
pub use schedule::*;
pub use schedule_details::*;
pub use shift_details::*;
pub use shifts::*;
pub use wallet::*;

use ratatui::prelude::*;

/// Standard screen layout: header, navigation, content, status bar.
/// Returns the four chunks in that order.
pub fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

/// Centered overlay rect for prompts
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
