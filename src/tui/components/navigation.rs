//! Navigation Menu Component
//!
//! Tab-based navigation between the four top-level screens.

use crate::tui::app::{AppState, Route};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

/// Render the navigation menu component
pub fn render_navigation(f: &mut Frame, app_state: &AppState, area: Rect) {
    let tabs = create_navigation_tabs(app_state);
    f.render_widget(tabs, area);
}

/// Create the navigation tabs widget
fn create_navigation_tabs(app_state: &AppState) -> Tabs {
    let titles: Vec<Line> = Route::tabs()
        .iter()
        .map(|route| {
            // Keyboard shortcut indicators
            let shortcut_name = match route {
                Route::Home => "1:Home",
                Route::Shifts => "2:Shifts",
                Route::Schedule => "3:Schedule",
                Route::Profile => "4:Profile",
                _ => route.display_name(),
            };
            Line::from(shortcut_name.to_string())
        })
        .collect();

    let selected_tab = active_tab_index(app_state);

    Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Navigation"),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .select(selected_tab)
        .divider("|")
}

/// Tab slot the current route belongs to. Pushed screens light up the tab
/// they were opened from.
pub fn active_tab_index(app_state: &AppState) -> usize {
    app_state
        .route
        .tab_index()
        .or_else(|| app_state.stack.first().and_then(|r| r.tab_index()))
        .unwrap_or(0)
}

/// Check if a number key corresponds to a tab screen
pub fn number_key_to_route(key: char) -> Option<Route> {
    match key {
        '1' => Some(Route::Home),
        '2' => Some(Route::Shifts),
        '3' => Some(Route::Schedule),
        '4' => Some(Route::Profile),
        _ => None,
    }
}
