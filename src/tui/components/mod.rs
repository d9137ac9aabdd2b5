//! Reusable UI Components
//!
//! This module contains reusable UI components shared across the
//! application screens.

pub mod cards;
pub mod charts;
pub mod header;
pub mod navigation;
pub mod status_bar;

pub use cards::*;
pub use charts::*;
pub use header::*;
pub use navigation::*;
pub use status_bar::*;

use ratatui::style::Color;

/// Convert an RGB triple from the domain palette into a terminal color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Accent purple used for highlights throughout the app
pub const ACCENT: Color = Color::Rgb(139, 92, 246);

/// Positive/earnings green
pub const POSITIVE: Color = Color::Rgb(16, 185, 129);
