pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod mock;
pub mod model;
pub mod store;

// TUI module - optional via "tui" feature
#[cfg(feature = "tui")]
pub mod tui;

pub use chart::{ChartKind, ChartSection, ChartSelection, ChartSeries};
pub use config::AppConfig;
pub use error::Error;
pub use fetch::{Clock, ManualClock, ScreenState, SystemClock};
pub use store::{Action, DataStore};

// Re-export TUI entry point when the feature is enabled
#[cfg(feature = "tui")]
pub use tui::run_tui;
