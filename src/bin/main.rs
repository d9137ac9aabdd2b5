//! Shiftdeck - Terminal User Interface
//!
//! Entry point for the shiftdeck TUI: a terminal scheduling and booking app
//! for healthcare shift workers, running entirely on local sample data.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use shiftdeck::{
    config::AppConfig,
    fetch::{Clock, SystemClock},
    store::DataStore,
    tui::{app::App, check_terminal_support, run_tui},
};

#[derive(Parser)]
#[command(name = "shiftdeck")]
#[command(about = "Shiftdeck - terminal scheduling for shift workers")]
#[command(version)]
struct Args {
    /// Path to the configuration file (default: ~/.shiftdeck/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event-loop tick interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Enable debug logging (stderr, before the TUI takes over)
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let mut config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(tick_rate) = args.tick_rate {
        config.tick_rate_ms = tick_rate;
    }
    if let Some(latency) = args.latency_ms {
        config.fetch_latency_ms = latency;
    }
    info!(
        "starting with tick_rate={}ms latency={}ms",
        config.tick_rate_ms, config.fetch_latency_ms
    );

    check_terminal_support()?;

    let clock = SystemClock;
    let store = DataStore::seeded(clock.now());
    let app = App::new(config, store, Box::new(clock))?;

    run_tui(app).await.context("running the TUI")
}
