//! Desktop simulator for the telemetry dashboard.
//!
//! Opens an SDL window via `embedded-graphics-simulator` and drives a
//! [`Session`] from its event pump. Build with `--features simulator`.
//!
//! ```text
//! dashboard [--config dashboard.toml] [--seed 42] [--scale 2] [--tick-ms 500]
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=telemetry_dashboard=debug`
//! to see view transitions.
//!
//! # Main Loop
//!
//! 1. Pump window events (keys, clicks, close) into the session
//! 2. Poll the tick schedule with the current time
//! 3. Repaint if anything changed, then present
//! 4. Sleep out the rest of the frame budget

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use telemetry_dashboard::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use telemetry_dashboard::input::Key;
use telemetry_dashboard::{DashboardConfig, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated engine telemetry dashboard (800x480)")]
struct Args {
    /// TOML configuration file (channel table, units, presets)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the telemetry random walk (reproducible runs)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window pixel scale
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=4))]
    scale: u32,

    /// Override the tick interval in milliseconds (100-10000)
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Telemetry Dashboard", &output_settings);

    let mut session = Session::new(config, args.seed, Instant::now());

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();

        session.draw(&mut display);
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if let Some(key) = Key::from_name(&keycode.name()) {
                        session.handle_key(key);
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    session.handle_click(point);
                }
                _ => {}
            }
        }

        session.poll(Instant::now());

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<DashboardConfig> {
    let config = match &args.config {
        Some(path) => {
            DashboardConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };
    match args.tick_ms {
        Some(ms) => config.with_tick_interval_ms(ms).context("invalid --tick-ms"),
        None => Ok(config),
    }
}
