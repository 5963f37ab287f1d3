//! Block Breaker headless runner
//!
//! Loads settings, runs the simulation for a fixed number of ticks and prints
//! JSON frame snapshots. Rendering hosts consume the same snapshots.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use block_breaker::Settings;
use block_breaker::game::Game;
use block_breaker::platform::{FixedPointer, autopilot_pointer};
use block_breaker::sim::SimEvent;

#[derive(Parser, Debug)]
#[command(name = "block-breaker", about = "Run the breakout simulation headless")]
struct Cli {
    /// Settings file (JSON); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Hold the pointer at this X
    #[arg(long, conflicts_with = "autopilot")]
    pointer_x: Option<i32>,

    /// Keep the paddle under the ball
    #[arg(long)]
    autopilot: bool,

    /// Print a snapshot every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 60)]
    every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Settings::default(),
    };
    let state = settings.into_state().context("building simulation")?;
    let pointer_x = cli
        .pointer_x
        .unwrap_or_else(|| state.arena.center().x.round() as i32);
    let pointer_y = state.paddle.y.round() as i32;

    log::info!("Block Breaker (headless) starting: {} ticks", cli.ticks);

    let mut game = Game::new(state, FixedPointer(pointer_x, pointer_y));
    let mut destroyed = 0usize;

    for t in 1..=cli.ticks {
        if cli.autopilot {
            let (x, y) = autopilot_pointer(game.state());
            *game.source_mut() = FixedPointer(x, y);
        }
        let report = game.step();
        destroyed += report
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::BlockDestroyed { .. }))
            .count();

        if cli.every > 0 && t % cli.every == 0 {
            println!("{}", serde_json::to_string(&game.snapshot())?);
        }
    }

    if cli.every == 0 || cli.ticks % cli.every != 0 {
        println!("{}", serde_json::to_string(&game.snapshot())?);
    }

    let state = game.state();
    log::info!(
        "Finished after {} ticks: {} blocks destroyed, {} visible, {} hit-points left",
        state.tick_count,
        destroyed,
        state.visible_blocks(),
        state.remaining_hit_points()
    );

    Ok(())
}
