//! Burrow headless runner.
//!
//! Runs the sandbox simulation without a window:
//! - **bevy_ecs** holds the world, the player, and the tick schedule
//! - **configparser** reads `config.ini`
//! - **clap** parses the command line
//!
//! A scripted autopilot stands in for the player: it walks, jumps every so
//! often, and digs the block under its feet. At the end the final player state
//! and block counts are logged.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --seed 42 --ticks 1200
//! ```

use std::path::PathBuf;

use burrow::game::Simulation;
use burrow::resources::gameconfig::GameConfig;
use burrow::resources::input::TickIntents;
use burrow::resources::tileworld::BlockKind;
use clap::Parser;
use glam::Vec2;
use log::{debug, error, info, warn};

const JUMP_EVERY: u64 = 90;
const DIG_EVERY: u64 = 45;
const TURN_EVERY: u64 = 300;

/// Burrow 2D sandbox, headless.
#[derive(Parser)]
#[command(version, about = "Runs the Burrow dig-and-build simulation without a window.")]
struct Cli {
    /// INI configuration file. A missing file means defaults; a broken one is an error.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Terrain seed, overrides `[world] seed`.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

/// Scripted input for tick `tick`.
fn autopilot(tick: u64, sim: &Simulation) -> TickIntents {
    let mut intents = TickIntents::idle();
    intents = if (tick / TURN_EVERY) % 2 == 0 {
        intents.right()
    } else {
        intents.left()
    };
    if tick % JUMP_EVERY == 0 {
        intents = intents.jumping();
    }
    if tick % DIG_EVERY == 0 {
        // Aim at the middle of the cell just below the feet.
        let cell = sim.tiles().cell_size();
        let pos = sim.player_position();
        let feet = Vec2::new(
            sim.player_center().x,
            pos.y + sim.player_size().y + cell * 0.5,
        );
        let screen = sim.camera().world_to_screen(feet);
        intents = intents
            .with_cursor(screen.x as i32, screen.y as i32)
            .breaking();
    }
    intents
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    match config.load_if_present() {
        Ok(true) => {}
        Ok(false) => warn!("{:?} not found; using defaults", cli.config),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // Early-exit: write the effective config and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    for tick in 0..cli.ticks {
        let intents = autopilot(tick, &sim);
        sim.tick(intents);
        if tick % 60 == 0 {
            let body = sim.player_body();
            debug!(
                "tick {tick}: pos={:?} vel={:?} grounded={}",
                sim.player_position(),
                body.velocity,
                body.grounded
            );
        }
    }

    let body = sim.player_body();
    info!(
        "Finished {} ticks ({:.2}s simulated)",
        sim.time().ticks,
        sim.time().elapsed
    );
    info!(
        "Player at {:?}, velocity {:?}, grounded={}",
        sim.player_position(),
        body.velocity,
        body.grounded
    );
    for kind in BlockKind::ALL {
        info!("{:?}: {}", kind, sim.tiles().count(kind));
    }
}
