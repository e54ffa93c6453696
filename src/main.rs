//! enemyfade demo entry point.
//!
//! Runs a headless scene where a player sweeps through a row of enemies.
//! Each enemy dies on contact, registers a kill, plays its death clip and
//! dissolves before despawning.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --enemies 8 --config config.ini
//! ```

use clap::Parser;
use std::path::PathBuf;

use enemyfade::game;
use enemyfade::resources::animationstore::AnimationStore;
use enemyfade::resources::gameconfig::GameConfig;

/// Enemy death and dissolve simulation
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Override the maximum number of frames to simulate.
    #[arg(long)]
    frames: Option<u32>,

    /// Override the number of enemies in the scene.
    #[arg(long)]
    enemies: Option<u32>,

    /// Override the placement seed.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with animation clip definitions.
    #[arg(long, value_name = "PATH")]
    animations: Option<PathBuf>,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}. Using defaults.", e);
    }
    if let Some(frames) = cli.frames {
        config.max_frames = frames;
    }
    if let Some(enemies) = cli.enemies {
        config.enemies = enemies;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let animations = match &cli.animations {
        Some(path) => match AnimationStore::load_from_file(path) {
            Ok(store) => store,
            Err(e) => {
                log::error!("{}. Falling back to built-in animations.", e);
                game::default_animations(&config.enemy.die_state)
            }
        },
        None => game::default_animations(&config.enemy.die_state),
    };

    let mut world = game::init_world(&config, animations);
    game::setup_scene(&mut world, &config);
    let mut update = game::build_update_schedule();

    let report = game::run_simulation(&mut world, &mut update, &config);
    log::info!(
        "Simulated {} frames ({:.2}s): {} kills, {} enemies left",
        report.frames,
        report.elapsed,
        report.kills,
        report.enemies_left
    );
}
