//! Headless demo driver: walks a character along a sample path with a
//! scripted jump and logs the state trace.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::Vec3;
use log::info;
use pathwalk::{
    init_logging, FlatGround, InputSnapshot, LocomotionConfig, LocomotionController, LogAnimator,
    PolylinePath,
};

/// Path-following locomotion demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u32,
    /// Fixed tick duration in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// JSON file overriding the default locomotion config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<LocomotionConfig> {
    path.map_or_else(
        || Ok(LocomotionConfig::default()),
        |file| {
            let text = fs::read_to_string(file)
                .with_context(|| format!("reading config {}", file.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", file.display()))
        },
    )
}

/// Scripted input: walk forward the whole run, tap jump once at tick 80.
fn scripted_input(tick: u32) -> InputSnapshot {
    InputSnapshot::new(1.0, tick == 80)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let path = PolylinePath::new(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(8.0, 0.0, 4.0),
        Vec3::new(12.0, 0.0, 4.0),
    ])?;
    let ground = FlatGround::new(0.0);
    let mut animator = LogAnimator;
    let mut controller = LocomotionController::new(config)?;
    let mut state = controller.spawn_state(&path);

    for tick in 0..args.ticks {
        let input = scripted_input(tick);
        state = controller.tick(&state, &input, args.dt, &path, &ground, &mut animator);
        if tick % 30 == 0 || !state.grounded {
            info!(
                "tick {tick:3}: progress {:.3} position {} grounded {}",
                state.progress, state.position, state.grounded
            );
        }
    }
    info!("finished at progress {:.3}", state.progress);
    Ok(())
}
