//! Circle Sandbox entry point
//!
//! Headless driver: stands in for the window/pointer layer by dropping a
//! seeded rain of disks into the box, running a fixed number of frames and
//! printing the final snapshot as JSON.
//!
//! Usage: `circle-sandbox [CONFIG.json] [--frames N] [--count N] [--seed N]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use circle_sandbox::consts::{DOMAIN_HALF_EXTENT, SPAWN_RADIUS};
use circle_sandbox::{Error, Result, SimConfig, Simulation};

struct Options {
    config_path: Option<String>,
    frames: u32,
    count: u32,
    seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: None,
            frames: 600,
            count: 12,
            seed: 42,
        }
    }
}

fn parse_args() -> Result<Options> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => opts.frames = parse_value(&arg, args.next())?,
            "--count" => opts.count = parse_value(&arg, args.next())?,
            "--seed" => opts.seed = parse_value(&arg, args.next())?,
            _ => opts.config_path = Some(arg),
        }
    }
    Ok(opts)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| Error::InvalidConfig(format!("{flag} expects a number")))
}

fn run() -> Result<()> {
    let opts = parse_args()?;

    let config = match &opts.config_path {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    let mut sim = Simulation::new(config)?;

    // One spawn per frame, like a user clicking at random spots
    let mut rng = Pcg32::seed_from_u64(opts.seed);
    let reach = DOMAIN_HALF_EXTENT - SPAWN_RADIUS;
    for frame in 0..opts.frames {
        if frame < opts.count {
            let x = rng.random_range(-reach..reach);
            let y = rng.random_range(0.0..reach);
            sim.spawn(glam::Vec2::new(x, y), SPAWN_RADIUS);
        }
        sim.step_frame();
    }

    log::info!(
        "Ran {} frames with {} particles (seed {})",
        sim.frame(),
        sim.particle_count(),
        opts.seed
    );
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Circle Sandbox (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
