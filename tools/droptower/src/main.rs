//! # droptower - headless cadence2d stress scene
//!
//! Drops a column of crates onto a floor and drives the world's stepping
//! loop for a while, printing contact and FPS statistics.
//!
//! Usage:
//!   droptower                         # Default scene, 5 seconds
//!   droptower --crates 64 --seconds 10
//!   droptower --config world.yaml     # Custom world configuration

use anyhow::Result;
use cadence2d_core::{
    Body, BodyDef, BodyType, FixtureDef, Shape, World, WorldConfig, WorldEvent,
};
use clap::Parser;
use rand::{Rng, SeedableRng};
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "droptower")]
#[command(about = "Headless falling-crate demo for the cadence2d world controller")]
struct Args {
    /// World configuration file (YAML or TOML)
    #[arg(long)]
    config: Option<String>,

    /// Number of crates to drop
    #[arg(long, default_value = "32")]
    crates: usize,

    /// How long to run the simulation, in wall-clock seconds
    #[arg(long, default_value = "5")]
    seconds: u64,

    /// Seed for crate placement jitter
    #[arg(long, default_value = "7")]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    config.report_fps = true;

    let mut world = World::new(config);
    info!(
        crates = args.crates,
        time_step = world.time_step(),
        "setting up droptower scene"
    );

    // Floor and walls so nothing escapes the tower.
    let mut statics = spawn_enclosure(&mut world)?;

    // A jittered column of crates; perfectly stacked boxes would balance
    // forever and make a boring demo.
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut crates = Vec::with_capacity(args.crates);
    for i in 0..args.crates {
        let jitter: f32 = rng.gen_range(-8.0..8.0);
        let mut crate_body = Body::new(
            BodyDef::new(BodyType::Dynamic, [jitter, -40.0 * i as f32])
                .with_fixture(FixtureDef::new(Shape::Box {
                    width: 32.0,
                    height: 32.0,
                })),
        );
        world.register_body(&mut crate_body)?;
        crates.push(crate_body);
    }
    info!(bodies = world.body_count(), "scene ready, running");

    let mut contacts_began = 0u64;
    let mut total_steps = 0u64;
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(args.seconds);
    while std::time::Instant::now() < deadline && world.is_running() {
        let frame = std::time::Duration::from_millis(world.frame_time().max(1));
        let tick_start = std::time::Instant::now();
        world.tick();

        for event in world.drain_events() {
            match event {
                WorldEvent::ContactBegan { .. } => contacts_began += 1,
                WorldEvent::Stepped { steps } => total_steps += u64::from(steps),
                WorldEvent::FpsChanged { fps } => info!(fps, "wake-up rate"),
                _ => {}
            }
        }

        if let Some(remaining) = frame.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    let mut resting = 0usize;
    for crate_body in &mut crates {
        if let Some(key) = crate_body.key() {
            let vel = world.body_linear_velocity(key)?;
            if vel.norm() < 1.0 {
                resting += 1;
            }
        }
    }
    info!(
        total_steps,
        contacts_began,
        resting,
        of = crates.len(),
        "run complete"
    );

    // Unwind the scene the way a scene graph would: unconditionally.
    for crate_body in &mut crates {
        world.unregister_body(crate_body);
    }
    for wall in &mut statics {
        world.unregister_body(wall);
    }
    assert_eq!(world.body_count(), 0);

    Ok(())
}

/// Floor plus two walls, roughly a 640x480 display box centered on x = 0.
fn spawn_enclosure(world: &mut World) -> Result<Vec<Body>> {
    let mut statics = Vec::new();
    let panels = [
        // (position, size)
        ([0.0, 240.0], [640.0, 20.0]),
        ([-320.0, 0.0], [20.0, 480.0]),
        ([320.0, 0.0], [20.0, 480.0]),
    ];
    for (position, size) in panels {
        let mut panel = Body::new(
            BodyDef::new(BodyType::Static, position).with_fixture(FixtureDef::new(Shape::Box {
                width: size[0],
                height: size[1],
            })),
        );
        world.register_body(&mut panel)?;
        statics.push(panel);
    }
    Ok(statics)
}
