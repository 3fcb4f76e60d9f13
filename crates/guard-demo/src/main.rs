//! Guard demo binary.
//!
//! Simulates a guard that patrols between two waypoints and chases an
//! intruder once it appears. The guard's decisions come from a behavior tree
//! driven with a fixed frame time.
//!
//! # Examples
//!
//! ```bash
//! RUST_LOG=debug GUARD_DEMO_FRAMES=120 cargo run -p guard-demo
//! ```

mod config;
mod guard;

use anyhow::Result;
use config::DemoConfig;
use guard::World;

/// Where the intruder shows up.
const INTRUDER_POSITION: i32 = 9;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(
        frames = config.frames,
        frame_secs = config.frame_secs,
        update_period = config.tree.update_period,
        "starting guard demo"
    );

    let mut tree = guard::guard_tree(World::default(), config.tree.clone())?;

    let mut root_ticks = 0;
    for frame in 0..config.frames {
        if frame == config.intruder_frame {
            tracing::info!(frame, position = INTRUDER_POSITION, "intruder appears");
            tree.context_mut().intruder = Some(INTRUDER_POSITION);
        }

        root_ticks += tree.tick(config.frame_secs);
    }

    let world = tree.into_context();
    tracing::info!(
        root_ticks,
        guard = world.guard,
        captures = world.captures,
        patrol_legs = world.patrol_legs,
        "guard demo finished"
    );
    Ok(())
}
