//! Demo configuration.
use std::env;

use behavior_tree::TreeConfig;

/// Settings for a demo run.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Number of simulated frames.
    pub frames: u32,
    /// Seconds of simulated time per frame.
    pub frame_secs: f64,
    /// Frame at which the intruder shows up.
    pub intruder_frame: u32,
    pub tree: TreeConfig,
}

impl DemoConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUARD_DEMO_FRAMES` - Number of frames to simulate (default: 60)
    /// - `GUARD_DEMO_FRAME_SECS` - Seconds per frame (default: 0.1)
    /// - `GUARD_DEMO_INTRUDER_FRAME` - Frame the intruder appears on (default: 20)
    /// - `BT_UPDATE_PERIOD` - See [`TreeConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            tree: TreeConfig::from_env(),
            ..Self::default()
        };

        if let Some(frames) = read_env::<u32>("GUARD_DEMO_FRAMES") {
            config.frames = frames;
        }

        if let Some(secs) = read_env::<f64>("GUARD_DEMO_FRAME_SECS")
            && secs.is_finite()
            && secs > 0.0
        {
            config.frame_secs = secs;
        }

        if let Some(frame) = read_env::<u32>("GUARD_DEMO_INTRUDER_FRAME") {
            config.intruder_frame = frame;
        }

        config
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            frame_secs: 0.1,
            intruder_frame: 20,
            tree: TreeConfig::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
