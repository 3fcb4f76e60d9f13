//! Tree driver configuration.
use std::env;

/// Settings for a [`BehaviorTree`](crate::BehaviorTree) driver.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// Seconds between root ticks.
    ///
    /// Zero or a negative value ticks the root on every drive call.
    pub update_period: f64,
}

impl TreeConfig {
    pub const DEFAULT_UPDATE_PERIOD: f64 = 0.2;

    /// Ticks the root on every drive call.
    pub fn every_call() -> Self {
        Self { update_period: 0.0 }
    }

    /// Ticks the root every `update_period` seconds.
    pub fn with_update_period(update_period: f64) -> Self {
        Self { update_period }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BT_UPDATE_PERIOD` - Seconds between root ticks (default: 0.2)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(period) = read_var::<f64>(&lookup, "BT_UPDATE_PERIOD")
            && period.is_finite()
        {
            config.update_period = period;
        }

        config
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            update_period: Self::DEFAULT_UPDATE_PERIOD,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
