// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [schedule]
/// workers = 5
/// cost_base = 60
/// ```
///
/// The section is optional and has reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Scheduling policy from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Number of simulated workers for the completion-time variant.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Base cost added to every task's per-name cost.
    ///
    /// With the default of 60, task `A` costs 61, `B` costs 62, and so on.
    #[serde(default = "default_cost_base")]
    pub cost_base: u64,
}

fn default_workers() -> usize {
    5
}

fn default_cost_base() -> u64 {
    60
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            cost_base: default_cost_base(),
        }
    }
}

/// Validated configuration.
///
/// Produced from [`RawConfigFile`] via `TryFrom` (see `validate.rs`); code
/// holding a `ConfigFile` can rely on `schedule.workers >= 1`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
}

impl ConfigFile {
    /// Construct without re-validating. Only `validate.rs` and test
    /// builders should call this.
    pub fn new_unchecked(schedule: ScheduleSection) -> Self {
        Self { schedule }
    }
}
