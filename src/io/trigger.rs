//! Host-facing regeneration triggers
//!
//! Hosts deliver two kinds of events: a manual "regenerate" request, which is
//! debounced, and a property change carrying a new configuration. Both go
//! through `&mut self`, so runs never overlap.

use crate::algorithm::arena::PlacementRecord;
use crate::algorithm::executor::{ScatterConfig, WalkEngine};
use crate::io::configuration::{PROPERTY_TRIGGER_WARMUP_SECS, REGENERATE_COOLDOWN_SECS};
use crate::io::error::Result;

/// Event asking for a new run
#[derive(Clone, Debug)]
pub enum Trigger {
    /// Explicit user request, subject to the cooldown
    Manual,
    /// Edited configuration to apply before regenerating
    PropertyChanged(ScatterConfig),
}

/// Turns host events at host-supplied times (seconds) into engine runs
pub struct Regenerator {
    engine: WalkEngine,
    started_at: f64,
    last_manual: f64,
    run_count: usize,
}

impl Regenerator {
    /// Take ownership of `engine` and perform the start-up run at time `now`
    pub fn new(mut engine: WalkEngine, now: f64) -> Self {
        engine.run();
        Self {
            engine,
            started_at: now,
            last_manual: now,
            run_count: 1,
        }
    }

    /// Handle one event; returns whether a run was performed
    ///
    /// Manual triggers within the cooldown of the previous accepted one (or
    /// of start-up) are ignored. Property changes are always applied but only
    /// regenerate once the warm-up after start-up has elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if a property change carries an invalid
    /// configuration; the previous configuration and records are kept.
    pub fn trigger(&mut self, trigger: Trigger, now: f64) -> Result<bool> {
        match trigger {
            Trigger::Manual => {
                if now - self.last_manual < REGENERATE_COOLDOWN_SECS {
                    tracing::debug!(now, "Ignoring manual trigger during cooldown");
                    return Ok(false);
                }
                self.last_manual = now;
            }
            Trigger::PropertyChanged(config) => {
                self.engine.reconfigure(config)?;
                // Warm-up counts from start-up, not from the last manual trigger,
                // so edits regenerate even in sessions that never trigger manually
                if now - self.started_at < PROPERTY_TRIGGER_WARMUP_SECS {
                    tracing::debug!(now, "Configuration stored, host still warming up");
                    return Ok(false);
                }
            }
        }

        tracing::info!("Generating new scatter");
        self.engine.run();
        self.run_count += 1;
        Ok(true)
    }

    /// The engine being driven
    pub const fn engine(&self) -> &WalkEngine {
        &self.engine
    }

    /// Records of the latest run
    pub fn records(&self) -> &[PlacementRecord] {
        self.engine.records()
    }

    /// Runs performed so far, including the start-up run
    pub const fn run_count(&self) -> usize {
        self.run_count
    }
}
