//! Two-Phase Green Split Allocation
//!
//! Webster-inspired proportional allocation: each movement gets green time
//! in proportion to its share of total weighted demand, subject to a hard
//! minimum-green floor and exact whole-second accounting against the cycle.
//!
//! The naive formulation clamps the two phases sequentially, which can
//! leave the second phase under its own minimum when the cycle is too short
//! for both floors. That case is detected up front here and rejected as a
//! configuration error instead.

use libm::roundf;

use crate::{
    constants::signal::{
        DEFAULT_CYCLE_S, DEFAULT_MIN_GREEN_S, DEFAULT_YELLOW_S, FALLBACK_DEMAND,
    },
    demand::DemandSnapshot,
    errors::{TimingError, TimingResult},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Cycle timing parameters for one intersection
///
/// Valid only when the cycle is long enough to leave green time after both
/// yellow transitions; [`available_green`](Self::available_green) enforces
/// that, and [`compute_split`] additionally requires the remainder to cover
/// the minimum floor for both phases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// Total cycle length (seconds)
    pub cycle_s: f32,
    /// Yellow time per conflicting phase transition (seconds)
    pub yellow_s: f32,
    /// Minimum green per phase (seconds)
    pub min_green_s: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cycle_s: DEFAULT_CYCLE_S,
            yellow_s: DEFAULT_YELLOW_S,
            min_green_s: DEFAULT_MIN_GREEN_S,
        }
    }
}

impl CycleConfig {
    /// Create a config with explicit timing parameters
    pub fn new(cycle_s: f32, yellow_s: f32, min_green_s: f32) -> Self {
        Self {
            cycle_s,
            yellow_s,
            min_green_s,
        }
    }

    /// Green time left once both yellow transitions are served
    pub fn available_green(&self) -> TimingResult<f32> {
        let available = self.cycle_s - 2.0 * self.yellow_s;
        if !available.is_finite() || available <= 0.0 {
            return Err(TimingError::InvalidCycle {
                cycle_s: self.cycle_s,
                yellow_s: self.yellow_s,
            });
        }
        Ok(available)
    }
}

/// Green time allocated to each conflicting movement, in whole seconds
///
/// Produced fresh by every [`compute_split`] call; the two phases always
/// sum to the cycle's available green exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenSplit {
    /// North-south green time (seconds)
    pub ns_s: u32,
    /// West-east green time (seconds)
    pub we_s: u32,
}

/// Allocate one cycle's green time between the two movements
///
/// Pure function: reads the snapshot, returns a fresh split. Approaches
/// absent from the snapshot count as a nominal unit demand so the
/// proportion stays defined before their first measurements arrive.
///
/// # Errors
///
/// - [`TimingError::InvalidCycle`] when the cycle leaves no green time
/// - [`TimingError::MinGreenInfeasible`] when the available green cannot
///   cover the minimum floor for both phases
pub fn compute_split(
    demand: &DemandSnapshot,
    config: &CycleConfig,
) -> TimingResult<GreenSplit> {
    let available = config.available_green()?;

    // With less than two floors of green, any proportional answer would
    // leave a phase under its minimum. Reject instead of guessing.
    if available < 2.0 * config.min_green_s {
        return Err(TimingError::MinGreenInfeasible {
            available_s: available,
            min_green_s: config.min_green_s,
        });
    }

    // Estimates can dip below zero transiently on sparse traffic; the
    // allocator floors them rather than the filter.
    let ns = demand.ns.unwrap_or(FALLBACK_DEMAND).max(0.0);
    let we = demand.we.unwrap_or(FALLBACK_DEMAND).max(0.0);

    let total = ns + we;
    let (mut ns_split, mut we_split) = if total == 0.0 {
        log_debug!("no demand on either axis, splitting green evenly");
        (available / 2.0, available / 2.0)
    } else {
        (available * ns / total, available * we / total)
    };

    // Proportioning can starve the lighter movement; the floor wins and the
    // heavier movement absorbs the remainder. Both phases under the floor
    // is impossible past the feasibility check above.
    if ns_split < config.min_green_s {
        log_debug!("north-south floored at {}s minimum green", config.min_green_s);
        ns_split = config.min_green_s;
        we_split = available - config.min_green_s;
    } else if we_split < config.min_green_s {
        log_debug!("west-east floored at {}s minimum green", config.min_green_s);
        we_split = config.min_green_s;
        ns_split = available - config.min_green_s;
    }

    Ok(round_preserving_sum(ns_split, we_split, available))
}

/// Round both phases to whole seconds without changing their sum
///
/// Independent rounding can drift one second off the cycle; the longer
/// phase absorbs the residual.
fn round_preserving_sum(ns_split: f32, we_split: f32, available: f32) -> GreenSplit {
    let target = roundf(available) as i64;
    let mut ns = roundf(ns_split) as i64;
    let mut we = roundf(we_split) as i64;

    let residual = target - (ns + we);
    if residual != 0 {
        if ns >= we {
            ns += residual;
        } else {
            we += residual;
        }
    }

    GreenSplit {
        ns_s: ns as u32,
        we_s: we as u32,
    }
}
