//! Demand estimation and phase timing core for adaptive traffic signals
//!
//! Turns noisy per-approach queue measurements into signal timings:
//! a smoothed demand estimate per approach, a legal two-phase green split,
//! and a corridor coordination offset for green-wave progression.
//!
//! Key constraints:
//! - No heap allocation; runs on controller-grade embedded targets
//! - Deterministic, bounded-time arithmetic only (no I/O, no retries)
//! - An illegal timing is an error, never a silently clamped plan
//!
//! ```no_run
//! use greenwave_core::{
//!     Approach, CycleConfig, DemandEstimator, DemandSample, FilterConfig,
//!     compute_split,
//! };
//!
//! let mut estimator = DemandEstimator::new();
//! estimator.register(Approach::NorthSouth, FilterConfig::default());
//! estimator.register(Approach::WestEast, FilterConfig::default());
//!
//! // Per sensor reading
//! let _smoothed = estimator.ingest(DemandSample {
//!     approach: Approach::NorthSouth,
//!     weighted: 12.4,
//! });
//!
//! // Once per cycle
//! match compute_split(&estimator.snapshot(), &CycleConfig::default()) {
//!     Ok(_split) => {} // hand to the signal driver
//!     Err(_e) => {}    // hold the last known-good plan
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod demand;
pub mod errors;
pub mod filter;
pub mod timing;

// Public API
pub use errors::{TimingError, TimingResult};
pub use filter::{DemandFilter, FilterConfig};
pub use demand::{
    Approach,
    ClassWeights,
    DemandEstimator,
    DemandSample,
    DemandSnapshot,
    VehicleClass,
};
pub use timing::{compute_split, coordination_offset, CycleConfig, GreenSplit};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
