//! Constants for GreenWave Core
//!
//! Centralized, documented constants used throughout the crate. All numeric
//! values live here with their purpose and source, instead of appearing as
//! magic numbers at call sites.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Vehicle**: per-class demand weights
//! - **Signal**: cycle timing defaults and floors
//! - **Units**: unit conversion factors

/// Per-class demand weights for weighted vehicle counting.
pub mod vehicle;

/// Signal cycle defaults and demand fallbacks.
pub mod signal;

/// Unit conversion factors.
pub mod units;

// Re-export commonly used constants for convenience
pub use vehicle::{TRUCK_WEIGHT, CAR_WEIGHT, BIKE_WEIGHT};

pub use signal::{
    DEFAULT_CYCLE_S, DEFAULT_YELLOW_S, DEFAULT_MIN_GREEN_S,
    DEFAULT_CORRIDOR_SPEED_KMPH, FALLBACK_DEMAND,
};

pub use units::KMPH_PER_MPS;
