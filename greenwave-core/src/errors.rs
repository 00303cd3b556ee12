//! Error Types for Timing and Estimation Failures
//!
//! ## Design Philosophy
//!
//! The error system follows the constraints of signal-controller hardware:
//!
//! 1. **Small Size**: Every variant carries at most two `f32` fields, so the
//!    enum stays register-friendly when returned from the per-cycle hot path.
//!
//! 2. **No Heap Allocation**: All context is inline - no `String`, only
//!    numeric fields. Memory usage is deterministic.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned and
//!    stored without move-semantics friction.
//!
//! 4. **Actionable Information**: Each variant names the offending parameter
//!    so the controller can report it without further queries.
//!
//! ## Error Categories
//!
//! ### Configuration
//! - `InvalidCycle`: cycle length leaves no green after yellow transitions
//! - `MinGreenInfeasible`: available green cannot cover both minimum floors
//! - `InvalidDistance` / `InvalidSpeed`: non-positive corridor geometry
//!
//! ### Computation
//! - `DegenerateGain`: filter gain would be 0/0
//! - `InvalidValue`: measurement is NaN or infinite
//!
//! ### Routing
//! - `UnknownApproach`: sample arrived for an approach with no filter
//!
//! ## Controller Contract
//!
//! Every error is surfaced at the offending call. These are deterministic
//! arithmetic failures, so retrying cannot succeed; the embedding controller
//! must hold its last known-good timing plan instead of applying a partial
//! or unvalidated result.

use thiserror_no_std::Error;

/// Result type for timing and estimation operations
pub type TimingResult<T> = Result<T, TimingError>;

/// Timing errors - kept small for controller use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TimingError {
    /// Cycle length leaves no green time after both yellow transitions
    #[error("cycle {cycle_s}s leaves no green after 2 x {yellow_s}s yellow")]
    InvalidCycle {
        /// Configured total cycle length in seconds
        cycle_s: f32,
        /// Configured yellow time per phase transition in seconds
        yellow_s: f32,
    },

    /// Available green cannot cover the minimum floor for both phases
    #[error("available green {available_s}s cannot cover 2 x {min_green_s}s minimum")]
    MinGreenInfeasible {
        /// Green time left once both yellow transitions are served
        available_s: f32,
        /// Configured minimum green per phase in seconds
        min_green_s: f32,
    },

    /// Corridor link distance must be a positive, finite length
    #[error("link distance {meters}m is not positive")]
    InvalidDistance {
        meters: f32,
    },

    /// Corridor travel speed must be a positive, finite speed
    #[error("travel speed {kmph}km/h is not positive")]
    InvalidSpeed {
        kmph: f32,
    },

    /// Filter gain is 0/0: estimate error and measurement variance both zero
    #[error("degenerate gain: estimate error and measurement variance are both zero")]
    DegenerateGain,

    /// Measurement makes no sense (NaN, infinity)
    #[error("invalid measurement: not a finite number")]
    InvalidValue,

    /// Sample arrived for an approach with no registered filter
    #[error("no filter registered for this approach")]
    UnknownApproach,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCycle { cycle_s, yellow_s } =>
                defmt::write!(fmt, "cycle {}s vs 2 x {}s yellow", cycle_s, yellow_s),
            Self::MinGreenInfeasible { available_s, min_green_s } =>
                defmt::write!(fmt, "green {}s vs 2 x {}s minimum", available_s, min_green_s),
            Self::InvalidDistance { meters } =>
                defmt::write!(fmt, "distance {}m not positive", meters),
            Self::InvalidSpeed { kmph } =>
                defmt::write!(fmt, "speed {}km/h not positive", kmph),
            Self::DegenerateGain =>
                defmt::write!(fmt, "degenerate filter gain"),
            Self::InvalidValue =>
                defmt::write!(fmt, "invalid measurement"),
            Self::UnknownApproach =>
                defmt::write!(fmt, "unknown approach"),
        }
    }
}
