//! Scalar Demand Filter for Noisy Queue Measurements
//!
//! ## Overview
//!
//! Queue sensors (loop detectors, camera counts) are noisy: occlusion,
//! double-counting, and classification errors make raw weighted demand jump
//! around the true queue size. This module smooths that stream with a
//! one-dimensional recursive Bayesian filter: a steady-state Kalman filter.
//!
//! ## Why No Prediction Step?
//!
//! Between two sensor updates the true demand on an approach barely moves,
//! so the process model is the identity: the predicted state is the previous
//! state and only the measurement update remains.
//!
//! ```text
//! gain:       K = P / (P + R)
//! estimate:   x ← x + K·(z − x)
//! error:      P ← (1 − K)·P + Q
//! ```
//!
//! where `P` is the estimate error, `R` the measurement variance, and `Q`
//! the process variance.
//!
//! ## Convergence
//!
//! With constant `Q` and `R` the error `P` converges to the fixed point of
//! `P ← (1 − P/(P+R))·P + Q` regardless of its seed. `Q > 0` keeps that
//! fixed point above zero, so the filter never becomes arbitrarily
//! over-confident and stays responsive when true demand drifts.
//!
//! ## Usage Example
//!
//! ```rust
//! use greenwave_core::filter::{DemandFilter, FilterConfig};
//!
//! let mut filter = DemandFilter::new(FilterConfig::default());
//!
//! for raw in [5.0, 6.0, 4.0, 10.0, 12.0, 11.0] {
//!     let _smoothed = filter.update(raw)?;
//!     // smoothed trails the raw jumps, converging on the underlying queue
//! }
//! # Ok::<(), greenwave_core::TimingError>(())
//! ```

use crate::errors::{TimingError, TimingResult};

/// Seed and noise configuration for a [`DemandFilter`]
///
/// No range validation is performed: the caller supplies sane values.
/// Negative variances degrade estimate quality rather than crash.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Initial demand estimate
    pub initial_estimate: f32,
    /// Initial estimate error (uncertainty about the seed)
    pub initial_error: f32,
    /// Expected drift of true demand between updates (Q)
    pub process_variance: f32,
    /// Sensor noise level (R)
    pub measurement_variance: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            initial_estimate: 0.0,     // approach assumed empty until sensed
            initial_error: 1.0,        // but don't trust that assumption much
            process_variance: 0.1,     // queues drift slowly between readings
            measurement_variance: 0.5, // detectors miscount about half a car
        }
    }
}

impl FilterConfig {
    /// Set the initial demand estimate
    pub fn with_initial_estimate(mut self, estimate: f32) -> Self {
        self.initial_estimate = estimate;
        self
    }

    /// Set the initial estimate error
    pub fn with_initial_error(mut self, error: f32) -> Self {
        self.initial_error = error;
        self
    }

    /// Set process variance (higher = track demand swings faster)
    pub fn with_process_variance(mut self, variance: f32) -> Self {
        self.process_variance = variance;
        self
    }

    /// Set measurement variance (higher = trust the sensor less)
    pub fn with_measurement_variance(mut self, variance: f32) -> Self {
        self.measurement_variance = variance;
        self
    }
}

/// Recursive estimator for one approach's weighted demand
///
/// Owns the full filter state for a single approach: the current estimate,
/// the estimate error, and the configured noise levels. Created once at
/// controller startup and mutated only by [`update`](Self::update) for the
/// controller's operating lifetime.
#[derive(Debug, Clone)]
pub struct DemandFilter {
    /// Current smoothed demand
    estimate: f32,
    /// Estimate error; re-derived on every update, never set externally
    estimate_error: f32,
    /// Configured seeds and noise levels, kept for reset
    config: FilterConfig,
}

impl DemandFilter {
    /// Create a filter seeded from `config`
    pub fn new(config: FilterConfig) -> Self {
        Self {
            estimate: config.initial_estimate,
            estimate_error: config.initial_error,
            config,
        }
    }

    /// Fold one raw measurement into the estimate and return the new estimate
    ///
    /// The new estimate is a blend of the prior estimate and the measurement,
    /// weighted toward whichever side is currently more trusted. Fails with
    /// [`TimingError::InvalidValue`] on a non-finite measurement (folding a
    /// NaN in would poison the recursive state permanently) and with
    /// [`TimingError::DegenerateGain`] when the gain denominator is exactly
    /// zero (both the estimate error and the measurement variance are zero).
    pub fn update(&mut self, measurement: f32) -> TimingResult<f32> {
        if !measurement.is_finite() {
            return Err(TimingError::InvalidValue);
        }

        let denominator = self.estimate_error + self.config.measurement_variance;
        if denominator == 0.0 {
            return Err(TimingError::DegenerateGain);
        }

        // Measurement update; prediction is the identity (constant demand
        // between readings), so there is nothing to do before this.
        let gain = self.estimate_error / denominator;
        self.estimate += gain * (measurement - self.estimate);
        self.estimate_error = (1.0 - gain) * self.estimate_error + self.config.process_variance;

        Ok(self.estimate)
    }

    /// Current smoothed demand estimate
    pub fn estimate(&self) -> f32 {
        self.estimate
    }

    /// Current estimate error (smaller = more confident)
    pub fn uncertainty(&self) -> f32 {
        self.estimate_error
    }

    /// Restore the configured seed state
    pub fn reset(&mut self) {
        self.estimate = self.config.initial_estimate;
        self.estimate_error = self.config.initial_error;
    }
}
