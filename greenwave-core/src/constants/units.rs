//! Unit Conversion Factors

/// Kilometers-per-hour in one meter-per-second.
///
/// Divide a km/h speed by this factor to get m/s.
pub const KMPH_PER_MPS: f32 = 3.6;
