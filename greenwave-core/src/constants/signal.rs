//! Signal Cycle Defaults
//!
//! Default timing parameters for an urban two-phase intersection. Deployments
//! override these through [`CycleConfig`](crate::timing::CycleConfig); the
//! defaults suit a mid-size arterial crossing.

/// Default total cycle length (seconds).
///
/// 60 s is a common urban cycle: long enough to serve both movements with
/// usable green, short enough to keep worst-case waits tolerable.
pub const DEFAULT_CYCLE_S: f32 = 60.0;

/// Default yellow time applied per conflicting phase transition (seconds).
///
/// 3 s covers stopping sight distance at typical urban approach speeds.
///
/// Source: ITE recommended practice for change intervals
pub const DEFAULT_YELLOW_S: f32 = 3.0;

/// Default minimum green per phase (seconds).
///
/// Floor below which a phase cannot discharge a standing queue or give
/// pedestrians parallel crossing time.
pub const DEFAULT_MIN_GREEN_S: f32 = 10.0;

/// Default corridor progression speed (km/h).
///
/// Assumed platoon speed between coordinated intersections when no
/// measured travel speed is available.
pub const DEFAULT_CORRIDOR_SPEED_KMPH: f32 = 35.0;

/// Weighted demand assumed for an approach with no data yet.
///
/// Keeps the split proportion defined before the first measurements arrive,
/// instead of failing the allocation outright.
pub const FALLBACK_DEMAND: f32 = 1.0;
