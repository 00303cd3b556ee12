//! Corridor Coordination Offset
//!
//! The "green wave": delay the downstream intersection's phase start by the
//! platoon's travel time from the upstream stop line, so vehicles released
//! on green arrive during the downstream green.
//!
//! Travel time is distance over assumed progression speed; the result is
//! rounded to whole seconds because controller offsets are programmed in
//! seconds.

use libm::roundf;

use crate::{
    constants::units::KMPH_PER_MPS,
    errors::{TimingError, TimingResult},
};

/// Phase delay for a downstream intersection, in whole seconds
///
/// Pure function, typically invoked once at configuration time or when the
/// link geometry or speed assumption changes.
///
/// # Errors
///
/// [`TimingError::InvalidDistance`] / [`TimingError::InvalidSpeed`] when
/// either parameter is non-finite or not strictly positive; the division
/// below would otherwise be undefined.
pub fn coordination_offset(distance_m: f32, speed_kmph: f32) -> TimingResult<u32> {
    if !distance_m.is_finite() || distance_m <= 0.0 {
        return Err(TimingError::InvalidDistance { meters: distance_m });
    }
    if !speed_kmph.is_finite() || speed_kmph <= 0.0 {
        return Err(TimingError::InvalidSpeed { kmph: speed_kmph });
    }

    let speed_mps = speed_kmph / KMPH_PER_MPS;
    let travel_time_s = distance_m / speed_mps;

    Ok(roundf(travel_time_s) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::signal::DEFAULT_CORRIDOR_SPEED_KMPH;

    #[test]
    fn typical_block_spacing() {
        // 350m at 35km/h is 36.0s of travel
        let offset = coordination_offset(350.0, DEFAULT_CORRIDOR_SPEED_KMPH).unwrap();
        assert_eq!(offset, 36);
    }

    #[test]
    fn rounds_to_nearest_second() {
        // 100m at 35km/h = 10.29s
        assert_eq!(coordination_offset(100.0, 35.0).unwrap(), 10);
        // 130m at 35km/h = 13.37s
        assert_eq!(coordination_offset(130.0, 35.0).unwrap(), 13);
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        assert_eq!(
            coordination_offset(0.0, 35.0),
            Err(TimingError::InvalidDistance { meters: 0.0 })
        );
        assert_eq!(
            coordination_offset(-10.0, 35.0),
            Err(TimingError::InvalidDistance { meters: -10.0 })
        );
        assert_eq!(
            coordination_offset(350.0, 0.0),
            Err(TimingError::InvalidSpeed { kmph: 0.0 })
        );
        assert_eq!(
            coordination_offset(350.0, -5.0),
            Err(TimingError::InvalidSpeed { kmph: -5.0 })
        );
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(coordination_offset(f32::NAN, 35.0).is_err());
        assert!(coordination_offset(350.0, f32::INFINITY).is_err());
    }

    #[test]
    fn identical_inputs_give_identical_offsets() {
        assert_eq!(
            coordination_offset(412.0, 42.0).unwrap(),
            coordination_offset(412.0, 42.0).unwrap()
        );
    }
}
