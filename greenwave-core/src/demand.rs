//! Per-Approach Demand Accounting
//!
//! ## Overview
//!
//! This module owns everything between the sensing layer and the allocator:
//! the vehicle-class weight table the sensing collaborator uses to produce
//! weighted counts, the sample type it hands over, and the bank of demand
//! filters that smooths one stream per monitored approach.
//!
//! ## Ownership Model
//!
//! Each approach's filter state is the private resource of exactly one
//! [`DemandEstimator`]. Updates are a single sequential stream per bank, so
//! no locking exists anywhere in this module. What the allocator needs is a
//! *consistent pair* of estimates for one cycle, and that is what
//! [`DemandEstimator::snapshot`] produces; callers take the snapshot once
//! and use it for the whole allocation instead of reading each approach
//! independently mid-update.
//!
//! ## Usage Example
//!
//! ```rust
//! use greenwave_core::demand::{
//!     Approach, ClassWeights, DemandEstimator, DemandSample, VehicleClass,
//! };
//! use greenwave_core::filter::FilterConfig;
//!
//! // Sensing side: classified counts become one weighted scalar
//! let weights = ClassWeights::default();
//! let weighted = weights.weighted_demand(&[
//!     (VehicleClass::Truck, 2),
//!     (VehicleClass::Car, 9),
//!     (VehicleClass::Bike, 10),
//! ]);
//!
//! // Controller side: the bank smooths the stream per approach
//! let mut bank = DemandEstimator::new();
//! bank.register(Approach::NorthSouth, FilterConfig::default());
//! bank.register(Approach::WestEast, FilterConfig::default());
//!
//! bank.ingest(DemandSample { approach: Approach::NorthSouth, weighted })?;
//! let _snapshot = bank.snapshot();
//! # Ok::<(), greenwave_core::TimingError>(())
//! ```

use heapless::LinearMap;

use crate::{
    constants::vehicle::{TRUCK_WEIGHT, CAR_WEIGHT, BIKE_WEIGHT},
    errors::{TimingError, TimingResult},
    filter::{DemandFilter, FilterConfig},
};

/// Most approaches one bank monitors (the two conflicting movement axes)
pub const MAX_APPROACHES: usize = 2;

/// Conflicting movement axes of a two-phase intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    /// North-south through movement
    NorthSouth,
    /// West-east through movement
    WestEast,
}

/// Vehicle classes distinguished by the sensing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleClass {
    /// Trucks and buses
    Truck,
    /// Passenger cars
    Car,
    /// Motorized two-wheelers and bicycles
    Bike,
}

/// Read-only lookup table from vehicle class to demand weight
///
/// Loaded once at startup and injected into whichever collaborator turns
/// classified counts into weighted demand. Not a mutable global: two
/// deployments can carry different calibrations side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassWeights {
    /// Weight per truck or bus
    pub truck: f32,
    /// Weight per passenger car
    pub car: f32,
    /// Weight per two-wheeler
    pub bike: f32,
}

impl Default for ClassWeights {
    fn default() -> Self {
        Self {
            truck: TRUCK_WEIGHT,
            car: CAR_WEIGHT,
            bike: BIKE_WEIGHT,
        }
    }
}

impl ClassWeights {
    /// Demand weight of one vehicle of `class`
    pub fn weight(&self, class: VehicleClass) -> f32 {
        match class {
            VehicleClass::Truck => self.truck,
            VehicleClass::Car => self.car,
            VehicleClass::Bike => self.bike,
        }
    }

    /// Collapse classified counts into one weighted demand scalar
    pub fn weighted_demand(&self, counts: &[(VehicleClass, u32)]) -> f32 {
        counts
            .iter()
            .map(|&(class, count)| self.weight(class) * count as f32)
            .sum()
    }
}

/// One weighted measurement from the sensing layer
///
/// Transient: consumed immediately by the matching filter, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandSample {
    /// Approach the measurement belongs to
    pub approach: Approach,
    /// Weighted vehicle count or occupancy
    pub weighted: f32,
}

/// Consistent pair of smoothed estimates for one allocation cycle
///
/// `None` means no filter is registered for that approach (or it has not
/// been registered yet); the allocator substitutes a nominal unit demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandSnapshot {
    /// Smoothed north-south demand, if monitored
    pub ns: Option<f32>,
    /// Smoothed west-east demand, if monitored
    pub we: Option<f32>,
}

/// Bank of demand filters, one per monitored approach
///
/// The arena owning every [`DemandFilter`] at this intersection, keyed by
/// approach. Fixed capacity, no allocation.
#[derive(Debug, Clone, Default)]
pub struct DemandEstimator {
    filters: LinearMap<Approach, DemandFilter, MAX_APPROACHES>,
}

impl DemandEstimator {
    /// Create an empty bank
    pub fn new() -> Self {
        Self {
            filters: LinearMap::new(),
        }
    }

    /// Create a filter for `approach`, replacing any existing state
    pub fn register(&mut self, approach: Approach, config: FilterConfig) {
        // Capacity covers every Approach variant, so insert cannot fail
        let _ = self.filters.insert(approach, DemandFilter::new(config));
    }

    /// Route one sample to its approach's filter, returning the new estimate
    pub fn ingest(&mut self, sample: DemandSample) -> TimingResult<f32> {
        let filter = self
            .filters
            .get_mut(&sample.approach)
            .ok_or(TimingError::UnknownApproach)?;
        filter.update(sample.weighted)
    }

    /// Current smoothed estimate for one approach, if monitored
    pub fn estimate(&self, approach: Approach) -> Option<f32> {
        self.filters.get(&approach).map(DemandFilter::estimate)
    }

    /// Take a consistent pair of estimates for one allocation cycle
    pub fn snapshot(&self) -> DemandSnapshot {
        DemandSnapshot {
            ns: self.estimate(Approach::NorthSouth),
            we: self.estimate(Approach::WestEast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_demand_matches_class_table() {
        let weights = ClassWeights::default();

        // 2 trucks + 9 cars + 10 bikes = 6 + 9 + 3
        let demand = weights.weighted_demand(&[
            (VehicleClass::Truck, 2),
            (VehicleClass::Car, 9),
            (VehicleClass::Bike, 10),
        ]);
        assert!((demand - 18.0).abs() < 1e-6);

        assert_eq!(weights.weighted_demand(&[]), 0.0);
    }

    #[test]
    fn custom_weight_table() {
        let weights = ClassWeights {
            truck: 4.0,
            ..ClassWeights::default()
        };
        assert_eq!(weights.weight(VehicleClass::Truck), 4.0);
        assert_eq!(weights.weight(VehicleClass::Car), 1.0);
    }

    #[test]
    fn ingest_routes_to_matching_filter() {
        let mut bank = DemandEstimator::new();
        bank.register(Approach::NorthSouth, FilterConfig::default());
        bank.register(Approach::WestEast, FilterConfig::default());

        bank.ingest(DemandSample {
            approach: Approach::NorthSouth,
            weighted: 30.0,
        })
        .unwrap();

        // Only the sampled approach moved
        assert!(bank.estimate(Approach::NorthSouth).unwrap() > 0.0);
        assert_eq!(bank.estimate(Approach::WestEast), Some(0.0));
    }

    #[test]
    fn unregistered_approach_is_rejected() {
        let mut bank = DemandEstimator::new();
        bank.register(Approach::NorthSouth, FilterConfig::default());

        let result = bank.ingest(DemandSample {
            approach: Approach::WestEast,
            weighted: 5.0,
        });
        assert_eq!(result, Err(TimingError::UnknownApproach));
    }

    #[test]
    fn snapshot_reads_both_axes_at_once() {
        let mut bank = DemandEstimator::new();
        bank.register(Approach::WestEast, FilterConfig::default());

        bank.ingest(DemandSample {
            approach: Approach::WestEast,
            weighted: 12.0,
        })
        .unwrap();

        let snapshot = bank.snapshot();
        assert_eq!(snapshot.ns, None);
        assert!(snapshot.we.unwrap() > 0.0);

        // Snapshot is a copy: later updates don't change it
        bank.ingest(DemandSample {
            approach: Approach::WestEast,
            weighted: 50.0,
        })
        .unwrap();
        assert!(bank.snapshot().we.unwrap() > snapshot.we.unwrap());
    }

    #[test]
    fn register_replaces_existing_state() {
        let mut bank = DemandEstimator::new();
        bank.register(Approach::NorthSouth, FilterConfig::default());
        bank.ingest(DemandSample {
            approach: Approach::NorthSouth,
            weighted: 25.0,
        })
        .unwrap();

        bank.register(
            Approach::NorthSouth,
            FilterConfig::default().with_initial_estimate(3.0),
        );
        assert_eq!(bank.estimate(Approach::NorthSouth), Some(3.0));
    }
}
