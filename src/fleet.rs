//! Ordered fleet collection and its queries.

use crate::types::{Aircraft, AircraftKind};

/// An ordered sequence of aircraft.
///
/// Duplicates are allowed. Elements are only ever appended; the order can
/// change through [`Fleet::sort_by_range_descending`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, aircraft: Aircraft) {
        self.aircraft.push(aircraft);
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Aircraft> {
        self.aircraft.iter()
    }

    pub fn as_slice(&self) -> &[Aircraft] {
        &self.aircraft
    }

    /// Sum of capacities; 0 for an empty fleet.
    ///
    /// Saturates at `i64::MIN`/`i64::MAX` instead of overflowing.
    pub fn total_capacity(&self) -> i64 {
        self.aircraft
            .iter()
            .map(Aircraft::capacity)
            .fold(0i64, i64::saturating_add)
    }

    /// Reorder in place by range, longest first.
    ///
    /// The sort is stable: aircraft with equal range keep their relative
    /// insertion order.
    pub fn sort_by_range_descending(&mut self) {
        self.aircraft
            .sort_by(|a, b| b.range_km().total_cmp(&a.range_km()));
        tracing::debug!("Sorted {} aircraft by range", self.aircraft.len());
    }

    /// Aircraft whose fuel consumption lies in `[min, max]`, in fleet order.
    ///
    /// Empty when nothing matches or when `min > max`.
    pub fn find_by_fuel_consumption(&self, min: f64, max: f64) -> Vec<Aircraft> {
        self.aircraft
            .iter()
            .filter(|a| min <= a.fuel_per_100km() && a.fuel_per_100km() <= max)
            .copied()
            .collect()
    }

    /// Number of aircraft of the given kind.
    pub fn count_of(&self, kind: AircraftKind) -> usize {
        self.aircraft.iter().filter(|a| a.kind() == kind).count()
    }

    pub fn summary(&self) -> FleetSummary {
        let count = self.aircraft.len();
        let max_range_km = self
            .aircraft
            .iter()
            .map(Aircraft::range_km)
            .max_by(f64::total_cmp);
        let mean_fuel_per_100km = if count == 0 {
            None
        } else {
            let total: f64 = self.aircraft.iter().map(Aircraft::fuel_per_100km).sum();
            Some(total / count as f64)
        };

        FleetSummary {
            count,
            passenger_count: self.count_of(AircraftKind::Passenger),
            cargo_count: self.count_of(AircraftKind::Cargo),
            private_count: self.count_of(AircraftKind::Private),
            total_capacity: self.total_capacity(),
            max_range_km,
            mean_fuel_per_100km,
        }
    }
}

impl FromIterator<Aircraft> for Fleet {
    fn from_iter<I: IntoIterator<Item = Aircraft>>(iter: I) -> Self {
        Self {
            aircraft: iter.into_iter().collect(),
        }
    }
}

impl Extend<Aircraft> for Fleet {
    fn extend<I: IntoIterator<Item = Aircraft>>(&mut self, iter: I) {
        self.aircraft.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Aircraft;
    type IntoIter = std::slice::Iter<'a, Aircraft>;

    fn into_iter(self) -> Self::IntoIter {
        self.aircraft.iter()
    }
}

impl IntoIterator for Fleet {
    type Item = Aircraft;
    type IntoIter = std::vec::IntoIter<Aircraft>;

    fn into_iter(self) -> Self::IntoIter {
        self.aircraft.into_iter()
    }
}

/// Aggregate figures for a fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSummary {
    pub count: usize,
    pub passenger_count: usize,
    pub cargo_count: usize,
    pub private_count: usize,
    pub total_capacity: i64,
    /// Longest range in the fleet, `None` when empty
    pub max_range_km: Option<f64>,
    /// Mean fuel consumption, `None` when empty
    pub mean_fuel_per_100km: Option<f64>,
}

impl FleetSummary {
    pub fn count_of(&self, kind: AircraftKind) -> usize {
        match kind {
            AircraftKind::Passenger => self.passenger_count,
            AircraftKind::Cargo => self.cargo_count,
            AircraftKind::Private => self.private_count,
        }
    }
}
