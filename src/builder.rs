//! Fluent fleet assembly.

use crate::factory::{self, FactoryError};
use crate::fleet::Fleet;
use crate::types::{Aircraft, AircraftKind};

/// Accumulates aircraft and yields a [`Fleet`].
///
/// ```
/// use airfleet::{AircraftKind, FleetBuilder};
///
/// let fleet = FleetBuilder::new()
///     .add_many(AircraftKind::Passenger, 3)
///     .add_many(AircraftKind::Cargo, 2)
///     .build();
///
/// assert_eq!(fleet.len(), 5);
/// assert_eq!(fleet.total_capacity(), 3 * 180 + 2 * 50_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    aircraft: Vec<Aircraft>,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pre-built aircraft.
    pub fn add_one(mut self, aircraft: Aircraft) -> Self {
        self.aircraft.push(aircraft);
        self
    }

    /// Append `count` preset aircraft of `kind`. A negative count adds nothing.
    pub fn add_many(mut self, kind: AircraftKind, count: i64) -> Self {
        if count < 0 {
            tracing::warn!("Negative count {} for {}, adding none", count, kind);
        }

        let count = usize::try_from(count).unwrap_or(0);
        self.aircraft
            .extend((0..count).map(|_| factory::create_kind(kind, None)));

        tracing::debug!("Added {} x {} ({} pending)", count, kind, self.aircraft.len());
        self
    }

    /// Same as [`FleetBuilder::add_many`] with a string selector.
    pub fn add_named(self, selector: &str, count: i64) -> Result<Self, FactoryError> {
        let kind = selector.parse::<AircraftKind>()?;
        Ok(self.add_many(kind, count))
    }

    /// Number of aircraft added so far.
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Snapshot the accumulated aircraft, in insertion order.
    ///
    /// Each call returns a fresh owned fleet, so later sorting of one result
    /// never shows up in another.
    pub fn build(&self) -> Fleet {
        self.aircraft.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AircraftSpecs;

    #[test]
    fn test_add_one_keeps_insertion_order() {
        let fleet = FleetBuilder::new()
            .add_one(Aircraft::preset(AircraftKind::Cargo))
            .add_one(Aircraft::preset(AircraftKind::Private))
            .add_one(Aircraft::new(AircraftKind::Passenger, AircraftSpecs::new(200, 5000.0, 30.0)))
            .build();

        let kinds: Vec<AircraftKind> = fleet.iter().map(Aircraft::kind).collect();
        assert_eq!(
            kinds,
            vec![AircraftKind::Cargo, AircraftKind::Private, AircraftKind::Passenger]
        );
    }

    #[test]
    fn test_add_many_uses_presets() {
        let fleet = FleetBuilder::new()
            .add_many(AircraftKind::Passenger, 3)
            .add_many(AircraftKind::Cargo, 2)
            .add_many(AircraftKind::Private, 1)
            .build();

        assert_eq!(fleet.len(), 6);
        assert_eq!(fleet.total_capacity(), 100_550);
        assert!(fleet
            .iter()
            .all(|a| a.specs() == a.kind().preset()));
    }

    #[test]
    fn test_add_many_zero_and_negative() {
        let builder = FleetBuilder::new()
            .add_many(AircraftKind::Cargo, 0)
            .add_many(AircraftKind::Passenger, -4);
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_add_named() {
        let builder = FleetBuilder::new().add_named("PRIVATE", 2).unwrap();
        assert_eq!(builder.len(), 2);

        let err = FleetBuilder::new().add_named("zeppelin", 1).unwrap_err();
        assert_eq!(err, FactoryError::UnknownAircraftKind("zeppelin".to_string()));
    }

    #[test]
    fn test_build_returns_independent_snapshots() {
        let builder = FleetBuilder::new()
            .add_many(AircraftKind::Private, 1)
            .add_many(AircraftKind::Passenger, 1);

        let mut first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);

        first.sort_by_range_descending();
        assert_ne!(first, second);
        assert_eq!(builder.build(), second);
    }
}
