//! Core data types for the fleet catalog.

use crate::factory::FactoryError;
use std::fmt;
use std::str::FromStr;

/// Aircraft category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftKind {
    Passenger,
    Cargo,
    Private,
}

impl AircraftKind {
    /// Every kind, in declaration order.
    pub const ALL: [AircraftKind; 3] = [Self::Passenger, Self::Cargo, Self::Private];

    /// Selector string accepted by the factory.
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Cargo => "cargo",
            Self::Private => "private",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passenger => "Passenger",
            Self::Cargo => "Cargo",
            Self::Private => "Private",
        }
    }

    /// Preset triple used when no explicit specs are supplied.
    pub const fn preset(&self) -> AircraftSpecs {
        match self {
            Self::Passenger => AircraftSpecs::new(180, 5000.0, 8.5),
            Self::Cargo => AircraftSpecs::new(50_000, 4000.0, 12.0),
            Self::Private => AircraftSpecs::new(10, 3000.0, 5.5),
        }
    }
}

impl fmt::Display for AircraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AircraftKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector().eq_ignore_ascii_case(s))
            .ok_or_else(|| FactoryError::UnknownAircraftKind(s.to_string()))
    }
}

/// Capacity, range and fuel consumption of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftSpecs {
    /// Passengers, or cargo mass units for cargo aircraft
    pub capacity: i64,
    /// Maximum flight range in kilometres
    pub range_km: f64,
    /// Fuel burnt per 100 km
    pub fuel_per_100km: f64,
}

impl AircraftSpecs {
    pub const fn new(capacity: i64, range_km: f64, fuel_per_100km: f64) -> Self {
        Self {
            capacity,
            range_km,
            fuel_per_100km,
        }
    }
}

/// A single aircraft in a fleet.
///
/// Fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aircraft {
    kind: AircraftKind,
    specs: AircraftSpecs,
}

impl Aircraft {
    pub const fn new(kind: AircraftKind, specs: AircraftSpecs) -> Self {
        Self { kind, specs }
    }

    /// Aircraft of `kind` carrying its preset triple.
    pub const fn preset(kind: AircraftKind) -> Self {
        Self::new(kind, kind.preset())
    }

    pub const fn kind(&self) -> AircraftKind {
        self.kind
    }

    pub const fn specs(&self) -> AircraftSpecs {
        self.specs
    }

    pub const fn capacity(&self) -> i64 {
        self.specs.capacity
    }

    pub const fn range_km(&self) -> f64 {
        self.specs.range_km
    }

    pub const fn fuel_per_100km(&self) -> f64 {
        self.specs.fuel_per_100km
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.kind {
            AircraftKind::Cargo => "kg",
            _ => "seats",
        };
        write!(
            f,
            "{:<9} capacity={} {}, range={} km, fuel={}/100km",
            self.kind.label(),
            self.capacity(),
            unit,
            self.range_km(),
            self.fuel_per_100km()
        )
    }
}
