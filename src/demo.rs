//! Scripted demo sequences.
//!
//! Both demos run the same steps: build, list as built, total capacity,
//! sort by range, list again, filter by fuel consumption, list the matches
//! and print a summary.

use crate::builder::FleetBuilder;
use crate::factory::{self, FactoryError};
use crate::fleet::Fleet;
use crate::report;
use crate::types::{Aircraft, AircraftKind, AircraftSpecs};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Factory error: {0}")]
    Factory(#[from] FactoryError),
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Inclusive fuel-consumption window used for the filter step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelWindow {
    pub min: f64,
    pub max: f64,
}

impl FuelWindow {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Result of a demo run.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Fleet after sorting by range
    pub fleet: Fleet,
    /// Aircraft matched by the fuel filter
    pub filtered: Vec<Aircraft>,
}

/// Demo built from explicitly configured aircraft.
#[derive(Debug, Clone)]
pub struct ConfiguredDemo {
    /// Selector and specs for each aircraft, in insertion order
    pub aircraft: Vec<(String, AircraftSpecs)>,
    pub fuel_window: FuelWindow,
}

impl Default for ConfiguredDemo {
    fn default() -> Self {
        Self {
            aircraft: vec![
                ("passenger".to_string(), AircraftSpecs::new(200, 5000.0, 30.0)),
                ("cargo".to_string(), AircraftSpecs::new(50_000, 4000.0, 50.0)),
                ("private".to_string(), AircraftSpecs::new(10, 6000.0, 20.0)),
            ],
            fuel_window: FuelWindow::new(25.0, 40.0),
        }
    }
}

impl ConfiguredDemo {
    pub fn with_fuel_window(mut self, window: FuelWindow) -> Self {
        self.fuel_window = window;
        self
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoOutcome, DemoError> {
        tracing::info!("Running configured fleet demo");

        let mut builder = FleetBuilder::new();
        for (selector, specs) in &self.aircraft {
            builder = builder.add_one(factory::create(selector, Some(*specs))?);
        }

        run_steps(builder.build(), self.fuel_window, out)
    }
}

/// Demo built from preset aircraft in per-kind counts.
#[derive(Debug, Clone)]
pub struct PresetDemo {
    pub passenger: i64,
    pub cargo: i64,
    pub private: i64,
    pub fuel_window: FuelWindow,
}

impl Default for PresetDemo {
    fn default() -> Self {
        Self {
            passenger: 3,
            cargo: 2,
            private: 1,
            fuel_window: FuelWindow::new(6.0, 10.0),
        }
    }
}

impl PresetDemo {
    pub fn with_fuel_window(mut self, window: FuelWindow) -> Self {
        self.fuel_window = window;
        self
    }

    pub fn builder(&self) -> FleetBuilder {
        FleetBuilder::new()
            .add_many(AircraftKind::Passenger, self.passenger)
            .add_many(AircraftKind::Cargo, self.cargo)
            .add_many(AircraftKind::Private, self.private)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoOutcome, DemoError> {
        tracing::info!(
            "Running preset fleet demo: {} passenger, {} cargo, {} private",
            self.passenger,
            self.cargo,
            self.private
        );

        run_steps(self.builder().build(), self.fuel_window, out)
    }
}

/// Run the listing, sort and filter steps over an already built fleet.
pub fn run_steps<W: Write>(
    mut fleet: Fleet,
    window: FuelWindow,
    out: &mut W,
) -> Result<DemoOutcome, DemoError> {
    report::write_fleet(out, "Fleet as built", &fleet)?;
    report::write_total_capacity(out, fleet.total_capacity())?;

    fleet.sort_by_range_descending();
    report::write_fleet(out, "Fleet sorted by range (descending)", &fleet)?;

    let filtered = fleet.find_by_fuel_consumption(window.min, window.max);
    tracing::info!(
        "{} of {} aircraft burn between {} and {} per 100km",
        filtered.len(),
        fleet.len(),
        window.min,
        window.max
    );
    let title = format!(
        "Fuel consumption between {} and {} per 100km",
        window.min, window.max
    );
    report::write_fleet(out, &title, &filtered)?;

    report::write_summary(out, &fleet.summary())?;

    Ok(DemoOutcome { fleet, filtered })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_demo() {
        let mut out = Vec::new();
        let outcome = ConfiguredDemo::default().run(&mut out).unwrap();

        assert_eq!(outcome.fleet.total_capacity(), 50_210);

        let order: Vec<(AircraftKind, f64)> = outcome
            .fleet
            .iter()
            .map(|a| (a.kind(), a.range_km()))
            .collect();
        assert_eq!(
            order,
            vec![
                (AircraftKind::Private, 6000.0),
                (AircraftKind::Passenger, 5000.0),
                (AircraftKind::Cargo, 4000.0),
            ]
        );

        assert_eq!(outcome.filtered.len(), 1);
        assert_eq!(outcome.filtered[0].kind(), AircraftKind::Passenger);
        assert_eq!(outcome.filtered[0].fuel_per_100km(), 30.0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total capacity: 50210"));
    }

    #[test]
    fn test_preset_demo() {
        let mut out = Vec::new();
        let outcome = PresetDemo::default().run(&mut out).unwrap();

        assert_eq!(outcome.fleet.len(), 6);
        assert_eq!(outcome.fleet.total_capacity(), 100_550);
        assert_eq!(outcome.filtered.len(), 3);
        assert!(outcome
            .filtered
            .iter()
            .all(|a| a.kind() == AircraftKind::Passenger && a.fuel_per_100km() == 8.5));

        // Passenger (5000) > Cargo (4000) > Private (3000)
        let kinds: Vec<AircraftKind> = outcome.fleet.iter().map(Aircraft::kind).collect();
        assert_eq!(kinds[..3], [AircraftKind::Passenger; 3]);
        assert_eq!(kinds[3..5], [AircraftKind::Cargo; 2]);
        assert_eq!(kinds[5], AircraftKind::Private);
    }

    #[test]
    fn test_configured_demo_unknown_selector() {
        let demo = ConfiguredDemo {
            aircraft: vec![("blimp".to_string(), AircraftSpecs::new(1, 1.0, 1.0))],
            fuel_window: FuelWindow::new(0.0, 1.0),
        };

        let mut out = Vec::new();
        let err = demo.run(&mut out).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Factory(FactoryError::UnknownAircraftKind(ref s)) if s == "blimp"
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_inverted_window_filters_nothing() {
        let mut out = Vec::new();
        let outcome = PresetDemo::default()
            .with_fuel_window(FuelWindow::new(10.0, 6.0))
            .run(&mut out)
            .unwrap();
        assert!(outcome.filtered.is_empty());
    }
}
