//! In-memory airline fleet catalog.
//!
//! This library provides functionality to:
//! - Create aircraft of a closed set of kinds, from presets or explicit specs
//! - Assemble them into a fleet with a fluent builder
//! - Query the fleet: total capacity, range ordering, fuel-consumption filter
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Selector   │───▶│   Factory   │───▶│   Builder   │───▶│    Fleet    │
//! │ (str/kind)  │    │ (presets)   │    │  (fluent)   │    │  (queries)  │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use airfleet::{factory, AircraftSpecs, FleetBuilder};
//!
//! fn main() -> Result<(), airfleet::FactoryError> {
//!     let mut fleet = FleetBuilder::new()
//!         .add_one(factory::create("passenger", Some(AircraftSpecs::new(200, 5000.0, 30.0)))?)
//!         .add_one(factory::create("cargo", Some(AircraftSpecs::new(50_000, 4000.0, 50.0)))?)
//!         .add_one(factory::create("private", Some(AircraftSpecs::new(10, 6000.0, 20.0)))?)
//!         .build();
//!
//!     assert_eq!(fleet.total_capacity(), 50_210);
//!
//!     fleet.sort_by_range_descending();
//!     let thirsty = fleet.find_by_fuel_consumption(25.0, 40.0);
//!     assert_eq!(thirsty.len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod demo;
pub mod factory;
pub mod fleet;
pub mod report;
pub mod shared;
pub mod types;

pub use builder::FleetBuilder;
pub use demo::{ConfiguredDemo, DemoError, DemoOutcome, FuelWindow, PresetDemo};
pub use factory::{create, create_kind, FactoryError};
pub use fleet::{Fleet, FleetSummary};
pub use types::{Aircraft, AircraftKind, AircraftSpecs};
