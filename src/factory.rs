//! Aircraft construction from a kind selector.

use crate::types::{Aircraft, AircraftKind, AircraftSpecs};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("Unknown aircraft kind: {0:?}")]
    UnknownAircraftKind(String),
}

/// Create an aircraft from a string selector.
///
/// The selector is matched case-insensitively against `passenger`, `cargo`
/// and `private`. When `specs` is `None` the kind's preset triple is used.
/// Supplied specs are stored as given, without range checks.
pub fn create(selector: &str, specs: Option<AircraftSpecs>) -> Result<Aircraft, FactoryError> {
    let kind = selector.parse::<AircraftKind>()?;
    Ok(create_kind(kind, specs))
}

/// Create an aircraft from an already resolved kind.
pub fn create_kind(kind: AircraftKind, specs: Option<AircraftSpecs>) -> Aircraft {
    let aircraft = match specs {
        Some(specs) => Aircraft::new(kind, specs),
        None => Aircraft::preset(kind),
    };

    tracing::debug!("Created {}", aircraft);
    aircraft
}
