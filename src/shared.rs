//! Process-wide fleet instance.
//!
//! Most callers should own the [`Fleet`] returned by
//! [`FleetBuilder::build`](crate::FleetBuilder::build). This module exists for
//! callers that need exactly one fleet per process: it is created on first
//! access and never replaced.

use crate::fleet::Fleet;
use parking_lot::Mutex;
use std::sync::OnceLock;

static SHARED_FLEET: OnceLock<Mutex<Fleet>> = OnceLock::new();

/// The shared fleet, created empty on first call.
pub fn fleet() -> &'static Mutex<Fleet> {
    SHARED_FLEET.get_or_init(|| {
        tracing::debug!("Initializing shared fleet");
        Mutex::new(Fleet::new())
    })
}

/// Append `built` to the shared instance. Returns the shared length afterwards.
pub fn publish(built: Fleet) -> usize {
    let mut shared = fleet().lock();
    shared.extend(built);
    tracing::debug!("Shared fleet now holds {} aircraft", shared.len());
    shared.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FleetBuilder;
    use crate::types::AircraftKind;

    #[test]
    fn test_single_instance() {
        assert!(std::ptr::eq(fleet(), fleet()));

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| fleet() as *const Mutex<Fleet> as usize))
            .collect();
        let addr = fleet() as *const Mutex<Fleet> as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), addr);
        }
    }

    #[test]
    fn test_publish_appends() {
        let built = FleetBuilder::new()
            .add_many(AircraftKind::Cargo, 2)
            .build();

        // Other tests may share the instance; compare lengths under one lock.
        let mut shared = fleet().lock();
        let before = shared.len();
        shared.extend(built.clone());
        assert_eq!(shared.len(), before + 2);
        drop(shared);

        let after = publish(built);
        assert!(after >= before + 4);
    }
}
