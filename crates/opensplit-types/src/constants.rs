//! System-wide constants for the OpenSplit settlement engine.

/// Smallest roster that can still split an expense. Removal is refused
/// once the roster is at this floor.
pub const MIN_PARTICIPANTS_FOR_SPLIT: usize = 2;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenSplit";
