//! Simulation utilities: program loading, the driver, and cycle snapshots.

/// Bitstream program loader and data memory initialization.
pub mod loader;
/// The top-level simulation driver.
pub mod simulator;
/// Per-cycle state snapshots (the presenter interface).
pub mod snapshot;
