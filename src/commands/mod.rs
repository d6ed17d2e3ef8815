//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{SimulationResult, print_simulation_result, run_simulation};
