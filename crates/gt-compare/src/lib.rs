//! Consistency checking for simulation output grids.
//!
//! Compares the grids produced by the `dynamic` and `static` execution
//! variants against the `serial` reference, element by element, with
//! first-failure-wins reporting.

pub mod diff;
pub mod report;

pub use diff::{check_consistency, first_mismatch, CheckError, Mismatch};
pub use report::ConsistencyReport;
