//! gt-core: shared grid model for the output verification tools.
//!
//! A grid is a square matrix of signed integers persisted as a flat,
//! row-major binary file with no header, metadata, or delimiters. The
//! dimension is supplied by the caller; it cannot be recovered from the
//! file itself.

pub mod error;
pub mod grid;
pub mod variant;

pub use error::GridError;
pub use grid::{ElemWidth, Grid};
pub use variant::Variant;
