//! gt-view: heatmap rendering for simulation output grids.
//!
//! Provides the palette/resampling pipeline shared by the interactive
//! terminal viewer and the PNG exporter.

pub mod app;
pub mod heatmap;

pub use app::App;
