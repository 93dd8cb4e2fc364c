//! Element-wise grid comparison.
//!
//! Comparison runs on the flat arrays; reshaping an already-correct flat
//! array cannot change equality, so no 2D view is ever built here.

use std::path::Path;

use thiserror::Error;

use gt_core::{ElemWidth, Grid, GridError, Variant};

use crate::report::ConsistencyReport;

/// Location and values of the first differing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Flat row-major index of the difference.
    pub index: usize,
    /// Value in the reference grid.
    pub expected: i64,
    /// Value in the candidate grid.
    pub found: i64,
}

/// Consistency check errors
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The CLI message names only the variant; the mismatch detail is kept
    /// for library consumers and tests.
    #[error("{variant} does not match serial")]
    Mismatch { variant: Variant, mismatch: Mismatch },
}

/// Find the first element where `candidate` differs from `reference`.
///
/// Both grids are expected to hold the same element count; extra trailing
/// elements in either are never produced by the loader and are not compared.
pub fn first_mismatch(reference: &Grid, candidate: &Grid) -> Option<Mismatch> {
    reference
        .as_flat()
        .iter()
        .zip(candidate.as_flat())
        .position(|(a, b)| a != b)
        .map(|index| Mismatch {
            index,
            expected: reference.as_flat()[index],
            found: candidate.as_flat()[index],
        })
}

/// Check the `dynamic` and `static` grids against the `serial` reference.
///
/// Variants are checked in the fixed order of [`Variant::COMPARED`]; the
/// first mismatching variant halts the run and the remaining variant is not
/// examined.
pub fn check_consistency(
    out_dir: &Path,
    width: usize,
    elem: ElemWidth,
) -> Result<ConsistencyReport, CheckError> {
    let reference = Grid::from_file(Variant::REFERENCE.path(out_dir), width, elem)?;
    let mut report = ConsistencyReport::new(width, elem);

    for variant in Variant::COMPARED {
        let candidate = Grid::from_file(variant.path(out_dir), width, elem)?;
        if let Some(mismatch) = first_mismatch(&reference, &candidate) {
            return Err(CheckError::Mismatch { variant, mismatch });
        }
        report.record_match(variant);
    }

    Ok(report)
}
