//! Max-normalization of arrays
//!
//! This module rescales arrays so that the maximum along a chosen axis
//! (or over the whole array) equals 1.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{DesignError, Result};

/// Axis selection for [`normalize_by_max`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormAxis {
    /// Row-wise for a single-row matrix, column-wise otherwise
    Default,
    /// Normalize each slice along the given axis by that slice's
    /// maximum (0 = each column, 1 = each row)
    Axis(usize),
    /// Normalize by the single maximum over the whole array
    Global,
}

/// Divide a matrix by the maximum value along some axis.
///
/// Each slice along the resolved axis is divided by its own maximum;
/// maxima are computed independently per slice. With
/// [`NormAxis::Global`] the whole array is divided by its single
/// maximum. Slices whose maximum is 0 propagate IEEE-754 semantics
/// (±inf or NaN); this is intentionally not trapped.
///
/// ```
/// use glm_design::{normalize_by_max, NormAxis};
/// use ndarray::array;
///
/// let m = array![[1.0, 2.0, 3.0]];
/// let n = normalize_by_max(m.view(), NormAxis::Default).unwrap();
/// assert!((n[[0, 2]] - 1.0).abs() < 1e-12);
/// ```
pub fn normalize_by_max(m: ArrayView2<'_, f64>, dim: NormAxis) -> Result<Array2<f64>> {
    let axis = match dim {
        NormAxis::Global => {
            let max = m.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            return Ok(m.mapv(|x| x / max));
        }
        // A single row normalizes along itself, anything else column-wise
        NormAxis::Default => {
            if m.nrows() == 1 {
                1
            } else {
                0
            }
        }
        NormAxis::Axis(axis) => {
            if axis >= m.ndim() {
                return Err(DesignError::InvalidAxis {
                    axis,
                    ndim: m.ndim(),
                });
            }
            axis
        }
    };

    let mut out = m.to_owned();
    if axis == 0 {
        for mut col in out.columns_mut() {
            let max = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            col.mapv_inplace(|x| x / max);
        }
    } else {
        for mut row in out.rows_mut() {
            let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            row.mapv_inplace(|x| x / max);
        }
    }

    Ok(out)
}

/// Divide a sequence by its maximum value.
///
/// One-dimensional counterpart of [`normalize_by_max`]; a flat
/// sequence has a single maximum, so this matches the global case.
pub fn normalize_vec_by_max(v: ArrayView1<'_, f64>) -> Array1<f64> {
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    v.mapv(|x| x / max)
}
