//! FIR lag expansion of stimulus sequences
//!
//! This module expands event-onset sequences into banks of time-shifted
//! regressor columns for finite impulse response (FIR) model fitting.

use ndarray::{s, Array2, ArrayView1, ArrayView2};

/// Build the stimulus matrix for a single condition.
///
/// Expands the sequence `v` into a matrix of shape
/// `(v.len(), prenumlag + postnumlag + 1)` where each column holds `v`
/// shifted by a particular lag. For column index `p` the effective
/// shift is `p - prenumlag`: non-negative shifts delay the sequence
/// (leading rows zero), negative shifts advance it (trailing rows
/// zero). Out-of-range samples are zero-padded.
///
/// # Arguments
/// * `v` - Stimulus sequence; zeros except at onsets (fractional
///   values are also okay)
/// * `prenumlag` - Number of stimulus points in the past
/// * `postnumlag` - Number of stimulus points in the future
/// * `wantwrap` - Reserved; wraparound addressing is not implemented
///   and the flag is currently ignored
pub fn build_single_lag_matrix(
    v: ArrayView1<'_, f64>,
    prenumlag: usize,
    postnumlag: usize,
    wantwrap: bool,
) -> Array2<f64> {
    let _ = wantwrap;

    let nvols = v.len();
    let num = prenumlag + postnumlag + 1;
    let mut f = Array2::zeros((nvols, num));

    for p in 0..num {
        let shift = p as isize - prenumlag as isize;
        if shift >= 0 {
            let shift = shift as usize;
            if shift < nvols {
                f.slice_mut(s![shift.., p])
                    .assign(&v.slice(s![..nvols - shift]));
            }
        } else {
            let shift = shift.unsigned_abs();
            if shift < nvols {
                f.slice_mut(s![..nvols - shift, p]).assign(&v.slice(s![shift..]));
            }
        }
        // shifts of |shift| >= nvols leave the column all zero
    }

    f
}

/// Build the full lag-expanded design matrix from a stimulus design.
///
/// Each row of `m` is one condition's stimulus sequence. The result is
/// the horizontal concatenation of the per-condition stimulus matrices,
/// shape `(timepoints, (prenumlag + postnumlag + 1) * conditions)`.
/// With no lags requested the expansion degenerates to the transpose
/// of `m`.
///
/// # Arguments
/// * `m` - Design matrix, conditions x time points
/// * `prenumlag` - Number of stimulus points in the past
/// * `postnumlag` - Number of stimulus points in the future
/// * `wantwrap` - Reserved; see [`build_single_lag_matrix`]
pub fn build_lag_matrix(
    m: ArrayView2<'_, f64>,
    prenumlag: usize,
    postnumlag: usize,
    wantwrap: bool,
) -> Array2<f64> {
    if prenumlag == 0 && postnumlag == 0 {
        return m.t().to_owned();
    }

    let (nconds, nvols) = m.dim();
    let num = prenumlag + postnumlag + 1;

    tracing::debug!(
        "Expanding {} conditions x {} time points into {} lag columns",
        nconds,
        nvols,
        num * nconds
    );

    let mut f = Array2::zeros((nvols, num * nconds));
    for (c, row) in m.rows().into_iter().enumerate() {
        let block = build_single_lag_matrix(row, prenumlag, postnumlag, wantwrap);
        f.slice_mut(s![.., c * num..(c + 1) * num]).assign(&block);
    }

    f
}
