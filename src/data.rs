//! Canonical data layout for multi-variable sample arrays.
//!
//! All data-level operations work on a (variables × samples) matrix with one
//! variable per row. [`as_data_array`] normalises arrays of arbitrary rank
//! into that layout; [`DataArray`] wraps the result and memoizes each
//! variable's observed alphabet size.

use std::cell::OnceCell;
use std::collections::HashSet;

use ndarray::{Array, Array2, ArrayView1, Axis, Dimension};

use crate::errors::{EstimationError, Result};

/// Normalise an array of arbitrary rank into a (variables × samples) matrix.
///
/// Rank-1 input becomes a single variable; rank-2 input is transposed when
/// `axis == 0` (samples in rows) and kept as-is when `axis == 1`; higher-rank
/// input has the sample axis relocated to position 0 and the remaining axes
/// flattened into the variable dimension before transposing.
pub fn as_data_array<D: Dimension>(ar: &Array<i32, D>, axis: usize) -> Result<Array2<i32>> {
    if ar.is_empty() {
        return Err(EstimationError::Counts("empty data array".into()));
    }
    let ndim = ar.ndim();
    if axis >= ndim.max(1) {
        return Err(EstimationError::Axis { axis, rank: ndim });
    }
    match ndim {
        0 => Err(EstimationError::Counts(
            "data array must have at least one dimension".into(),
        )),
        1 => {
            let n = ar.len();
            let samples: Vec<i32> = ar.iter().copied().collect();
            Ok(Array2::from_shape_vec((1, n), samples).expect("shape matches length"))
        }
        2 => {
            let (rows, cols) = (ar.shape()[0], ar.shape()[1]);
            let flat: Vec<i32> = ar.iter().copied().collect();
            let mat = Array2::from_shape_vec((rows, cols), flat).expect("shape matches length");
            // axis == 0: samples are rows, so transpose to variables x samples.
            Ok(if axis == 0 { mat.reversed_axes() } else { mat })
        }
        _ => {
            let mut view = ar.view();
            view.swap_axes(axis, 0);
            let n = view.shape()[0];
            let p = view.len() / n;
            // Iteration follows the logical (row-major) order of the swapped
            // view, giving an n-by-p layout to transpose.
            let flat: Vec<i32> = view.iter().copied().collect();
            let mat = Array2::from_shape_vec((n, p), flat).expect("shape matches length");
            Ok(mat.reversed_axes())
        }
    }
}

/// A read-only (variables × samples) view of a sample dataset.
///
/// Observed per-variable alphabet sizes are computed on first access and
/// memoized for the lifetime of the value. The memoization cell makes this
/// type single-thread; build one `DataArray` per thread if needed.
#[derive(Debug)]
pub struct DataArray {
    data: Array2<i32>,
    ks: OnceCell<Vec<usize>>,
}

impl DataArray {
    /// Build from a raw array plus the sample-indexing axis.
    pub fn new<D: Dimension>(ar: &Array<i32, D>, axis: usize) -> Result<Self> {
        let data = as_data_array(ar, axis)?;
        Ok(Self::from_canonical(data))
    }

    /// Wrap a matrix that is already in (variables × samples) orientation.
    pub fn from_canonical(data: Array2<i32>) -> Self {
        Self {
            data,
            ks: OnceCell::new(),
        }
    }

    pub fn n_variables(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_samples(&self) -> usize {
        self.data.ncols()
    }

    /// One row per variable.
    pub fn variables(&self) -> impl Iterator<Item = ArrayView1<'_, i32>> {
        self.data.axis_iter(Axis(0))
    }

    pub fn variable(&self, index: usize) -> Result<ArrayView1<'_, i32>> {
        if index >= self.n_variables() {
            return Err(EstimationError::Axis {
                axis: index,
                rank: self.n_variables(),
            });
        }
        Ok(self.data.row(index))
    }

    /// Select a subset of variables as a new canonical matrix.
    pub fn select(&self, indices: &[usize]) -> Result<Array2<i32>> {
        let mut rows = Vec::with_capacity(indices.len() * self.n_samples());
        for &i in indices {
            rows.extend(self.variable(i)?.iter().copied());
        }
        Ok(Array2::from_shape_vec((indices.len(), self.n_samples()), rows)
            .expect("shape matches selection"))
    }

    /// Observed alphabet size (number of distinct values) for each variable.
    pub fn ks(&self) -> &[usize] {
        self.ks.get_or_init(|| {
            self.variables()
                .map(|row| row.iter().copied().collect::<HashSet<i32>>().len())
                .collect()
        })
    }
}
