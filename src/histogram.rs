//! Joint histogramming over variable subsets.
//!
//! Counts are taken over distinct joint value tuples (one tuple per sample
//! column) and emitted in sorted key order, so identical data always yields
//! the same counts vector. Per-combination histograms are produced lazily,
//! one counts vector per size-`r` variable combination in canonical
//! lexicographic index order.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::data::DataArray;
use crate::errors::{EstimationError, Result};

/// Joint bin counts over the sample columns of a canonical
/// (variables × samples) matrix.
pub fn joint_counts(data: ArrayView2<'_, i32>) -> Array1<i32> {
    let mut bins: BTreeMap<Vec<i32>, i32> = BTreeMap::new();
    for column in data.axis_iter(Axis(1)) {
        *bins.entry(column.to_vec()).or_insert(0) += 1;
    }
    Array1::from(bins.into_values().collect::<Vec<i32>>())
}

/// Lexicographic size-`r` combinations of the indices `0..n`, without
/// repetition. Finite and single-pass; restart by constructing a new value.
#[derive(Debug)]
pub struct Combinations {
    n: usize,
    r: usize,
    indices: Vec<usize>,
    started: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            r,
            indices: (0..r).collect(),
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.r > self.n || self.r == 0 {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        // Advance the rightmost index that can still move.
        let mut i = self.r;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.r {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Lazy sequence of joint bin counts, one per size-`r` variable combination.
#[derive(Debug)]
pub struct CombinationHistograms {
    data: DataArray,
    combinations: Combinations,
}

impl CombinationHistograms {
    pub fn new(data: DataArray, r: usize) -> Result<Self> {
        let p = data.n_variables();
        if r == 0 || r > p {
            return Err(EstimationError::Histogram { r, p });
        }
        Ok(Self {
            combinations: Combinations::new(p, r),
            data,
        })
    }
}

impl Iterator for CombinationHistograms {
    type Item = Array1<i32>;

    fn next(&mut self) -> Option<Array1<i32>> {
        let subset = self.combinations.next()?;
        let rows: Array2<i32> = self
            .data
            .select(&subset)
            .expect("combination indices are within the variable count");
        Some(joint_counts(rows.view()))
    }
}
