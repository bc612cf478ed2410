//! Broadcasting sparse period values back onto a daily index.

use chrono::NaiveDate;

use crate::resample::SparseSeries;

/// Places every defined, anchored point of `sparse` on its row of
/// `dense_index` and linearly interpolates the rows strictly between two
/// placed points.
///
/// Rows before the first placed point and after the last stay `None`.
/// Points whose anchor is not a date of `dense_index` are dropped.
pub fn align_interpolate(sparse: &SparseSeries, dense_index: &[NaiveDate]) -> Vec<Option<f64>> {
    let mut out = vec![None; dense_index.len()];
    for p in sparse.points() {
        let (Some(at), Some(value)) = (p.at, p.value) else {
            continue;
        };
        if let Ok(row) = dense_index.binary_search(&at) {
            out[row] = Some(value);
        }
    }
    interpolate_inside(&mut out);
    out
}

/// Fills every `None` that has a defined value somewhere before and after it,
/// by straight-line interpolation on row position.
pub fn interpolate_inside(values: &mut [Option<f64>]) {
    let mut prev: Option<(usize, f64)> = None;
    for i in 0..values.len() {
        let Some(v) = values[i] else { continue };
        if let Some((j, vj)) = prev {
            let span = (i - j) as f64;
            for (k, slot) in values.iter_mut().enumerate().take(i).skip(j + 1) {
                *slot = Some(vj + (v - vj) * (k - j) as f64 / span);
            }
        }
        prev = Some((i, v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        period::ResamplePeriod,
        resample::{SparsePoint, SparseSeries},
    };

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn interpolates_only_between_known_points() {
        let mut v = vec![None, Some(0.0), None, None, Some(3.0), None];
        interpolate_inside(&mut v);
        assert_eq!(v, vec![None, Some(0.0), Some(1.0), Some(2.0), Some(3.0), None]);
    }

    #[test]
    fn single_point_is_left_alone() {
        let mut v = vec![None, Some(5.0), None];
        interpolate_inside(&mut v);
        assert_eq!(v, vec![None, Some(5.0), None]);
    }

    #[test]
    fn unanchored_and_undefined_points_are_skipped() {
        let index = vec![d(2024, 1, 2), d(2024, 1, 3), d(2024, 1, 4), d(2024, 1, 5)];
        let sparse = SparseSeries::new(
            ResamplePeriod::BusinessMonthEnd,
            vec![
                SparsePoint { key: d(2024, 1, 2), at: Some(d(2024, 1, 2)), value: Some(1.0) },
                SparsePoint { key: d(2024, 1, 3), at: None, value: Some(9.0) },
                SparsePoint { key: d(2024, 1, 4), at: Some(d(2024, 1, 4)), value: None },
                SparsePoint { key: d(2024, 1, 5), at: Some(d(2024, 1, 5)), value: Some(4.0) },
            ],
        );
        assert_eq!(
            align_interpolate(&sparse, &index),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
        );
    }
}
