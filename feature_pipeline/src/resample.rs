//! Down-sampling a daily price column to period boundaries.
//!
//! [`resample`] produces a [`SparseSeries`]: one [`SparsePoint`] per period key
//! in the input's date range, each carrying
//! - the calendar `key` of the period,
//! - `at`, the trading day the point will be broadcast onto (if any),
//! - the sampled `value` (if any).
//!
//! The sparse series knows nothing about the dense index it came from beyond
//! those anchor dates; putting it back on a daily grid is
//! [`align_interpolate`](crate::align::align_interpolate)'s job.

use chrono::NaiveDate;

use crate::period::ResamplePeriod;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparsePoint {
    /// Period boundary this point represents.
    pub key: NaiveDate,
    /// Trading day the point is broadcast onto.
    pub at: Option<NaiveDate>,
    /// Sampled or derived value.
    pub value: Option<f64>,
}

/// Period-keyed values, ascending by key.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseSeries {
    period: ResamplePeriod,
    points: Vec<SparsePoint>,
}

/// Samples `values` (indexed by the ascending dates in `index`) at every key of
/// `period` between the first and last date.
///
/// End-anchored periods take the value of the last trading day on or before
/// the key, provided that day is in the same period; otherwise the point is
/// missing entirely. Start-anchored periods take the as-of value at the key
/// (last trading day on or before it) and anchor at the first trading day on or
/// after the key within the same period.
///
/// `index` and `values` must have the same length.
pub fn resample(index: &[NaiveDate], values: &[f64], period: ResamplePeriod) -> SparseSeries {
    debug_assert_eq!(index.len(), values.len());
    let (Some(&first), Some(&last)) = (index.first(), index.last()) else {
        return SparseSeries {
            period,
            points: Vec::new(),
        };
    };

    let points = period
        .keys(first, last)
        .into_iter()
        .map(|key| {
            // rows with date <= key
            let upto = index.partition_point(|d| *d <= key);
            let on_or_before = upto.checked_sub(1);
            if period.is_start_anchored() {
                let after = index.partition_point(|d| *d < key);
                SparsePoint {
                    key,
                    at: index
                        .get(after)
                        .copied()
                        .filter(|d| period.same_period(key, *d)),
                    value: on_or_before.map(|i| values[i]),
                }
            } else {
                match on_or_before.filter(|&i| period.same_period(key, index[i])) {
                    Some(i) => SparsePoint {
                        key,
                        at: Some(index[i]),
                        value: Some(values[i]),
                    },
                    None => SparsePoint {
                        key,
                        at: None,
                        value: None,
                    },
                }
            }
        })
        .collect();

    SparseSeries { period, points }
}

impl SparseSeries {
    pub fn new(period: ResamplePeriod, points: Vec<SparsePoint>) -> Self {
        Self { period, points }
    }

    pub fn period(&self) -> ResamplePeriod {
        self.period
    }

    pub fn points(&self) -> &[SparsePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Fills missing values from the most recent known value. Anchors are
    /// untouched.
    pub fn ffill(mut self) -> Self {
        let mut last = None;
        for p in &mut self.points {
            match p.value {
                Some(v) => last = Some(v),
                None => p.value = last,
            }
        }
        self
    }

    /// Moves every value `n` periods later, keeping keys and anchors in place.
    /// The first `n` points become missing.
    pub fn shift(mut self, n: usize) -> Self {
        let values = self.values();
        for (i, p) in self.points.iter_mut().enumerate() {
            p.value = i.checked_sub(n).and_then(|j| values[j]);
        }
        self
    }

    /// Relative change against the value `lag` periods earlier:
    /// `v[k] / v[k - lag] - 1`.
    ///
    /// Missing values are padded from the previous known value before
    /// differencing, so a gap in the samples does not swallow the next change.
    pub fn pct_change(self, lag: usize) -> Self {
        let mut out = self.ffill();
        let filled = out.values();
        for (i, p) in out.points.iter_mut().enumerate() {
            p.value = match (i.checked_sub(lag).and_then(|j| filled[j]), filled[i]) {
                (Some(prev), Some(cur)) => Some(cur / prev - 1.0),
                _ => None,
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_end_samples_last_trading_day() {
        // 2024-03-29 (Good Friday) missing: March anchors on the 28th
        let index = vec![
            d(2024, 1, 30),
            d(2024, 1, 31),
            d(2024, 2, 28),
            d(2024, 2, 29),
            d(2024, 3, 27),
            d(2024, 3, 28),
            d(2024, 4, 1),
        ];
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let s = resample(&index, &values, ResamplePeriod::BusinessMonthEnd);
        let pts = s.points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0].at, Some(d(2024, 1, 31)));
        assert_eq!(pts[0].value, Some(2.0));
        assert_eq!(pts[1].value, Some(4.0));
        assert_eq!(pts[2].key, d(2024, 3, 29));
        assert_eq!(pts[2].at, Some(d(2024, 3, 28)));
        assert_eq!(pts[2].value, Some(6.0));
    }

    #[test]
    fn month_without_bars_is_missing() {
        let index = vec![d(2024, 1, 31), d(2024, 3, 29)];
        let s = resample(&index, &[10.0, 12.0], ResamplePeriod::BusinessMonthEnd);
        assert_eq!(s.values(), vec![Some(10.0), None, Some(12.0)]);
        assert_eq!(s.points()[1].at, None);
    }

    #[test]
    fn month_start_uses_as_of_price_and_anchors_forward() {
        // 2024-06-01 is a Saturday
        let index = vec![d(2024, 5, 30), d(2024, 5, 31), d(2024, 6, 3), d(2024, 6, 4)];
        let s = resample(&index, &[1.0, 2.0, 3.0, 4.0], ResamplePeriod::MonthStart);
        assert_eq!(s.len(), 1);
        let p = s.points()[0];
        assert_eq!(p.key, d(2024, 6, 1));
        assert_eq!(p.value, Some(2.0));
        assert_eq!(p.at, Some(d(2024, 6, 3)));
    }

    #[test]
    fn pct_change_pads_gaps() {
        let s = SparseSeries::new(
            ResamplePeriod::BusinessMonthEnd,
            vec![
                SparsePoint { key: d(2024, 1, 31), at: None, value: Some(100.0) },
                SparsePoint { key: d(2024, 2, 29), at: None, value: None },
                SparsePoint { key: d(2024, 3, 29), at: None, value: Some(110.0) },
            ],
        );
        let v = s.pct_change(1).values();
        assert_eq!(v[0], None);
        assert_eq!(v[1], Some(0.0));
        assert!((v[2].unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn shift_moves_values_not_keys() {
        let s = SparseSeries::new(
            ResamplePeriod::MonthStart,
            (1..=3)
                .map(|m| SparsePoint {
                    key: d(2024, m, 1),
                    at: Some(d(2024, m, 1)),
                    value: Some(m as f64),
                })
                .collect(),
        );
        let shifted = s.shift(1);
        assert_eq!(shifted.values(), vec![None, Some(1.0), Some(2.0)]);
        assert_eq!(shifted.points()[2].key, d(2024, 3, 1));
    }

    #[test]
    fn empty_input_is_empty_series() {
        assert!(resample(&[], &[], ResamplePeriod::BusinessYearEnd).is_empty());
    }
}
